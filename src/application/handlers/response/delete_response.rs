//! DeleteResponseHandler - Command handler for removing a stored response.

use std::sync::Arc;

use tracing::debug;

use crate::application::HandlerError;
use crate::domain::foundation::{OrgId, ResponseId};
use crate::ports::ResponseRepository;

/// Command to remove one response from an organization's records.
#[derive(Debug, Clone)]
pub struct DeleteResponseCommand {
    pub response_id: ResponseId,
    pub org_id: OrgId,
}

/// Handler for deleting responses.
pub struct DeleteResponseHandler {
    responses: Arc<dyn ResponseRepository>,
}

impl DeleteResponseHandler {
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }

    pub async fn handle(&self, cmd: DeleteResponseCommand) -> Result<(), HandlerError> {
        self.responses
            .delete(&cmd.response_id, &cmd.org_id)
            .await?;

        debug!(
            response_id = %cmd.response_id,
            org_id = %cmd.org_id,
            "Deleted survey response"
        );

        Ok(())
    }
}
