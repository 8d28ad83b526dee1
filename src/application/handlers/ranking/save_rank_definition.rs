//! SaveRankDefinitionHandler - Command handler for storing a rank taxonomy.

use std::sync::Arc;

use tracing::debug;

use crate::application::HandlerError;
use crate::domain::ranking::RankDefinition;
use crate::ports::RankDefinitionRepository;

/// Command to replace an organization's rank taxonomy.
#[derive(Debug, Clone)]
pub struct SaveRankDefinitionCommand {
    pub definition: RankDefinition,
}

/// Handler for saving rank definitions.
pub struct SaveRankDefinitionHandler {
    definitions: Arc<dyn RankDefinitionRepository>,
}

impl SaveRankDefinitionHandler {
    pub fn new(definitions: Arc<dyn RankDefinitionRepository>) -> Self {
        Self { definitions }
    }

    pub async fn handle(&self, cmd: SaveRankDefinitionCommand) -> Result<(), HandlerError> {
        // Deserialized payloads bypass try_new, so re-check here
        cmd.definition.validate()?;
        self.definitions.put(&cmd.definition).await?;

        debug!(org_id = %cmd.definition.org_id, "Saved rank definition");

        Ok(())
    }
}
