//! GetRankChangesHandler - Query handler for per-respondent rank movement.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::HandlerError;
use crate::domain::analytics::{RankChangeInfo, RankChangeStats, RankTransitionTracker};
use crate::domain::foundation::OrgId;
use crate::ports::{RankDefinitionRepository, ResponseRepository};

/// Query for an organization's rank movement list.
#[derive(Debug, Clone)]
pub struct GetRankChangesQuery {
    pub org_id: OrgId,
}

/// Rank movement per respondent plus the movement tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChangesView {
    /// One entry per respondent, most recent submission first.
    pub changes: Vec<RankChangeInfo>,
    /// Up/maintain/down tally; first-time respondents are not counted.
    pub stats: RankChangeStats,
}

/// Handler for computing rank transitions.
pub struct GetRankChangesHandler {
    responses: Arc<dyn ResponseRepository>,
    definitions: Arc<dyn RankDefinitionRepository>,
}

impl GetRankChangesHandler {
    pub fn new(
        responses: Arc<dyn ResponseRepository>,
        definitions: Arc<dyn RankDefinitionRepository>,
    ) -> Self {
        Self {
            responses,
            definitions,
        }
    }

    pub async fn handle(
        &self,
        query: GetRankChangesQuery,
    ) -> Result<RankChangesView, HandlerError> {
        let responses = self.responses.list(&query.org_id).await?;
        let definition = self.definitions.get(&query.org_id).await?;

        let changes =
            RankTransitionTracker::changes(&query.org_id, &responses, definition.as_ref());
        let stats = RankTransitionTracker::stats(&changes);

        Ok(RankChangesView { changes, stats })
    }
}
