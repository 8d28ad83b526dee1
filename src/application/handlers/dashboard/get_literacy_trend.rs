//! GetLiteracyTrendHandler - Query handler for the six-month score series.

use std::sync::Arc;

use crate::application::HandlerError;
use crate::domain::analytics::{TrendBuilder, TrendPoint};
use crate::domain::foundation::{OrgId, Timestamp};
use crate::ports::{RankDefinitionRepository, ResponseRepository};

/// Query for an organization's monthly overall-score series.
#[derive(Debug, Clone)]
pub struct GetLiteracyTrendQuery {
    pub org_id: OrgId,
    /// Window anchor; defaults to the current instant.
    pub now: Option<Timestamp>,
}

/// Six calendar months of overall scores, oldest first.
pub type GetLiteracyTrendResult = Vec<TrendPoint>;

/// Handler for building the literacy trend.
pub struct GetLiteracyTrendHandler {
    responses: Arc<dyn ResponseRepository>,
    definitions: Arc<dyn RankDefinitionRepository>,
}

impl GetLiteracyTrendHandler {
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
        query: GetLiteracyTrendQuery,
    ) -> Result<GetLiteracyTrendResult, HandlerError> {
        let responses = self.responses.list(&query.org_id).await?;
        let definition = self.definitions.get(&query.org_id).await?;
        let now = query.now.unwrap_or_else(Timestamp::now);

        Ok(TrendBuilder::monthly_trend(
            &query.org_id,
            &responses,
            definition.as_ref(),
            now,
        ))
    }
}
