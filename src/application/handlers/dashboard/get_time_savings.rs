//! GetTimeSavingsHandler - Query handler for weekly time-savings figures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::HandlerError;
use crate::domain::analytics::{DistributionSlice, TimeSavingsAnalyzer, TimeSavingsSummary};
use crate::domain::foundation::OrgId;
use crate::ports::{ResponseRepository, SurveyRepository};

/// Query for an organization's time-savings figures.
#[derive(Debug, Clone)]
pub struct GetTimeSavingsQuery {
    pub org_id: OrgId,
}

/// Time-savings summary plus the band distribution for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSavingsView {
    pub summary: TimeSavingsSummary,
    /// Non-empty bands only, labeled for display.
    pub distribution: Vec<DistributionSlice>,
}

/// Handler for computing time savings.
pub struct GetTimeSavingsHandler {
    responses: Arc<dyn ResponseRepository>,
    surveys: Arc<dyn SurveyRepository>,
}

impl GetTimeSavingsHandler {
    pub fn new(
        responses: Arc<dyn ResponseRepository>,
        surveys: Arc<dyn SurveyRepository>,
    ) -> Self {
        Self { responses, surveys }
    }

    pub async fn handle(
        &self,
        query: GetTimeSavingsQuery,
    ) -> Result<TimeSavingsView, HandlerError> {
        let responses = self.responses.list(&query.org_id).await?;
        let surveys = self.surveys.list_active(&query.org_id).await?;

        let summary = TimeSavingsAnalyzer::summarize(&responses, &surveys);
        let distribution = TimeSavingsAnalyzer::distribution(&responses, &surveys).slices();

        Ok(TimeSavingsView {
            summary,
            distribution,
        })
    }
}
