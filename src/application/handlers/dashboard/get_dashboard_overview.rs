//! GetDashboardOverviewHandler - Query handler for the dashboard header.
//!
//! Returns the organization's average score vector, overall score,
//! participation counts, and time-savings summary in one view.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::HandlerError;
use crate::domain::analytics::{
    LiteracyScores, ScoreAggregator, TimeSavingsAnalyzer, TimeSavingsSummary,
};
use crate::domain::foundation::OrgId;
use crate::ports::{RankDefinitionRepository, ResponseRepository, SurveyRepository};

/// Query to assemble the dashboard overview for an organization.
#[derive(Debug, Clone)]
pub struct GetDashboardOverviewQuery {
    pub org_id: OrgId,
}

/// Aggregated dashboard data for one organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub org_id: OrgId,
    /// Organization average per dimension, each rounded to whole points.
    pub average_scores: LiteracyScores,
    /// Rounded mean of the five average dimensions.
    pub overall_score: u8,
    /// Distinct respondents, counted by account id or exact name.
    pub respondent_count: usize,
    pub response_count: usize,
    pub time_savings: TimeSavingsSummary,
}

/// Handler for assembling the dashboard overview.
pub struct GetDashboardOverviewHandler {
    responses: Arc<dyn ResponseRepository>,
    surveys: Arc<dyn SurveyRepository>,
    definitions: Arc<dyn RankDefinitionRepository>,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        responses: Arc<dyn ResponseRepository>,
        surveys: Arc<dyn SurveyRepository>,
        definitions: Arc<dyn RankDefinitionRepository>,
    ) -> Self {
        Self {
            responses,
            surveys,
            definitions,
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardOverviewQuery,
    ) -> Result<DashboardOverview, HandlerError> {
        let responses = self.responses.list(&query.org_id).await?;
        let surveys = self.surveys.list_active(&query.org_id).await?;
        let definition = self.definitions.get(&query.org_id).await?;

        let average_scores =
            ScoreAggregator::org_average(&query.org_id, &responses, definition.as_ref());
        let respondent_count = responses
            .iter()
            .map(|r| r.respondent_key())
            .collect::<HashSet<_>>()
            .len();
        let time_savings = TimeSavingsAnalyzer::summarize(&responses, &surveys);

        Ok(DashboardOverview {
            org_id: query.org_id,
            overall_score: average_scores.overall(),
            average_scores,
            respondent_count,
            response_count: responses.len(),
            time_savings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::{QuestionId, RespondentId, SurveyId, Timestamp};
    use crate::domain::survey::{
        Answer, AnswerValue, Question, QuestionKind, QuestionTag, Survey, SurveyResponse,
    };

    fn org() -> OrgId {
        OrgId::new("org-a").unwrap()
    }

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    fn test_survey() -> Survey {
        let rank = Question::new(qid("q-rank"), QuestionKind::Rank, "Self assessment", vec![])
            .with_tag(QuestionTag::SelfAssessment);
        let time = Question::new(qid("q-time"), QuestionKind::Radio, "Hours saved", vec![])
            .with_tag(QuestionTag::TimeReduction);
        Survey::new(org(), "AI Literacy Survey", vec![rank, time]).unwrap()
    }

    fn response(
        survey: &Survey,
        name: &str,
        respondent_id: Option<&str>,
        rank: &str,
        band: &str,
    ) -> SurveyResponse {
        let answers = vec![
            Answer::try_new(qid("q-rank"), QuestionKind::Rank, AnswerValue::from(rank)).unwrap(),
            Answer::try_new(qid("q-time"), QuestionKind::Radio, AnswerValue::from(band)).unwrap(),
        ];
        SurveyResponse::new(
            survey.id,
            org(),
            name,
            respondent_id.map(|id| RespondentId::new(id).unwrap()),
            answers,
            Timestamp::now(),
        )
        .unwrap()
    }

    fn handler(store: &Arc<InMemoryStore>) -> GetDashboardOverviewHandler {
        GetDashboardOverviewHandler::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn empty_org_yields_zeroed_overview() {
        let store = Arc::new(InMemoryStore::new());
        let overview = handler(&store)
            .handle(GetDashboardOverviewQuery { org_id: org() })
            .await
            .unwrap();

        assert_eq!(overview.overall_score, 0);
        assert_eq!(overview.average_scores, LiteracyScores::zero());
        assert_eq!(overview.respondent_count, 0);
        assert_eq!(overview.response_count, 0);
        assert_eq!(overview.time_savings.total_hours, 0.0);
    }

    #[tokio::test]
    async fn aggregates_scores_counts_and_time_savings() {
        let store = Arc::new(InMemoryStore::new());
        let survey = test_survey();
        store.save(&survey).await.unwrap();
        store
            .append(&response(&survey, "Aiko", Some("u-1"), "rank3", "10_to_20"))
            .await
            .unwrap();
        store
            .append(&response(&survey, "Aiko", Some("u-1"), "rank4", "5_to_10"))
            .await
            .unwrap();
        store
            .append(&response(&survey, "Ben", None, "rank2", "less_than_5"))
            .await
            .unwrap();

        let overview = handler(&store)
            .handle(GetDashboardOverviewQuery { org_id: org() })
            .await
            .unwrap();

        assert_eq!(overview.response_count, 3);
        assert_eq!(overview.respondent_count, 2);
        // bases 60, 80, 40 with up to 5 points of jitter each
        assert!((55..=65).contains(&overview.overall_score));
        assert_eq!(overview.time_savings.total_hours, 25.0);
        assert_eq!(overview.time_savings.max_hours, 15.0);
    }

    #[tokio::test]
    async fn overview_serializes_camel_case() {
        let store = Arc::new(InMemoryStore::new());
        let overview = handler(&store)
            .handle(GetDashboardOverviewQuery { org_id: org() })
            .await
            .unwrap();

        let json = serde_json::to_value(&overview).unwrap();
        assert!(json.get("averageScores").is_some());
        assert!(json.get("overallScore").is_some());
        assert!(json.get("respondentCount").is_some());
        assert!(json.get("timeSavings").is_some());
    }
}
