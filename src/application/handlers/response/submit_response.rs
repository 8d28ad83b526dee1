//! SubmitResponseHandler - Command handler for recording a new survey response.

use std::sync::Arc;

use tracing::debug;

use crate::application::HandlerError;
use crate::domain::analytics::{ScoreCalculator, TimeSavingsAnalyzer};
use crate::domain::foundation::{OrgId, RespondentId, SurveyId, Timestamp};
use crate::domain::survey::{Answer, SurveyResponse};
use crate::ports::{ResponseRepository, StorageError, SurveyRepository};

/// Command to record a respondent's submission.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub survey_id: SurveyId,
    pub org_id: OrgId,
    pub respondent_name: String,
    /// Stable account id when the respondent is logged in.
    pub respondent_id: Option<RespondentId>,
    pub answers: Vec<Answer>,
}

/// Result of a successful submission: the stored, enriched response.
pub type SubmitResponseResult = SurveyResponse;

/// Handler for recording responses.
///
/// Validates the submission against its survey, computes the
/// denormalized literacy score and weekly time reduction, and appends
/// the enriched response to the store.
pub struct SubmitResponseHandler {
    surveys: Arc<dyn SurveyRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl SubmitResponseHandler {
    pub fn new(
        surveys: Arc<dyn SurveyRepository>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        Self { surveys, responses }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
    ) -> Result<SubmitResponseResult, HandlerError> {
        // 1. Resolve the target survey and check it still accepts responses
        let survey = self
            .surveys
            .find_by_id(&cmd.survey_id, &cmd.org_id)
            .await?
            .ok_or(StorageError::SurveyNotFound(cmd.survey_id))?;
        if !survey.is_active {
            return Err(HandlerError::SurveyInactive(survey.id));
        }

        // 2. Build the validated response
        let response = SurveyResponse::new(
            cmd.survey_id,
            cmd.org_id,
            cmd.respondent_name,
            cmd.respondent_id,
            cmd.answers,
            Timestamp::now(),
        )?;

        // 3. Denormalize the analytics fields stored with the record
        let scores = ScoreCalculator::calculate(&response, None);
        let hours = TimeSavingsAnalyzer::response_hours(&response, std::slice::from_ref(&survey));
        let response = response.with_analytics(scores.overall(), hours);

        // 4. Persist
        self.responses.append(&response).await?;

        debug!(
            response_id = %response.id,
            org_id = %response.org_id,
            "Recorded survey response"
        );

        Ok(response)
    }
}
