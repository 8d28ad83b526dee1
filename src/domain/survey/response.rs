//! Submitted survey responses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    OrgId, RespondentId, ResponseId, SurveyId, Timestamp, ValidationError,
};

use super::{Answer, QuestionKind};

/// One person's submission of a survey.
///
/// Immutable after construction. The optional analytics fields are
/// denormalized at submission time so dashboards can read them without
/// recomputing; older stored records may lack them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: ResponseId,
    pub survey_id: SurveyId,
    pub org_id: OrgId,
    pub respondent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_id: Option<RespondentId>,
    pub answers: Vec<Answer>,
    pub submitted_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literacy_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_reduction_hours: Option<f64>,
}

impl SurveyResponse {
    /// Creates a validated response, generating its id.
    ///
    /// This is the one place structural validation happens: an empty
    /// respondent name or an answer whose value shape contradicts its
    /// question kind is rejected outright.
    pub fn new(
        survey_id: SurveyId,
        org_id: OrgId,
        respondent_name: impl Into<String>,
        respondent_id: Option<RespondentId>,
        answers: Vec<Answer>,
        submitted_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let respondent_name = respondent_name.into();
        if respondent_name.is_empty() {
            return Err(ValidationError::empty_field("respondent_name"));
        }
        for answer in &answers {
            answer.validate_shape()?;
        }
        Ok(Self {
            id: ResponseId::new(),
            survey_id,
            org_id,
            respondent_name,
            respondent_id,
            answers,
            submitted_at,
            literacy_score: None,
            time_reduction_hours: None,
        })
    }

    /// Attaches the denormalized analytics fields.
    pub fn with_analytics(mut self, literacy_score: u8, time_reduction_hours: f64) -> Self {
        self.literacy_score = Some(literacy_score);
        self.time_reduction_hours = Some(time_reduction_hours);
        self
    }

    /// Returns the first rank-kind answer, if any.
    pub fn rank_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.kind == QuestionKind::Rank)
    }

    /// Returns the key respondents are grouped by: the explicit
    /// respondent id when present, the exact free-text name otherwise.
    pub fn respondent_key(&self) -> &str {
        match &self.respondent_id {
            Some(id) => id.as_str(),
            None => &self.respondent_name,
        }
    }
}
