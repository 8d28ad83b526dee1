//! Survey definitions: the questions presented to respondents.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrgId, QuestionId, SurveyId, Timestamp, ValidationError};

/// The input widget a question renders as.
///
/// The kind fixes the shape of the answer value: `Checkbox` collects a
/// list, every other kind collects a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Textarea,
    Radio,
    Checkbox,
    Rank,
}

impl QuestionKind {
    /// Returns true if answers to this kind carry a list of values.
    pub fn expects_many(&self) -> bool {
        matches!(self, QuestionKind::Checkbox)
    }
}

/// Semantic role of a question within analytics.
///
/// Newer surveys tag the questions the engine derives metrics from;
/// untagged legacy surveys fall back to title matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTag {
    SelfAssessment,
    TimeReduction,
}

/// A selectable choice on a radio, checkbox or rank question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A single question within a survey. Immutable once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub title: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<QuestionTag>,
}

impl Question {
    /// Creates a question without a semantic tag.
    pub fn new(
        id: QuestionId,
        kind: QuestionKind,
        title: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            options,
            tag: None,
        }
    }

    /// Attaches a semantic tag.
    pub fn with_tag(mut self, tag: QuestionTag) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// A survey published to an organization's respondents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: SurveyId,
    pub org_id: OrgId,
    pub title: String,
    pub is_active: bool,
    pub questions: Vec<Question>,
    pub created_at: Timestamp,
}

impl Survey {
    /// Creates a new active survey, returning error if the title is empty.
    pub fn new(
        org_id: OrgId,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: SurveyId::new(),
            org_id,
            title,
            is_active: true,
            questions,
            created_at: Timestamp::now(),
        })
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }
}
