//! Answers: the values a respondent gave to individual questions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ValidationError};

use super::QuestionKind;

/// The value of one answer: a single string or a list of strings,
/// matching the `string | string[]` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Returns the value as a single string, None for lists.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(s) => Some(s),
            AnswerValue::Many(_) => None,
        }
    }

    /// Returns the value as a list, None for single strings.
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Single(_) => None,
            AnswerValue::Many(values) => Some(values),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Many(values)
    }
}

/// One answered question within a submitted response.
///
/// Carries its question's kind so analytics can interpret the value
/// without re-resolving the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub value: AnswerValue,
}

impl Answer {
    /// Creates an answer, returning error if the value shape does not
    /// match the question kind.
    pub fn try_new(
        question_id: QuestionId,
        kind: QuestionKind,
        value: AnswerValue,
    ) -> Result<Self, ValidationError> {
        let answer = Self {
            question_id,
            kind,
            value,
        };
        answer.validate_shape()?;
        Ok(answer)
    }

    /// Checks that the value shape agrees with the question kind:
    /// checkbox answers carry lists, every other kind a single string.
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        match (&self.value, self.kind.expects_many()) {
            (AnswerValue::Single(_), true) => Err(ValidationError::invalid_format(
                self.question_id.as_str(),
                "checkbox answers must be arrays",
            )),
            (AnswerValue::Many(_), false) => Err(ValidationError::invalid_format(
                self.question_id.as_str(),
                "non-checkbox answers must be single values",
            )),
            _ => Ok(()),
        }
    }
}
