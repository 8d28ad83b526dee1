//! Shared error type for storage ports.

use thiserror::Error;

use crate::domain::foundation::{ResponseId, SurveyId};

/// Errors surfaced by storage port implementations.
///
/// Lenient reads never produce these: a missing or unparseable stored
/// collection reads back empty. They mark real persistence failures
/// and targeted mutations of absent records.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Response {0} not found")]
    ResponseNotFound(ResponseId),

    #[error("Survey {0} not found")]
    SurveyNotFound(SurveyId),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}
