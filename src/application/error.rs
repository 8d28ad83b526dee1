//! Application-level error type shared by all handlers.

use thiserror::Error;

use crate::domain::foundation::{SurveyId, ValidationError};
use crate::ports::StorageError;

/// Errors surfaced by application handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The submitted payload failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend failed or the requested record is missing.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The target survey exists but no longer accepts responses.
    #[error("survey {0} is not active")]
    SurveyInactive(SurveyId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ResponseId;

    #[test]
    fn display_includes_wrapped_validation_message() {
        let err = HandlerError::from(ValidationError::empty_field("respondent_name"));
        assert!(err.to_string().contains("respondent_name"));
    }

    #[test]
    fn display_includes_wrapped_storage_message() {
        let id = ResponseId::new();
        let err = HandlerError::from(StorageError::ResponseNotFound(id));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn display_names_inactive_survey() {
        let id = SurveyId::new();
        let err = HandlerError::SurveyInactive(id);
        assert!(err.to_string().contains("not active"));
    }
}
