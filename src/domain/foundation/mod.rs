//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Literacy Pulse domain.

mod errors;
mod ids;
mod rank_level;
mod score;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{OrgId, QuestionId, RespondentId, ResponseId, SurveyId};
pub use rank_level::RankLevel;
pub use score::Score;
pub use timestamp::Timestamp;
