//! Ports layer - Interfaces between the domain and the outside world.
//!
//! # Repository Ports
//!
//! - `ResponseRepository` - Submitted response persistence
//! - `SurveyRepository` - Survey definition persistence
//! - `RankDefinitionRepository` - Custom rank taxonomy persistence
//!
//! All ports are tenant-scoped: every operation takes or implies an
//! organization id, and implementations keep organizations isolated.

mod error;
mod rank_definition_repository;
mod response_repository;
mod survey_repository;

pub use error::StorageError;
pub use rank_definition_repository::RankDefinitionRepository;
pub use response_repository::ResponseRepository;
pub use survey_repository::SurveyRepository;
