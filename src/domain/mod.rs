//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `survey` - Surveys, questions, answers and submitted responses
//! - `ranking` - Rank taxonomies and their default content
//! - `analytics` - Pure domain services for literacy analytics (scores, ranks, time savings, trends)

pub mod analytics;
pub mod foundation;
pub mod ranking;
pub mod survey;
