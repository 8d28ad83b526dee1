//! Rank definition handlers.
//!
//! Resolution and persistence of the per-organization rank taxonomy.

mod resolve_rank_definition;
mod save_rank_definition;

pub use resolve_rank_definition::{ResolveRankDefinitionHandler, ResolveRankDefinitionQuery};
pub use save_rank_definition::{SaveRankDefinitionCommand, SaveRankDefinitionHandler};
