//! Ranking module - Rank taxonomies and their default content.

mod definition;

pub use definition::{RankDefinition, RankItem};
