//! Rank definition repository port.
//!
//! Stores at most one custom rank taxonomy per organization. Readers
//! fall back to the built-in default when nothing usable is stored,
//! so `get` returning `None` is an ordinary outcome.

use async_trait::async_trait;

use crate::domain::foundation::OrgId;
use crate::domain::ranking::RankDefinition;

use super::StorageError;

/// Repository port for custom rank taxonomies.
#[async_trait]
pub trait RankDefinitionRepository: Send + Sync {
    /// Returns the organization's stored definition, `None` when
    /// absent or unreadable.
    async fn get(&self, org_id: &OrgId) -> Result<Option<RankDefinition>, StorageError>;

    /// Stores the definition for its organization, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// - `Io`/`Serialization` on persistence failure
    async fn put(&self, definition: &RankDefinition) -> Result<(), StorageError>;
}
