//! Response repository port.
//!
//! Defines the contract for persisting submitted survey responses,
//! partitioned by organization. Implementations decide the physical
//! layout; callers only see tenant-scoped collection operations.

use async_trait::async_trait;

use crate::domain::foundation::{OrgId, ResponseId};
use crate::domain::survey::SurveyResponse;

use super::StorageError;

/// Repository port for survey response persistence.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Lists all responses stored for an organization.
    ///
    /// Order is not guaranteed; analytics re-sorts by submission time
    /// wherever order matters. A missing collection reads back empty.
    async fn list(&self, org_id: &OrgId) -> Result<Vec<SurveyResponse>, StorageError>;

    /// Appends a newly submitted response.
    ///
    /// # Errors
    ///
    /// - `Io`/`Serialization` on persistence failure
    async fn append(&self, response: &SurveyResponse) -> Result<(), StorageError>;

    /// Replaces a stored response with the same id.
    ///
    /// # Errors
    ///
    /// - `ResponseNotFound` if no stored response matches
    /// - `Io`/`Serialization` on persistence failure
    async fn update(&self, response: &SurveyResponse) -> Result<(), StorageError>;

    /// Deletes one response from an organization's collection.
    ///
    /// # Errors
    ///
    /// - `ResponseNotFound` if no stored response matches
    /// - `Io`/`Serialization` on persistence failure
    async fn delete(&self, id: &ResponseId, org_id: &OrgId) -> Result<(), StorageError>;
}
