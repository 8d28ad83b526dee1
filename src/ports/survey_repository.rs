//! Survey repository port.
//!
//! Defines the contract for persisting survey definitions per
//! organization. Analytics reads active surveys only, to resolve
//! question semantics.

use async_trait::async_trait;

use crate::domain::foundation::{OrgId, SurveyId};
use crate::domain::survey::Survey;

use super::StorageError;

/// Repository port for survey persistence.
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Lists every survey stored for an organization.
    async fn list(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError>;

    /// Lists only the organization's active surveys.
    async fn list_active(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError>;

    /// Saves a survey, replacing any stored survey with the same id.
    ///
    /// # Errors
    ///
    /// - `Io`/`Serialization` on persistence failure
    async fn save(&self, survey: &Survey) -> Result<(), StorageError>;

    /// Finds a survey by id within an organization.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SurveyId, org_id: &OrgId)
        -> Result<Option<Survey>, StorageError>;

    /// Deletes a survey from an organization's collection.
    ///
    /// # Errors
    ///
    /// - `SurveyNotFound` if no stored survey matches
    /// - `Io`/`Serialization` on persistence failure
    async fn delete(&self, id: &SurveyId, org_id: &OrgId) -> Result<(), StorageError>;
}
