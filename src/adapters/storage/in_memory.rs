//! In-Memory Storage Adapter
//!
//! Keeps responses, surveys, and rank definitions in process memory,
//! partitioned by organization. Useful for testing and demo runs;
//! nothing survives a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{OrgId, ResponseId, SurveyId};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::{Survey, SurveyResponse};
use crate::ports::{RankDefinitionRepository, ResponseRepository, StorageError, SurveyRepository};

/// In-memory store backing all three repository ports
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    responses: Arc<RwLock<HashMap<OrgId, Vec<SurveyResponse>>>>,
    surveys: Arc<RwLock<HashMap<OrgId, Vec<Survey>>>>,
    definitions: Arc<RwLock<HashMap<OrgId, RankDefinition>>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            surveys: Arc::new(RwLock::new(HashMap::new())),
            definitions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.responses.write().await.clear();
        self.surveys.write().await.clear();
        self.definitions.write().await.clear();
    }

    /// Get the number of stored responses for an organization
    pub async fn response_count(&self, org_id: &OrgId) -> usize {
        self.responses.read().await.get(org_id).map_or(0, Vec::len)
    }

    /// Get the number of stored surveys for an organization
    pub async fn survey_count(&self, org_id: &OrgId) -> usize {
        self.surveys.read().await.get(org_id).map_or(0, Vec::len)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseRepository for InMemoryStore {
    async fn list(&self, org_id: &OrgId) -> Result<Vec<SurveyResponse>, StorageError> {
        let responses = self.responses.read().await;
        Ok(responses.get(org_id).cloned().unwrap_or_default())
    }

    async fn append(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let mut responses = self.responses.write().await;
        responses
            .entry(response.org_id.clone())
            .or_default()
            .push(response.clone());
        Ok(())
    }

    async fn update(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let mut responses = self.responses.write().await;
        let stored = responses
            .get_mut(&response.org_id)
            .and_then(|list| list.iter_mut().find(|r| r.id == response.id))
            .ok_or(StorageError::ResponseNotFound(response.id))?;
        *stored = response.clone();
        Ok(())
    }

    async fn delete(&self, id: &ResponseId, org_id: &OrgId) -> Result<(), StorageError> {
        let mut responses = self.responses.write().await;
        let list = responses
            .get_mut(org_id)
            .ok_or(StorageError::ResponseNotFound(*id))?;
        let before = list.len();
        list.retain(|r| &r.id != id);
        if list.len() == before {
            return Err(StorageError::ResponseNotFound(*id));
        }
        Ok(())
    }
}

#[async_trait]
impl SurveyRepository for InMemoryStore {
    async fn list(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError> {
        let surveys = self.surveys.read().await;
        Ok(surveys.get(org_id).cloned().unwrap_or_default())
    }

    async fn list_active(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError> {
        let surveys = self.surveys.read().await;
        Ok(surveys
            .get(org_id)
            .map(|list| list.iter().filter(|s| s.is_active).cloned().collect())
            .unwrap_or_default())
    }

    async fn save(&self, survey: &Survey) -> Result<(), StorageError> {
        let mut surveys = self.surveys.write().await;
        let list = surveys.entry(survey.org_id.clone()).or_default();
        match list.iter_mut().find(|s| s.id == survey.id) {
            Some(stored) => *stored = survey.clone(),
            None => list.push(survey.clone()),
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SurveyId,
        org_id: &OrgId,
    ) -> Result<Option<Survey>, StorageError> {
        let surveys = self.surveys.read().await;
        Ok(surveys
            .get(org_id)
            .and_then(|list| list.iter().find(|s| &s.id == id).cloned()))
    }

    async fn delete(&self, id: &SurveyId, org_id: &OrgId) -> Result<(), StorageError> {
        let mut surveys = self.surveys.write().await;
        let list = surveys
            .get_mut(org_id)
            .ok_or(StorageError::SurveyNotFound(*id))?;
        let before = list.len();
        list.retain(|s| &s.id != id);
        if list.len() == before {
            return Err(StorageError::SurveyNotFound(*id));
        }
        Ok(())
    }
}

#[async_trait]
impl RankDefinitionRepository for InMemoryStore {
    async fn get(&self, org_id: &OrgId) -> Result<Option<RankDefinition>, StorageError> {
        let definitions = self.definitions.read().await;
        Ok(definitions.get(org_id).cloned())
    }

    async fn put(&self, definition: &RankDefinition) -> Result<(), StorageError> {
        let mut definitions = self.definitions.write().await;
        definitions.insert(definition.org_id.clone(), definition.clone());
        Ok(())
    }
}
