//! JSON File Storage Adapter
//!
//! Stores responses, surveys, and rank definitions as JSON files on
//! disk, one directory per organization, for easy navigation and
//! debugging. Reads are lenient: a missing or unreadable file behaves
//! like an empty store so one corrupt blob never takes the dashboard
//! down.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{OrgId, ResponseId, SurveyId};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::{Survey, SurveyResponse};
use crate::ports::{RankDefinitionRepository, ResponseRepository, StorageError, SurveyRepository};

/// File-based store backing all three repository ports
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Create a new file store with a base directory
    ///
    /// # Arguments
    /// * `base_path` - The root directory for storing survey data
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the directory path for a specific organization
    fn org_dir(&self, org_id: &OrgId) -> PathBuf {
        self.base_path.join(org_id.as_str())
    }

    /// Get the responses file path for an organization
    fn responses_path(&self, org_id: &OrgId) -> PathBuf {
        self.org_dir(org_id).join("responses.json")
    }

    /// Get the surveys file path for an organization
    fn surveys_path(&self, org_id: &OrgId) -> PathBuf {
        self.org_dir(org_id).join("surveys.json")
    }

    /// Get the rank definition file path for an organization
    fn definition_path(&self, org_id: &OrgId) -> PathBuf {
        self.org_dir(org_id).join("rank_definition.json")
    }

    /// Ensure directory exists
    async fn ensure_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    /// Read and parse a JSON file, treating missing or unparseable
    /// content as absent
    async fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        file_path: &Path,
    ) -> Result<Option<T>, StorageError> {
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(file_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Skipping unparseable file {}: {}", file_path.display(), e);
                Ok(None)
            }
        }
    }

    /// Serialize and write a JSON file, creating the organization
    /// directory if needed
    async fn write_json<T: serde::Serialize>(
        &self,
        org_id: &OrgId,
        file_path: &Path,
        value: &T,
    ) -> Result<(), StorageError> {
        self.ensure_dir(&self.org_dir(org_id)).await?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(file_path, json)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn read_responses(&self, org_id: &OrgId) -> Result<Vec<SurveyResponse>, StorageError> {
        Ok(self
            .read_json(&self.responses_path(org_id))
            .await?
            .unwrap_or_default())
    }

    async fn write_responses(
        &self,
        org_id: &OrgId,
        responses: &[SurveyResponse],
    ) -> Result<(), StorageError> {
        self.write_json(org_id, &self.responses_path(org_id), &responses)
            .await
    }

    async fn read_surveys(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError> {
        Ok(self
            .read_json(&self.surveys_path(org_id))
            .await?
            .unwrap_or_default())
    }

    async fn write_surveys(&self, org_id: &OrgId, surveys: &[Survey]) -> Result<(), StorageError> {
        self.write_json(org_id, &self.surveys_path(org_id), &surveys)
            .await
    }
}

#[async_trait]
impl ResponseRepository for JsonFileStore {
    async fn list(&self, org_id: &OrgId) -> Result<Vec<SurveyResponse>, StorageError> {
        self.read_responses(org_id).await
    }

    async fn append(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let mut responses = self.read_responses(&response.org_id).await?;
        responses.push(response.clone());
        self.write_responses(&response.org_id, &responses).await
    }

    async fn update(&self, response: &SurveyResponse) -> Result<(), StorageError> {
        let mut responses = self.read_responses(&response.org_id).await?;
        let stored = responses
            .iter_mut()
            .find(|r| r.id == response.id)
            .ok_or(StorageError::ResponseNotFound(response.id))?;
        *stored = response.clone();
        self.write_responses(&response.org_id, &responses).await
    }

    async fn delete(&self, id: &ResponseId, org_id: &OrgId) -> Result<(), StorageError> {
        let mut responses = self.read_responses(org_id).await?;
        let before = responses.len();
        responses.retain(|r| &r.id != id);
        if responses.len() == before {
            return Err(StorageError::ResponseNotFound(*id));
        }
        self.write_responses(org_id, &responses).await
    }
}

#[async_trait]
impl SurveyRepository for JsonFileStore {
    async fn list(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError> {
        self.read_surveys(org_id).await
    }

    async fn list_active(&self, org_id: &OrgId) -> Result<Vec<Survey>, StorageError> {
        let surveys = self.read_surveys(org_id).await?;
        Ok(surveys.into_iter().filter(|s| s.is_active).collect())
    }

    async fn save(&self, survey: &Survey) -> Result<(), StorageError> {
        let mut surveys = self.read_surveys(&survey.org_id).await?;
        match surveys.iter_mut().find(|s| s.id == survey.id) {
            Some(stored) => *stored = survey.clone(),
            None => surveys.push(survey.clone()),
        }
        self.write_surveys(&survey.org_id, &surveys).await
    }

    async fn find_by_id(
        &self,
        id: &SurveyId,
        org_id: &OrgId,
    ) -> Result<Option<Survey>, StorageError> {
        let surveys = self.read_surveys(org_id).await?;
        Ok(surveys.into_iter().find(|s| &s.id == id))
    }

    async fn delete(&self, id: &SurveyId, org_id: &OrgId) -> Result<(), StorageError> {
        let mut surveys = self.read_surveys(org_id).await?;
        let before = surveys.len();
        surveys.retain(|s| &s.id != id);
        if surveys.len() == before {
            return Err(StorageError::SurveyNotFound(*id));
        }
        self.write_surveys(org_id, &surveys).await
    }
}

#[async_trait]
impl RankDefinitionRepository for JsonFileStore {
    async fn get(&self, org_id: &OrgId) -> Result<Option<RankDefinition>, StorageError> {
        self.read_json(&self.definition_path(org_id)).await
    }

    async fn put(&self, definition: &RankDefinition) -> Result<(), StorageError> {
        self.write_json(
            &definition.org_id,
            &self.definition_path(&definition.org_id),
            definition,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuestionId, Timestamp};
    use crate::domain::survey::{Answer, AnswerValue, Question, QuestionKind};
    use tempfile::TempDir;

    fn org(name: &str) -> OrgId {
        OrgId::new(name).unwrap()
    }

    fn test_survey(org_id: &OrgId) -> Survey {
        let question = Question::new(
            QuestionId::new("q-rank").unwrap(),
            QuestionKind::Rank,
            "Self assessment",
            vec![],
        );
        Survey::new(org_id.clone(), "AI Literacy Survey", vec![question]).unwrap()
    }

    fn test_response(org_id: &OrgId, survey_id: SurveyId, name: &str) -> SurveyResponse {
        let answer = Answer::try_new(
            QuestionId::new("q-rank").unwrap(),
            QuestionKind::Rank,
            AnswerValue::from("rank3"),
        )
        .unwrap();
        SurveyResponse::new(
            survey_id,
            org_id.clone(),
            name,
            None,
            vec![answer],
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_file_store_append_and_list_responses() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let survey = test_survey(&org_id);
        let response = test_response(&org_id, survey.id, "Aiko");

        store.append(&response).await.unwrap();

        let listed = ResponseRepository::list(&store, &org_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, response.id);
        assert_eq!(listed[0].respondent_name, "Aiko");
    }

    #[tokio::test]
    async fn test_file_store_list_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        let listed = ResponseRepository::list(&store, &org("org-a")).await.unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_file_store_survives_corrupt_responses_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");

        let dir = temp_dir.path().join("org-a");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("responses.json"), "{not json at all").unwrap();

        let listed = ResponseRepository::list(&store, &org_id).await.unwrap();
        assert!(listed.is_empty());

        // Appending over a corrupt file starts a fresh list
        let survey = test_survey(&org_id);
        store
            .append(&test_response(&org_id, survey.id, "Aiko"))
            .await
            .unwrap();
        let listed = ResponseRepository::list(&store, &org_id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_file_store_update_response() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let survey = test_survey(&org_id);
        let response = test_response(&org_id, survey.id, "Aiko");

        store.append(&response).await.unwrap();
        store
            .update(&response.clone().with_analytics(58, 15.0))
            .await
            .unwrap();

        let listed = ResponseRepository::list(&store, &org_id).await.unwrap();
        assert_eq!(listed[0].literacy_score, Some(58));
        assert_eq!(listed[0].time_reduction_hours, Some(15.0));
    }

    #[tokio::test]
    async fn test_file_store_update_nonexistent_response() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let survey = test_survey(&org_id);

        let result = store.update(&test_response(&org_id, survey.id, "Aiko")).await;

        assert!(matches!(result, Err(StorageError::ResponseNotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_delete_response() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let survey = test_survey(&org_id);
        let keep = test_response(&org_id, survey.id, "Aiko");
        let remove = test_response(&org_id, survey.id, "Ben");

        store.append(&keep).await.unwrap();
        store.append(&remove).await.unwrap();

        ResponseRepository::delete(&store, &remove.id, &org_id)
            .await
            .unwrap();

        let listed = ResponseRepository::list(&store, &org_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_file_store_orgs_get_separate_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_a = org("org-a");
        let org_b = org("org-b");
        let survey = test_survey(&org_a);

        store
            .append(&test_response(&org_a, survey.id, "Aiko"))
            .await
            .unwrap();
        store
            .append(&test_response(&org_b, survey.id, "Ben"))
            .await
            .unwrap();

        assert!(temp_dir.path().join("org-a/responses.json").exists());
        assert!(temp_dir.path().join("org-b/responses.json").exists());

        let listed_a = ResponseRepository::list(&store, &org_a).await.unwrap();
        assert_eq!(listed_a.len(), 1);
        assert_eq!(listed_a[0].respondent_name, "Aiko");
    }

    #[tokio::test]
    async fn test_file_store_save_and_find_survey() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let survey = test_survey(&org_id);

        store.save(&survey).await.unwrap();

        let found = store.find_by_id(&survey.id, &org_id).await.unwrap();
        assert_eq!(found.map(|s| s.id), Some(survey.id));

        let missing = store.find_by_id(&SurveyId::new(), &org_id).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_file_store_save_survey_upserts() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");
        let mut survey = test_survey(&org_id);

        store.save(&survey).await.unwrap();
        survey.is_active = false;
        store.save(&survey).await.unwrap();

        let listed = SurveyRepository::list(&store, &org_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].is_active);
        assert!(store.list_active(&org_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_store_delete_nonexistent_survey() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        let result = SurveyRepository::delete(&store, &SurveyId::new(), &org("org-a")).await;

        assert!(matches!(result, Err(StorageError::SurveyNotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_rank_definition_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");

        assert!(store.get(&org_id).await.unwrap().is_none());

        let definition = RankDefinition::default_for(org_id.clone());
        store.put(&definition).await.unwrap();

        assert!(temp_dir.path().join("org-a/rank_definition.json").exists());
        let loaded = store.get(&org_id).await.unwrap();
        assert_eq!(loaded, Some(definition));
    }

    #[tokio::test]
    async fn test_file_store_corrupt_definition_falls_back_to_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());
        let org_id = org("org-a");

        let dir = temp_dir.path().join("org-a");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("rank_definition.json"), "[1, 2").unwrap();

        assert!(store.get(&org_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_data_survives_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let org_id = org("org-a");
        let survey = test_survey(&org_id);
        let response = test_response(&org_id, survey.id, "Aiko");

        {
            let store = JsonFileStore::new(temp_dir.path());
            store.save(&survey).await.unwrap();
            store.append(&response).await.unwrap();
        }

        let reopened = JsonFileStore::new(temp_dir.path());
        let listed = ResponseRepository::list(&reopened, &org_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, response.id);
        assert!(reopened
            .find_by_id(&survey.id, &org_id)
            .await
            .unwrap()
            .is_some());
    }
}
