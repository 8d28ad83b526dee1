//! SeedDemoDataHandler - Command handler for populating demo content.

use std::sync::Arc;

use tracing::debug;

use crate::application::demo::{demo_survey, generate_demo_responses, DEMO_SURVEY_TITLE};
use crate::application::HandlerError;
use crate::domain::foundation::OrgId;
use crate::domain::survey::Survey;
use crate::ports::{ResponseRepository, SurveyRepository};

/// Command to seed demo content into an organization.
#[derive(Debug, Clone)]
pub struct SeedDemoDataCommand {
    pub org_id: OrgId,
}

/// Result of seeding: the demo survey and how many responses were added.
#[derive(Debug, Clone)]
pub struct SeedDemoDataResult {
    pub survey: Survey,
    pub seeded: usize,
}

/// Handler for seeding demo data.
///
/// Creates the demo survey when missing and fills an empty response
/// store with three monthly submission rounds. Running it again against
/// a populated store adds nothing.
pub struct SeedDemoDataHandler {
    surveys: Arc<dyn SurveyRepository>,
    responses: Arc<dyn ResponseRepository>,
}

impl SeedDemoDataHandler {
    pub fn new(
        surveys: Arc<dyn SurveyRepository>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        Self { surveys, responses }
    }

    pub async fn handle(
        &self,
        cmd: SeedDemoDataCommand,
    ) -> Result<SeedDemoDataResult, HandlerError> {
        // 1. Reuse the demo survey when a previous run created it
        let existing = self.surveys.list(&cmd.org_id).await?;
        let survey = match existing.into_iter().find(|s| s.title == DEMO_SURVEY_TITLE) {
            Some(survey) => survey,
            None => {
                let survey = demo_survey(cmd.org_id.clone())?;
                self.surveys.save(&survey).await?;
                survey
            }
        };

        // 2. Seed only into an empty store so re-runs stay idempotent
        if !self.responses.list(&cmd.org_id).await?.is_empty() {
            return Ok(SeedDemoDataResult { survey, seeded: 0 });
        }

        let responses = generate_demo_responses(&survey, 2)?;
        for response in &responses {
            self.responses.append(response).await?;
        }

        debug!(
            org_id = %cmd.org_id,
            count = responses.len(),
            "Seeded demo data"
        );

        Ok(SeedDemoDataResult {
            survey,
            seeded: responses.len(),
        })
    }
}
