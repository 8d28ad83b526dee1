//! ResolveRankDefinitionHandler - Query handler for the effective rank taxonomy.
//!
//! Resolution never fails: a missing, invalid, or unreadable stored
//! definition falls back to the built-in default so rank names can
//! always be displayed.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::OrgId;
use crate::domain::ranking::RankDefinition;
use crate::ports::RankDefinitionRepository;

/// Query for an organization's effective rank definition.
#[derive(Debug, Clone)]
pub struct ResolveRankDefinitionQuery {
    pub org_id: OrgId,
}

/// Handler for resolving the effective rank definition.
pub struct ResolveRankDefinitionHandler {
    definitions: Arc<dyn RankDefinitionRepository>,
}

impl ResolveRankDefinitionHandler {
    pub fn new(definitions: Arc<dyn RankDefinitionRepository>) -> Self {
        Self { definitions }
    }

    pub async fn handle(&self, query: ResolveRankDefinitionQuery) -> RankDefinition {
        match self.definitions.get(&query.org_id).await {
            Ok(Some(definition)) => match definition.validate() {
                Ok(()) => definition,
                Err(e) => {
                    warn!(
                        org_id = %query.org_id,
                        "Stored rank definition is invalid, using default: {}", e
                    );
                    RankDefinition::default_for(query.org_id)
                }
            },
            Ok(None) => RankDefinition::default_for(query.org_id),
            Err(e) => {
                warn!(
                    org_id = %query.org_id,
                    "Failed to read rank definition, using default: {}", e
                );
                RankDefinition::default_for(query.org_id)
            }
        }
    }
}
