//! Rank definitions: the five-level taxonomy shown to an organization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrgId, RankLevel, ValidationError};

/// One level of the taxonomy with its display name and the behaviors
/// that characterize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankItem {
    pub id: RankLevel,
    pub name: String,
    pub descriptions: Vec<String>,
}

impl RankItem {
    pub fn new(id: RankLevel, name: impl Into<String>, descriptions: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            descriptions,
        }
    }
}

/// An organization's rank taxonomy: exactly the five levels, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDefinition {
    pub org_id: OrgId,
    pub ranks: Vec<RankItem>,
}

static DEFAULT_RANKS: Lazy<Vec<RankItem>> = Lazy::new(|| {
    vec![
        rank_item(
            RankLevel::One,
            "Beginner",
            &[
                "Has heard of generative AI but rarely uses it",
                "Needs help formulating prompts",
                "Uses AI only when instructed to",
                "Unsure which tasks AI can help with",
                "Relies on colleagues for AI-related work",
            ],
        ),
        rank_item(
            RankLevel::Two,
            "Basic",
            &[
                "Uses AI tools for simple everyday tasks",
                "Writes short prompts without guidance",
                "Understands common AI terminology",
                "Checks AI output before using it",
                "Knows the basic limits of AI answers",
            ],
        ),
        rank_item(
            RankLevel::Three,
            "Practice",
            &[
                "Applies AI to routine work unprompted",
                "Iterates on prompts to improve results",
                "Combines multiple AI tools when useful",
                "Shares effective prompts with the team",
                "Judges when AI is the wrong tool",
            ],
        ),
        rank_item(
            RankLevel::Four,
            "Advanced",
            &[
                "Builds multi-step workflows around AI",
                "Adapts prompting techniques to new domains",
                "Reviews and improves colleagues' AI usage",
                "Quantifies the time AI saves in their work",
                "Anticipates failure modes and works around them",
            ],
        ),
        rank_item(
            RankLevel::Five,
            "Expert",
            &[
                "Designs AI-assisted processes for the organization",
                "Mentors others on effective AI adoption",
                "Evaluates new AI tools for business fit",
                "Sets guidelines for safe and responsible use",
                "Drives measurable productivity gains with AI",
            ],
        ),
    ]
});

fn rank_item(id: RankLevel, name: &str, descriptions: &[&str]) -> RankItem {
    RankItem::new(
        id,
        name,
        descriptions.iter().map(|d| d.to_string()).collect(),
    )
}

impl RankDefinition {
    /// Creates a validated definition.
    pub fn try_new(org_id: OrgId, ranks: Vec<RankItem>) -> Result<Self, ValidationError> {
        let definition = Self { org_id, ranks };
        definition.validate()?;
        Ok(definition)
    }

    /// The built-in taxonomy used when an organization has not saved
    /// its own.
    pub fn default_for(org_id: OrgId) -> Self {
        Self {
            org_id,
            ranks: DEFAULT_RANKS.clone(),
        }
    }

    /// Checks the taxonomy invariant: each of the five levels exactly
    /// once, ascending, every name non-empty.
    ///
    /// Deserialized definitions bypass `try_new`, so readers that must
    /// not trust stored data re-check through this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ranks.len() != RankLevel::ALL.len() {
            return Err(ValidationError::out_of_range(
                "ranks",
                5.0,
                5.0,
                self.ranks.len() as f64,
            ));
        }
        for (item, expected) in self.ranks.iter().zip(RankLevel::ALL) {
            if item.id != expected {
                return Err(ValidationError::invalid_format(
                    "ranks",
                    "levels must appear once each in ascending order",
                ));
            }
            if item.name.is_empty() {
                return Err(ValidationError::empty_field("ranks.name"));
            }
        }
        Ok(())
    }

    /// Looks up the item for a level.
    pub fn item(&self, level: RankLevel) -> Option<&RankItem> {
        self.ranks.iter().find(|r| r.id == level)
    }

    /// Returns the display name for a level, falling back to the wire
    /// string when the item is missing.
    pub fn display_name(&self, level: RankLevel) -> &str {
        self.item(level)
            .map(|item| item.name.as_str())
            .unwrap_or_else(|| level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> OrgId {
        OrgId::new("acme").unwrap()
    }

    #[test]
    fn default_taxonomy_has_five_ordered_levels() {
        let definition = RankDefinition::default_for(org());
        assert_eq!(definition.ranks.len(), 5);
        for (item, expected) in definition.ranks.iter().zip(RankLevel::ALL) {
            assert_eq!(item.id, expected);
            assert_eq!(item.descriptions.len(), 5);
        }
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn default_taxonomy_names_run_beginner_to_expert() {
        let definition = RankDefinition::default_for(org());
        let names: Vec<&str> = definition.ranks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Beginner", "Basic", "Practice", "Advanced", "Expert"]);
    }

    #[test]
    fn try_new_rejects_wrong_count() {
        let mut ranks = DEFAULT_RANKS.clone();
        ranks.pop();
        let result = RankDefinition::try_new(org(), ranks);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn try_new_rejects_out_of_order_levels() {
        let mut ranks = DEFAULT_RANKS.clone();
        ranks.swap(0, 1);
        let result = RankDefinition::try_new(org(), ranks);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn try_new_rejects_duplicate_levels() {
        let mut ranks = DEFAULT_RANKS.clone();
        ranks[4] = ranks[3].clone();
        assert!(RankDefinition::try_new(org(), ranks).is_err());
    }

    #[test]
    fn try_new_rejects_empty_name() {
        let mut ranks = DEFAULT_RANKS.clone();
        ranks[2].name = String::new();
        let result = RankDefinition::try_new(org(), ranks);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn item_and_display_name_resolve_levels() {
        let definition = RankDefinition::default_for(org());
        assert_eq!(definition.item(RankLevel::Three).unwrap().name, "Practice");
        assert_eq!(definition.display_name(RankLevel::Five), "Expert");
    }

    #[test]
    fn display_name_falls_back_to_wire_string() {
        // Hand-built value dodging try_new, as a deserialized one could
        let definition = RankDefinition {
            org_id: org(),
            ranks: vec![],
        };
        assert_eq!(definition.display_name(RankLevel::Two), "rank2");
    }

    #[test]
    fn definition_serializes_with_wire_level_ids() {
        let definition = RankDefinition::default_for(org());
        let json = serde_json::to_string(&definition).unwrap();
        assert!(json.contains("\"id\":\"rank1\""));
        assert!(json.contains("\"orgId\":\"acme\""));
    }
}
