//! Rank Transition Tracker - Per-respondent rank movement.

use std::cmp::Ordering;
use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrgId, RankLevel};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::SurveyResponse;

use super::ScoreCalculator;

/// Direction of a respondent's rank movement between their two most
/// recent submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankChangeKind {
    Up,
    Down,
    Maintain,
    New,
}

/// One respondent's latest rank and how it moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChangeInfo {
    pub name: String,
    pub previous_rank: Option<RankLevel>,
    pub current_rank: RankLevel,
    #[serde(rename = "changeType")]
    pub change: RankChangeKind,
    pub date: String,
    pub response: SurveyResponse,
}

/// Tallies of rank movements, first-time respondents excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChangeStats {
    pub rank_up: usize,
    pub maintain: usize,
    pub rank_down: usize,
}

/// Tracks per-respondent rank movement across submissions.
pub struct RankTransitionTracker;

impl RankTransitionTracker {
    /// Computes rank changes using the thread-local generator.
    pub fn changes(
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
    ) -> Vec<RankChangeInfo> {
        Self::changes_with(&mut rand::thread_rng(), org_id, responses, definition)
    }

    /// Computes rank changes drawing score jitter from `rng`.
    ///
    /// Responses are grouped per respondent (explicit id when present,
    /// exact name otherwise) and sorted by submission time. The latest
    /// response fixes the current rank; with at least two submissions
    /// the second-most-recent fixes the previous rank and the movement
    /// direction, otherwise the respondent is `New`. The result is
    /// sorted by latest submission, most recent first.
    pub fn changes_with<R: Rng + ?Sized>(
        rng: &mut R,
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
    ) -> Vec<RankChangeInfo> {
        let mut groups: HashMap<&str, Vec<&SurveyResponse>> = HashMap::new();
        for response in responses.iter().filter(|r| &r.org_id == org_id) {
            groups
                .entry(response.respondent_key())
                .or_default()
                .push(response);
        }

        let mut changes = Vec::with_capacity(groups.len());
        for (_, mut group) in groups {
            group.sort_by_key(|r| r.submitted_at);
            let latest = match group.last() {
                Some(latest) => *latest,
                None => continue,
            };
            let current_rank = Self::response_rank(rng, latest, definition);
            let (previous_rank, change) = if group.len() >= 2 {
                let previous_rank = Self::response_rank(rng, group[group.len() - 2], definition);
                let change = match current_rank.cmp(&previous_rank) {
                    Ordering::Greater => RankChangeKind::Up,
                    Ordering::Less => RankChangeKind::Down,
                    Ordering::Equal => RankChangeKind::Maintain,
                };
                (Some(previous_rank), change)
            } else {
                (None, RankChangeKind::New)
            };

            changes.push(RankChangeInfo {
                name: latest.respondent_name.clone(),
                previous_rank,
                current_rank,
                change,
                date: latest.submitted_at.format_date(),
                response: latest.clone(),
            });
        }

        changes.sort_by(|a, b| b.response.submitted_at.cmp(&a.response.submitted_at));
        changes
    }

    /// Tallies movements over computed changes, excluding `New`.
    pub fn stats(changes: &[RankChangeInfo]) -> RankChangeStats {
        let mut stats = RankChangeStats::default();
        for info in changes {
            match info.change {
                RankChangeKind::Up => stats.rank_up += 1,
                RankChangeKind::Down => stats.rank_down += 1,
                RankChangeKind::Maintain => stats.maintain += 1,
                RankChangeKind::New => {}
            }
        }
        stats
    }

    fn response_rank<R: Rng + ?Sized>(
        rng: &mut R,
        response: &SurveyResponse,
        definition: Option<&RankDefinition>,
    ) -> RankLevel {
        let overall = ScoreCalculator::calculate_with(rng, response, definition).overall();
        RankLevel::from_score(f64::from(overall))
    }
}
