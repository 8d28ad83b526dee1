//! Score Aggregator - Organization-level literacy averages.

use rand::Rng;

use crate::domain::foundation::{OrgId, Score};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::SurveyResponse;

use super::{LiteracyScores, ScoreCalculator};

/// Averages per-response score vectors across an organization.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Computes the organization average using the thread-local
    /// generator.
    pub fn org_average(
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
    ) -> LiteracyScores {
        Self::org_average_with(&mut rand::thread_rng(), org_id, responses, definition)
    }

    /// Computes the organization average drawing jitter from `rng`.
    ///
    /// Filters to the organization's responses and returns the zero
    /// vector when none remain. Otherwise each response is scored,
    /// dimensions are averaged componentwise, and every dimension is
    /// rounded to the nearest whole point.
    pub fn org_average_with<R: Rng + ?Sized>(
        rng: &mut R,
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
    ) -> LiteracyScores {
        let org_responses: Vec<&SurveyResponse> =
            responses.iter().filter(|r| &r.org_id == org_id).collect();
        if org_responses.is_empty() {
            return LiteracyScores::zero();
        }

        let mut sums = [0.0f64; 5];
        for response in &org_responses {
            let scores = ScoreCalculator::calculate_with(rng, response, definition);
            for (sum, score) in sums.iter_mut().zip(scores.as_array()) {
                *sum += score.value();
            }
        }

        let count = org_responses.len() as f64;
        LiteracyScores::from_array(sums.map(|sum| Score::new(sum / count).rounded()))
    }
}
