//! Score Calculator - Per-response literacy dimension scoring.

use rand::Rng;

use crate::domain::foundation::{RankLevel, Score};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::SurveyResponse;

use super::LiteracyScores;

/// Width of the uniform jitter band around the base score.
const JITTER_SPAN: f64 = 10.0;

/// Derives a five-dimension literacy score vector from one response.
///
/// The rank self-assessment answer fixes a base score, and each
/// dimension is the base perturbed by independent uniform jitter in
/// [-5, 5), clamped to [0, 100]. The jitter is intentional: dimension
/// scores differ response to response even at the same rank, and
/// organization-level averaging smooths the noise. Callers that need
/// reproducible output inject their own random generator.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Calculates the score vector using the thread-local generator.
    pub fn calculate(
        response: &SurveyResponse,
        definition: Option<&RankDefinition>,
    ) -> LiteracyScores {
        Self::calculate_with(&mut rand::thread_rng(), response, definition)
    }

    /// Calculates the score vector drawing jitter from `rng`.
    ///
    /// A missing rank answer, or one whose value is not a single
    /// string, yields the zero vector. An unrecognized rank string
    /// contributes a zero base that is still jittered and clamped.
    /// The rank definition is reserved for future dimension weighting
    /// and currently unused.
    pub fn calculate_with<R: Rng + ?Sized>(
        rng: &mut R,
        response: &SurveyResponse,
        _definition: Option<&RankDefinition>,
    ) -> LiteracyScores {
        let value = match response.rank_answer().and_then(|a| a.value.as_single()) {
            Some(value) => value,
            None => return LiteracyScores::zero(),
        };
        let base = RankLevel::from_answer_value(value)
            .map(|level| level.base_score())
            .unwrap_or(0.0);

        LiteracyScores::new(
            Self::jittered(rng, base),
            Self::jittered(rng, base),
            Self::jittered(rng, base),
            Self::jittered(rng, base),
            Self::jittered(rng, base),
        )
    }

    fn jittered<R: Rng + ?Sized>(rng: &mut R, base: f64) -> Score {
        let jitter = rng.gen::<f64>() * JITTER_SPAN - JITTER_SPAN / 2.0;
        Score::new(base + jitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OrgId, QuestionId, SurveyId, Timestamp};
    use crate::domain::survey::{Answer, AnswerValue, QuestionKind};
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Generator whose next f64 sample is exactly 0.5, making the
    /// jitter exactly zero.
    fn zero_jitter() -> StepRng {
        StepRng::new(1 << 63, 0)
    }

    fn response_with_answers(answers: Vec<Answer>) -> SurveyResponse {
        SurveyResponse::new(
            SurveyId::new(),
            OrgId::new("acme").unwrap(),
            "Aiko Tanaka",
            None,
            answers,
            Timestamp::now(),
        )
        .unwrap()
    }

    fn rank_response(value: &str) -> SurveyResponse {
        let answer = Answer::try_new(
            QuestionId::new("q-rank").unwrap(),
            QuestionKind::Rank,
            value.into(),
        )
        .unwrap();
        response_with_answers(vec![answer])
    }

    #[test]
    fn missing_rank_answer_yields_zero_vector() {
        let text_only = response_with_answers(vec![Answer::try_new(
            QuestionId::new("q1").unwrap(),
            QuestionKind::Text,
            "ops".into(),
        )
        .unwrap()]);
        let scores = ScoreCalculator::calculate_with(&mut zero_jitter(), &text_only, None);
        assert_eq!(scores, LiteracyScores::zero());
    }

    #[test]
    fn array_valued_rank_answer_yields_zero_vector() {
        // Legacy stored data can carry shapes try_new would reject
        let mut response = response_with_answers(vec![]);
        response.answers.push(Answer {
            question_id: QuestionId::new("q-rank").unwrap(),
            kind: QuestionKind::Rank,
            value: AnswerValue::Many(vec!["rank3".to_string()]),
        });
        let scores = ScoreCalculator::calculate_with(&mut zero_jitter(), &response, None);
        assert_eq!(scores, LiteracyScores::zero());
    }

    #[test]
    fn zero_jitter_reproduces_base_score_table() {
        let table = [
            ("rank1", 20.0),
            ("rank2", 40.0),
            ("rank3", 60.0),
            ("rank4", 80.0),
            ("rank5", 100.0),
        ];
        for (value, base) in table {
            let scores =
                ScoreCalculator::calculate_with(&mut zero_jitter(), &rank_response(value), None);
            for score in scores.as_array() {
                assert_eq!(score.value(), base, "rank value {}", value);
            }
        }
    }

    #[test]
    fn unknown_rank_string_is_jittered_from_zero_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let scores = ScoreCalculator::calculate_with(&mut rng, &rank_response("rank9"), None);
        for score in scores.as_array() {
            assert!(score.value() >= 0.0);
            assert!(score.value() < 5.0);
        }
    }

    #[test]
    fn jitter_stays_within_band_around_base() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let scores = ScoreCalculator::calculate_with(&mut rng, &rank_response("rank3"), None);
            for score in scores.as_array() {
                assert!(score.value() >= 55.0);
                assert!(score.value() < 65.0);
            }
        }
    }

    #[test]
    fn top_rank_scores_clamp_at_hundred() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let scores = ScoreCalculator::calculate_with(&mut rng, &rank_response("rank5"), None);
            for score in scores.as_array() {
                assert!(score.value() >= 95.0);
                assert!(score.value() <= 100.0);
            }
        }
    }

    #[test]
    fn dimensions_are_jittered_independently() {
        let mut rng = StdRng::seed_from_u64(11);
        let first = ScoreCalculator::calculate_with(&mut rng, &rank_response("rank3"), None);
        let second = ScoreCalculator::calculate_with(&mut rng, &rank_response("rank3"), None);
        assert_ne!(first, second);
    }

    proptest! {
        #[test]
        fn every_dimension_lands_in_valid_range(seed in any::<u64>(), rank in 1u8..=5) {
            let mut rng = StdRng::seed_from_u64(seed);
            let response = rank_response(&format!("rank{}", rank));
            let scores = ScoreCalculator::calculate_with(&mut rng, &response, None);
            for score in scores.as_array() {
                prop_assert!((0.0..=100.0).contains(&score.value()));
            }
        }
    }
}
