//! Trend Series Builder - Monthly literacy score series.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrgId, Timestamp};
use crate::domain::ranking::RankDefinition;
use crate::domain::survey::SurveyResponse;

use super::ScoreAggregator;

/// Number of calendar months a trend series spans, current month
/// included.
pub const TREND_WINDOW_MONTHS: u32 = 6;

/// One month of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Calendar month as `YYYY-MM`.
    pub month_key: String,
    pub score: u8,
}

/// Builds the six-month overall score series for an organization.
pub struct TrendBuilder;

impl TrendBuilder {
    /// Builds the monthly series using the thread-local generator.
    pub fn monthly_trend(
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
        now: Timestamp,
    ) -> Vec<TrendPoint> {
        Self::monthly_trend_with(&mut rand::thread_rng(), org_id, responses, definition, now)
    }

    /// Builds the monthly series drawing score jitter from `rng`.
    ///
    /// Emits exactly one point per calendar month for the window
    /// ending at `now`'s month, oldest first. A month's score is the
    /// aggregated overall score of the responses submitted in it, or
    /// zero when there are none.
    pub fn monthly_trend_with<R: Rng + ?Sized>(
        rng: &mut R,
        org_id: &OrgId,
        responses: &[SurveyResponse],
        definition: Option<&RankDefinition>,
        now: Timestamp,
    ) -> Vec<TrendPoint> {
        (0..TREND_WINDOW_MONTHS)
            .rev()
            .map(|offset| {
                let bucket = now.months_back(offset);
                let in_month: Vec<SurveyResponse> = responses
                    .iter()
                    .filter(|r| r.submitted_at.year_month() == bucket.year_month())
                    .cloned()
                    .collect();
                let score =
                    ScoreAggregator::org_average_with(rng, org_id, &in_month, definition).overall();
                TrendPoint {
                    month_key: bucket.month_key(),
                    score,
                }
            })
            .collect()
    }
}
