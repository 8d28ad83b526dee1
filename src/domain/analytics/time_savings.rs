//! Time-Savings Aggregator - Weekly hours saved through AI usage.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;
use crate::domain::survey::{QuestionTag, Survey, SurveyResponse};

/// Title marker identifying the weekly time reduction question on
/// legacy surveys that carry no semantic tags.
pub const TIME_REDUCTION_MARKER: &str = "weekly time reduction";

/// Assumed full working week, the denominator of the reduction rate.
const ASSUMED_WEEKLY_HOURS: f64 = 40.0;

/// Categorical answer to the weekly time reduction question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeReductionBand {
    #[serde(rename = "less_than_5")]
    LessThan5,
    #[serde(rename = "5_to_10")]
    FiveToTen,
    #[serde(rename = "10_to_20")]
    TenToTwenty,
    #[serde(rename = "more_than_20")]
    MoreThan20,
    #[serde(rename = "no_effect")]
    NoEffect,
}

impl TimeReductionBand {
    /// All bands in presentation order.
    pub const ALL: [TimeReductionBand; 5] = [
        TimeReductionBand::LessThan5,
        TimeReductionBand::FiveToTen,
        TimeReductionBand::TenToTwenty,
        TimeReductionBand::MoreThan20,
        TimeReductionBand::NoEffect,
    ];

    /// Parses a stored answer value, None for anything unrecognized.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "less_than_5" => Some(TimeReductionBand::LessThan5),
            "5_to_10" => Some(TimeReductionBand::FiveToTen),
            "10_to_20" => Some(TimeReductionBand::TenToTwenty),
            "more_than_20" => Some(TimeReductionBand::MoreThan20),
            "no_effect" => Some(TimeReductionBand::NoEffect),
            _ => None,
        }
    }

    /// Representative weekly hours for this band.
    pub fn hours(&self) -> f64 {
        match self {
            TimeReductionBand::LessThan5 => 2.5,
            TimeReductionBand::FiveToTen => 7.5,
            TimeReductionBand::TenToTwenty => 15.0,
            TimeReductionBand::MoreThan20 => 25.0,
            TimeReductionBand::NoEffect => 0.0,
        }
    }

    /// Display label for distribution views.
    pub fn label(&self) -> &'static str {
        match self {
            TimeReductionBand::LessThan5 => "Under 5 hours",
            TimeReductionBand::FiveToTen => "5 to 10 hours",
            TimeReductionBand::TenToTwenty => "10 to 20 hours",
            TimeReductionBand::MoreThan20 => "Over 20 hours",
            TimeReductionBand::NoEffect => "No effect",
        }
    }

    /// Returns the wire string for this band.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeReductionBand::LessThan5 => "less_than_5",
            TimeReductionBand::FiveToTen => "5_to_10",
            TimeReductionBand::TenToTwenty => "10_to_20",
            TimeReductionBand::MoreThan20 => "more_than_20",
            TimeReductionBand::NoEffect => "no_effect",
        }
    }
}

/// Aggregate weekly time savings over a set of responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSavingsSummary {
    pub total_hours: f64,
    pub average_hours: f64,
    pub max_hours: f64,
    /// Total hours as a share of the assumed working week across all
    /// respondents, in percent with one decimal place.
    pub reduction_rate: f64,
}

/// Per-band respondent counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSavingsDistribution {
    counts: Vec<(TimeReductionBand, usize)>,
}

impl TimeSavingsDistribution {
    /// All bands with their counts, in presentation order.
    pub fn counts(&self) -> &[(TimeReductionBand, usize)] {
        &self.counts
    }

    /// The count for one band.
    pub fn count_of(&self, band: TimeReductionBand) -> usize {
        self.counts
            .iter()
            .find(|(b, _)| *b == band)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Presentation slices, zero-count bands omitted.
    pub fn slices(&self) -> Vec<DistributionSlice> {
        self.counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(band, count)| DistributionSlice {
                label: band.label().to_string(),
                value: *count,
            })
            .collect()
    }
}

/// One non-empty bucket of the distribution view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub label: String,
    pub value: usize,
}

/// Aggregates self-reported weekly time savings.
pub struct TimeSavingsAnalyzer;

impl TimeSavingsAnalyzer {
    /// Summarizes hours saved over the given responses.
    ///
    /// The time reduction question is resolved through the surveys:
    /// tagged questions win, the legacy title marker is the fallback.
    /// Responses without a recognizable answer contribute zero hours.
    pub fn summarize(responses: &[SurveyResponse], surveys: &[Survey]) -> TimeSavingsSummary {
        if responses.is_empty() {
            return TimeSavingsSummary::default();
        }

        let question_ids = Self::time_reduction_question_ids(surveys);
        let hours: Vec<f64> = responses
            .iter()
            .map(|response| Self::hours_with_ids(response, &question_ids))
            .collect();

        let total: f64 = hours.iter().sum();
        let count = responses.len() as f64;
        let max = hours.iter().fold(0.0f64, |acc, h| acc.max(*h));

        TimeSavingsSummary {
            total_hours: total,
            average_hours: total / count,
            max_hours: max,
            reduction_rate: round_to_one_decimal(total / (count * ASSUMED_WEEKLY_HOURS) * 100.0),
        }
    }

    /// Counts responses per band. Responses without a recognizable
    /// answer fall into no band.
    pub fn distribution(
        responses: &[SurveyResponse],
        surveys: &[Survey],
    ) -> TimeSavingsDistribution {
        let question_ids = Self::time_reduction_question_ids(surveys);
        let mut counts: Vec<(TimeReductionBand, usize)> =
            TimeReductionBand::ALL.iter().map(|b| (*b, 0)).collect();

        for response in responses {
            if let Some(band) = Self::band_with_ids(response, &question_ids) {
                if let Some(entry) = counts.iter_mut().find(|(b, _)| *b == band) {
                    entry.1 += 1;
                }
            }
        }

        TimeSavingsDistribution { counts }
    }

    /// The representative hours for a single response, zero when the
    /// question or a recognizable answer is missing.
    pub fn response_hours(response: &SurveyResponse, surveys: &[Survey]) -> f64 {
        let question_ids = Self::time_reduction_question_ids(surveys);
        Self::hours_with_ids(response, &question_ids)
    }

    fn time_reduction_question_ids(surveys: &[Survey]) -> Vec<&QuestionId> {
        let tagged: Vec<&QuestionId> = surveys
            .iter()
            .flat_map(|s| s.questions.iter())
            .filter(|q| q.tag == Some(QuestionTag::TimeReduction))
            .map(|q| &q.id)
            .collect();
        if !tagged.is_empty() {
            return tagged;
        }
        surveys
            .iter()
            .flat_map(|s| s.questions.iter())
            .filter(|q| q.title.contains(TIME_REDUCTION_MARKER))
            .map(|q| &q.id)
            .collect()
    }

    fn band_with_ids(
        response: &SurveyResponse,
        question_ids: &[&QuestionId],
    ) -> Option<TimeReductionBand> {
        response
            .answers
            .iter()
            .find(|a| question_ids.contains(&&a.question_id))
            .and_then(|a| a.value.as_single())
            .and_then(TimeReductionBand::from_value)
    }

    fn hours_with_ids(response: &SurveyResponse, question_ids: &[&QuestionId]) -> f64 {
        Self::band_with_ids(response, question_ids)
            .map(|band| band.hours())
            .unwrap_or(0.0)
    }
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
