//! Literacy rank level (rank1 to rank5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five literacy rank levels, lowest to highest.
///
/// Serialized as the wire strings `"rank1"` through `"rank5"` used by
/// stored surveys and rank definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankLevel {
    #[serde(rename = "rank1")]
    One,
    #[serde(rename = "rank2")]
    Two,
    #[serde(rename = "rank3")]
    Three,
    #[serde(rename = "rank4")]
    Four,
    #[serde(rename = "rank5")]
    Five,
}

/// Inclusive lower score bound for each rank above the first.
const RANK_THRESHOLDS: [(f64, RankLevel); 4] = [
    (80.0, RankLevel::Five),
    (60.0, RankLevel::Four),
    (40.0, RankLevel::Three),
    (20.0, RankLevel::Two),
];

impl RankLevel {
    /// All levels in ascending order.
    pub const ALL: [RankLevel; 5] = [
        RankLevel::One,
        RankLevel::Two,
        RankLevel::Three,
        RankLevel::Four,
        RankLevel::Five,
    ];

    /// Base literacy score granted by a self-assessment at this level.
    pub fn base_score(&self) -> f64 {
        match self {
            RankLevel::One => 20.0,
            RankLevel::Two => 40.0,
            RankLevel::Three => 60.0,
            RankLevel::Four => 80.0,
            RankLevel::Five => 100.0,
        }
    }

    /// Classifies an overall score into a rank level.
    ///
    /// Total over all inputs: anything below the lowest threshold,
    /// including NaN, lands on the first rank.
    pub fn from_score(score: f64) -> Self {
        for (threshold, level) in RANK_THRESHOLDS {
            if score >= threshold {
                return level;
            }
        }
        RankLevel::One
    }

    /// Parses a rank answer value, returning None for anything that is
    /// not one of the five known strings.
    pub fn from_answer_value(value: &str) -> Option<Self> {
        match value {
            "rank1" => Some(RankLevel::One),
            "rank2" => Some(RankLevel::Two),
            "rank3" => Some(RankLevel::Three),
            "rank4" => Some(RankLevel::Four),
            "rank5" => Some(RankLevel::Five),
            _ => None,
        }
    }

    /// Returns the wire string for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankLevel::One => "rank1",
            RankLevel::Two => "rank2",
            RankLevel::Three => "rank3",
            RankLevel::Four => "rank4",
            RankLevel::Five => "rank5",
        }
    }

    /// Returns the 1-based position of this level.
    pub fn ordinal(&self) -> u8 {
        match self {
            RankLevel::One => 1,
            RankLevel::Two => 2,
            RankLevel::Three => 3,
            RankLevel::Four => 4,
            RankLevel::Five => 5,
        }
    }
}

impl fmt::Display for RankLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_score_follows_assessment_table() {
        assert_eq!(RankLevel::One.base_score(), 20.0);
        assert_eq!(RankLevel::Two.base_score(), 40.0);
        assert_eq!(RankLevel::Three.base_score(), 60.0);
        assert_eq!(RankLevel::Four.base_score(), 80.0);
        assert_eq!(RankLevel::Five.base_score(), 100.0);
    }

    #[test]
    fn from_score_respects_inclusive_boundaries() {
        assert_eq!(RankLevel::from_score(80.0), RankLevel::Five);
        assert_eq!(RankLevel::from_score(79.0), RankLevel::Four);
        assert_eq!(RankLevel::from_score(60.0), RankLevel::Four);
        assert_eq!(RankLevel::from_score(59.0), RankLevel::Three);
        assert_eq!(RankLevel::from_score(40.0), RankLevel::Three);
        assert_eq!(RankLevel::from_score(39.0), RankLevel::Two);
        assert_eq!(RankLevel::from_score(20.0), RankLevel::Two);
        assert_eq!(RankLevel::from_score(19.0), RankLevel::One);
        assert_eq!(RankLevel::from_score(0.0), RankLevel::One);
    }

    #[test]
    fn from_score_is_total_over_odd_inputs() {
        assert_eq!(RankLevel::from_score(-15.0), RankLevel::One);
        assert_eq!(RankLevel::from_score(250.0), RankLevel::Five);
        assert_eq!(RankLevel::from_score(f64::NAN), RankLevel::One);
    }

    #[test]
    fn base_scores_map_back_through_classifier() {
        assert_eq!(RankLevel::from_score(RankLevel::One.base_score()), RankLevel::Two);
        assert_eq!(RankLevel::from_score(RankLevel::Two.base_score()), RankLevel::Three);
        assert_eq!(RankLevel::from_score(RankLevel::Three.base_score()), RankLevel::Four);
        assert_eq!(RankLevel::from_score(RankLevel::Four.base_score()), RankLevel::Five);
        assert_eq!(RankLevel::from_score(RankLevel::Five.base_score()), RankLevel::Five);
    }

    #[test]
    fn from_answer_value_parses_known_strings() {
        assert_eq!(RankLevel::from_answer_value("rank1"), Some(RankLevel::One));
        assert_eq!(RankLevel::from_answer_value("rank5"), Some(RankLevel::Five));
        assert_eq!(RankLevel::from_answer_value("rank6"), None);
        assert_eq!(RankLevel::from_answer_value(""), None);
        assert_eq!(RankLevel::from_answer_value("Rank1"), None);
    }

    #[test]
    fn ordinal_counts_from_one() {
        assert_eq!(RankLevel::One.ordinal(), 1);
        assert_eq!(RankLevel::Five.ordinal(), 5);
    }

    #[test]
    fn all_is_ascending() {
        for pair in RankLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&RankLevel::Three).unwrap(), "\"rank3\"");
        let level: RankLevel = serde_json::from_str("\"rank4\"").unwrap();
        assert_eq!(level, RankLevel::Four);
    }

    proptest! {
        #[test]
        fn from_score_is_monotonic(a in -50.0f64..150.0, b in -50.0f64..150.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RankLevel::from_score(lo) <= RankLevel::from_score(hi));
        }
    }
}
