//! Analytics module - Pure domain services turning survey responses
//! into literacy metrics.
//!
//! Every service here is synchronous and side-effect free over
//! immutable slices; the only nondeterminism is the documented score
//! jitter, always injectable through the `_with` entry points.

mod aggregation;
mod rank_transitions;
mod score_calculator;
mod scores;
mod time_savings;
mod trend;

pub use aggregation::ScoreAggregator;
pub use rank_transitions::{RankChangeInfo, RankChangeKind, RankChangeStats, RankTransitionTracker};
pub use score_calculator::ScoreCalculator;
pub use scores::LiteracyScores;
pub use time_savings::{
    DistributionSlice, TimeReductionBand, TimeSavingsAnalyzer, TimeSavingsDistribution,
    TimeSavingsSummary, TIME_REDUCTION_MARKER,
};
pub use trend::{TrendBuilder, TrendPoint, TREND_WINDOW_MONTHS};
