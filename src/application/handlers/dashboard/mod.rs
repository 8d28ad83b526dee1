//! Dashboard query handlers.
//!
//! Read-only handlers for aggregating and viewing analytics data.

mod get_dashboard_overview;
mod get_literacy_trend;
mod get_rank_changes;
mod get_time_savings;

pub use get_dashboard_overview::{
    DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery,
};
pub use get_literacy_trend::{
    GetLiteracyTrendHandler, GetLiteracyTrendQuery, GetLiteracyTrendResult,
};
pub use get_rank_changes::{GetRankChangesHandler, GetRankChangesQuery, RankChangesView};
pub use get_time_savings::{GetTimeSavingsHandler, GetTimeSavingsQuery, TimeSavingsView};
