//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod demo;
pub mod ranking;
pub mod response;

pub use dashboard::{
    DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery,
    GetLiteracyTrendHandler, GetLiteracyTrendQuery, GetLiteracyTrendResult, GetRankChangesHandler,
    GetRankChangesQuery, GetTimeSavingsHandler, GetTimeSavingsQuery, RankChangesView,
    TimeSavingsView,
};
pub use demo::{SeedDemoDataCommand, SeedDemoDataHandler, SeedDemoDataResult};
pub use ranking::{
    ResolveRankDefinitionHandler, ResolveRankDefinitionQuery, SaveRankDefinitionCommand,
    SaveRankDefinitionHandler,
};
pub use response::{
    DeleteResponseCommand, DeleteResponseHandler, SubmitResponseCommand, SubmitResponseHandler,
    SubmitResponseResult,
};
