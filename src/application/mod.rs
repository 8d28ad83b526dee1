//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod demo;
mod error;
pub mod handlers;

pub use error::HandlerError;

pub use handlers::{
    // Response handlers
    DeleteResponseCommand, DeleteResponseHandler,
    SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult,
    // Dashboard handlers
    DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery,
    GetLiteracyTrendHandler, GetLiteracyTrendQuery, GetLiteracyTrendResult,
    GetRankChangesHandler, GetRankChangesQuery, RankChangesView,
    GetTimeSavingsHandler, GetTimeSavingsQuery, TimeSavingsView,
    // Ranking handlers
    ResolveRankDefinitionHandler, ResolveRankDefinitionQuery,
    SaveRankDefinitionCommand, SaveRankDefinitionHandler,
    // Demo seeding
    SeedDemoDataCommand, SeedDemoDataHandler, SeedDemoDataResult,
};
