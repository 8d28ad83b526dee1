//! Analytics snapshot binary.
//!
//! Loads configuration, builds the configured store, optionally seeds
//! demo data, and prints the organization's full analytics snapshot as
//! pretty JSON.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use literacy_pulse::adapters::storage::{InMemoryStore, JsonFileStore};
use literacy_pulse::application::{
    DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery,
    GetLiteracyTrendHandler, GetLiteracyTrendQuery, GetRankChangesHandler, GetRankChangesQuery,
    GetTimeSavingsHandler, GetTimeSavingsQuery, RankChangesView, ResolveRankDefinitionHandler,
    ResolveRankDefinitionQuery, SeedDemoDataCommand, SeedDemoDataHandler, TimeSavingsView,
};
use literacy_pulse::config::{AppConfig, StorageBackend, StorageConfig};
use literacy_pulse::domain::analytics::TrendPoint;
use literacy_pulse::domain::foundation::{OrgId, Timestamp};
use literacy_pulse::domain::ranking::RankDefinition;
use literacy_pulse::ports::{RankDefinitionRepository, ResponseRepository, SurveyRepository};

/// Everything the dashboard shows, computed in one pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsSnapshot {
    generated_at: Timestamp,
    overview: DashboardOverview,
    rank_definition: RankDefinition,
    rank_changes: RankChangesView,
    trend: Vec<TrendPoint>,
    time_savings: TimeSavingsView,
}

struct Stores {
    responses: Arc<dyn ResponseRepository>,
    surveys: Arc<dyn SurveyRepository>,
    definitions: Arc<dyn RankDefinitionRepository>,
}

fn build_stores(config: &StorageConfig) -> Stores {
    match config.backend {
        StorageBackend::Memory => {
            let store = Arc::new(InMemoryStore::new());
            Stores {
                responses: store.clone(),
                surveys: store.clone(),
                definitions: store,
            }
        }
        StorageBackend::File => {
            let store = Arc::new(JsonFileStore::new(&config.data_dir));
            Stores {
                responses: store.clone(),
                surveys: store.clone(),
                definitions: store,
            }
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // Logs go to stderr; stdout carries only the snapshot JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stores = build_stores(&config.storage);
    let org_id = OrgId::new(&config.snapshot.org_id)?;

    if config.snapshot.seed_demo {
        let seeder =
            SeedDemoDataHandler::new(stores.surveys.clone(), stores.responses.clone());
        let result = seeder
            .handle(SeedDemoDataCommand {
                org_id: org_id.clone(),
            })
            .await?;
        info!(
            org_id = %org_id,
            seeded = result.seeded,
            "Demo data ready"
        );
    }

    info!(org_id = %org_id, "Computing analytics snapshot");

    let overview = GetDashboardOverviewHandler::new(
        stores.responses.clone(),
        stores.surveys.clone(),
        stores.definitions.clone(),
    )
    .handle(GetDashboardOverviewQuery {
        org_id: org_id.clone(),
    })
    .await?;

    let rank_definition = ResolveRankDefinitionHandler::new(stores.definitions.clone())
        .handle(ResolveRankDefinitionQuery {
            org_id: org_id.clone(),
        })
        .await;

    let rank_changes =
        GetRankChangesHandler::new(stores.responses.clone(), stores.definitions.clone())
            .handle(GetRankChangesQuery {
                org_id: org_id.clone(),
            })
            .await?;

    let trend = GetLiteracyTrendHandler::new(stores.responses.clone(), stores.definitions.clone())
        .handle(GetLiteracyTrendQuery {
            org_id: org_id.clone(),
            now: None,
        })
        .await?;

    let time_savings =
        GetTimeSavingsHandler::new(stores.responses.clone(), stores.surveys.clone())
            .handle(GetTimeSavingsQuery { org_id })
            .await?;

    let snapshot = AnalyticsSnapshot {
        generated_at: Timestamp::now(),
        overview,
        rank_definition,
        rank_changes,
        trend,
        time_savings,
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
