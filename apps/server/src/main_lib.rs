use std::sync::Arc;

use crate::config::Config;
use inventaris_core::{
    assets::{AssetRepositoryTrait, AssetService, AssetServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    depreciation::{DepreciationService, DepreciationServiceTrait},
    utils::{Clock, SystemClock},
};
use inventaris_storage_sheet::SheetAssetRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
    pub depreciation_service: Arc<dyn DepreciationServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub clock: Arc<dyn Clock>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repository = Arc::new(SheetAssetRepository::open(&config.sheet_path)?);
    tracing::info!("Inventory sheet in use: {}", repository.path().display());
    let asset_repository: Arc<dyn AssetRepositoryTrait> = repository;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.valuation_tz));

    let asset_service = Arc::new(AssetService::new(asset_repository.clone()));
    let depreciation_service = Arc::new(DepreciationService::new(
        asset_repository.clone(),
        clock.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(asset_repository));

    Ok(Arc::new(AppState {
        asset_service,
        depreciation_service,
        dashboard_service,
        clock,
    }))
}
