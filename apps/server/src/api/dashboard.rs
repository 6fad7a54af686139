use std::sync::Arc;

use crate::{api::shared::parse_asset_filter, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use inventaris_core::dashboard::{DashboardSummary, FilterOptions};

async fn get_summary(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<DashboardSummary>> {
    let filter = parse_asset_filter(raw)?;
    let summary = state.dashboard_service.get_summary(&filter)?;
    Ok(Json(summary))
}

async fn get_filter_options(State(state): State<Arc<AppState>>) -> ApiResult<Json<FilterOptions>> {
    let options = state.dashboard_service.get_filter_options()?;
    Ok(Json(options))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/summary", get(get_summary))
        .route("/dashboard/filter-options", get(get_filter_options))
}
