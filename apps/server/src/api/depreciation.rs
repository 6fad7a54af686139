use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use inventaris_core::depreciation::{evaluate, AssetDepreciation, DepreciationResult};
use rust_decimal::Decimal;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetDepreciationQuery {
    number: String,
    as_of: Option<NaiveDate>,
}

async fn get_asset_depreciation(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AssetDepreciationQuery>,
) -> ApiResult<Json<AssetDepreciation>> {
    let view = state
        .depreciation_service
        .evaluate_asset(&q.number, q.as_of)?;
    Ok(Json(view))
}

/// Ad-hoc evaluation for values that are not (yet) in the sheet.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateRequest {
    acquisition_cost: Decimal,
    monthly_depreciation: Decimal,
    purchase_year: i32,
    purchase_month: String,
    as_of: Option<NaiveDate>,
}

async fn evaluate_depreciation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EvaluateRequest>,
) -> ApiResult<Json<DepreciationResult>> {
    let as_of = body.as_of.unwrap_or_else(|| state.clock.today());
    let result = evaluate(
        body.acquisition_cost,
        body.monthly_depreciation,
        body.purchase_year,
        &body.purchase_month,
        as_of,
    )?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets/depreciation", get(get_asset_depreciation))
        .route("/depreciation/evaluate", post(evaluate_depreciation))
}
