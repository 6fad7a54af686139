use std::sync::Arc;

use crate::{api::shared::parse_asset_filter, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use inventaris_core::assets::{AssetRecord, AssetUpdate, NewAsset};

/// Asset numbers contain `/`, so single-asset routes take them as a query value.
#[derive(serde::Deserialize)]
struct AssetItemQuery {
    number: String,
}

async fn list_assets(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<Json<Vec<AssetRecord>>> {
    let filter = parse_asset_filter(raw)?;
    let assets = state.asset_service.get_assets(&filter)?;
    Ok(Json(assets))
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<AssetRecord>)> {
    let created = state.asset_service.create_asset(payload).await?;
    tracing::info!("Registered asset {}", created.asset_number);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_asset(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AssetItemQuery>,
) -> ApiResult<Json<AssetRecord>> {
    let asset = state.asset_service.get_asset(&q.number)?;
    Ok(Json(asset))
}

async fn update_asset(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AssetItemQuery>,
    Json(payload): Json<AssetUpdate>,
) -> ApiResult<Json<AssetRecord>> {
    let updated = state.asset_service.update_asset(&q.number, payload).await?;
    Ok(Json(updated))
}

async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Query(q): Query<AssetItemQuery>,
) -> ApiResult<StatusCode> {
    state.asset_service.delete_asset(&q.number).await?;
    tracing::info!("Deleted asset {}", q.number);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route(
            "/assets/item",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
}
