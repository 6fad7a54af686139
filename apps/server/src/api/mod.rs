use std::sync::Arc;

use crate::{config::Config, main_lib::AppState};
use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod assets;
mod dashboard;
mod depreciation;
mod shared;

pub async fn healthz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(assets::router())
        .merge(depreciation::router())
        .merge(dashboard::router());

    Ok(Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
