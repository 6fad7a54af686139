use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use inventaris_core::utils::DEFAULT_VALUATION_TZ;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub sheet_path: PathBuf,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Zone whose calendar decides "today" for depreciation.
    pub valuation_tz: Tz,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("INV_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid INV_LISTEN_ADDR")?;
        let sheet_path = std::env::var("INV_SHEET_PATH")
            .unwrap_or_else(|_| "./data/inventory.csv".into())
            .into();
        let cors_allow = std::env::var("INV_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("INV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let valuation_tz = match std::env::var("INV_VALUATION_TZ") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid INV_VALUATION_TZ '{}': {}", name, e))?,
            Err(_) => DEFAULT_VALUATION_TZ,
        };
        let log_format = std::env::var("INV_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
        Ok(Self {
            listen_addr,
            sheet_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            valuation_tz,
            log_format,
        })
    }

    /// Defaults for everything except the sheet location.
    pub fn with_sheet_path(sheet_path: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            sheet_path: sheet_path.into(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            valuation_tz: DEFAULT_VALUATION_TZ,
            log_format: "json".to_string(),
        }
    }
}
