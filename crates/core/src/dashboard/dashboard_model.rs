//! Dashboard aggregate models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of asset rows held by one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipShare {
    pub ownership: String,
    pub asset_count: usize,
    /// Percentage of rows with a recorded owner, rounded to 2 places
    pub percentage: Decimal,
}

/// Acquisitions grouped by purchase year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionYear {
    pub year: i32,
    pub quantity: Decimal,
    pub acquisition_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub asset_count: usize,
    pub total_quantity: Decimal,
    pub total_acquisition_cost: Decimal,
    pub formatted_total_acquisition_cost: String,
    pub ownership_distribution: Vec<OwnershipShare>,
    pub acquisition_timeline: Vec<AcquisitionYear>,
}

/// Values offered by the browse filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub placements: Vec<String>,
    pub sources: Vec<String>,
    pub asset_groups: Vec<String>,
    pub ownerships: Vec<String>,
    /// Month names present in the sheet, in calendar order
    pub purchase_months: Vec<String>,
    pub min_purchase_year: Option<i32>,
    pub max_purchase_year: Option<i32>,
    pub min_acquisition_cost: Option<Decimal>,
    pub max_acquisition_cost: Option<Decimal>,
}
