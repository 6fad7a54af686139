//! Inventory asset domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_ECONOMIC_LIFE_YEARS, MAX_ECONOMIC_LIFE_YEARS, MAX_PURCHASE_YEAR,
    MIN_ECONOMIC_LIFE_YEARS, MIN_PURCHASE_YEAR,
};
use crate::depreciation::PurchaseMonth;
use crate::errors::{Error, Result, ValidationError};

/// Physical state recorded for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssetStatus {
    #[default]
    Available,
    Missing,
    Unlabeled,
    Others,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Missing => "Missing",
            AssetStatus::Unlabeled => "Unlabeled",
            AssetStatus::Others => "Others",
        }
    }
}

/// One row of the inventory sheet.
///
/// `purchase_month` is kept as written in the sheet; it is only resolved
/// to a calendar month when depreciation is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub asset_number: String,
    pub placement: String,
    pub source: String,
    pub name: String,
    pub asset_group: String,
    pub ownership: String,
    pub quantity: Decimal,
    pub documentation_url: String,
    pub invoice_url: String,
    pub acquisition_cost: Decimal,
    pub purchase_year: Option<i32>,
    pub purchase_month: String,
    pub economic_life_years: Option<u32>,
    pub monthly_depreciation: Decimal,
    pub status: String,
    pub label: String,
    /// Sheet columns without a dedicated field (legacy yearly valuations etc.),
    /// carried through unchanged.
    #[serde(default)]
    pub extra_columns: BTreeMap<String, String>,
}

/// Input model for registering a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub asset_number: String,
    #[serde(default)]
    pub placement: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub asset_group: String,
    #[serde(default)]
    pub ownership: String,
    pub quantity: u32,
    #[serde(default)]
    pub documentation_url: String,
    #[serde(default)]
    pub invoice_url: String,
    pub acquisition_cost: Decimal,
    pub purchase_year: i32,
    pub purchase_month: PurchaseMonth,
    pub economic_life_years: Option<u32>,
    /// Yearly depreciation as a percentage of cost (25 for four years, 12.5 for eight).
    pub annual_depreciation_percent: Decimal,
    pub status: Option<AssetStatus>,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        if self.asset_number.trim().is_empty() {
            return Err(ValidationError::MissingField("assetNumber".to_string()).into());
        }
        if self.quantity < 1 {
            return Err(invalid("Quantity must be at least 1"));
        }
        validate_cost(self.acquisition_cost)?;
        validate_purchase_year(self.purchase_year)?;
        if let Some(years) = self.economic_life_years {
            validate_economic_life(years)?;
        }
        if self.annual_depreciation_percent <= Decimal::ZERO
            || self.annual_depreciation_percent > Decimal::ONE_HUNDRED
        {
            return Err(invalid(&format!(
                "Annual depreciation percentage must be within (0, 100], got {}",
                self.annual_depreciation_percent
            )));
        }
        Ok(())
    }

    /// Straight-line monthly charge implied by the yearly percentage.
    pub fn monthly_depreciation(&self) -> Decimal {
        self.acquisition_cost * self.annual_depreciation_percent
            / Decimal::ONE_HUNDRED
            / Decimal::from(12)
    }

    /// Builds the stored record. Call [`NewAsset::validate`] first.
    pub fn into_record(self) -> AssetRecord {
        let monthly_depreciation = self.monthly_depreciation();
        AssetRecord {
            asset_number: self.asset_number.trim().to_string(),
            placement: self.placement,
            source: self.source,
            name: self.name,
            asset_group: self.asset_group,
            ownership: self.ownership,
            quantity: Decimal::from(self.quantity),
            documentation_url: self.documentation_url,
            invoice_url: self.invoice_url,
            acquisition_cost: self.acquisition_cost,
            purchase_year: Some(self.purchase_year),
            purchase_month: self.purchase_month.indonesian_name().to_string(),
            economic_life_years: Some(
                self.economic_life_years
                    .unwrap_or(DEFAULT_ECONOMIC_LIFE_YEARS),
            ),
            monthly_depreciation,
            status: self.status.unwrap_or_default().as_str().to_string(),
            label: "TRUE".to_string(),
            extra_columns: BTreeMap::new(),
        }
    }
}

/// Editable fields of an existing asset. The asset number is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub placement: String,
    pub source: String,
    pub name: String,
    pub asset_group: String,
    pub ownership: String,
    pub quantity: Decimal,
    pub documentation_url: String,
    pub invoice_url: String,
    pub acquisition_cost: Decimal,
    pub purchase_year: i32,
    pub purchase_month: String,
    pub economic_life_years: u32,
    pub monthly_depreciation: Decimal,
    pub status: String,
    pub label: String,
}

impl AssetUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.quantity.is_sign_negative() && !self.quantity.is_zero() {
            return Err(invalid("Quantity must not be negative"));
        }
        validate_cost(self.acquisition_cost)?;
        validate_purchase_year(self.purchase_year)?;
        PurchaseMonth::from_name(&self.purchase_month)?;
        validate_economic_life(self.economic_life_years)?;
        if self.monthly_depreciation.is_sign_negative() && !self.monthly_depreciation.is_zero() {
            return Err(invalid("Monthly depreciation must not be negative"));
        }
        Ok(())
    }

    /// Applies the edit onto `record`, keeping its number and extra columns.
    /// The purchase month is stored under its sheet name.
    pub fn apply_to(self, record: &mut AssetRecord) -> Result<()> {
        let purchase_month = PurchaseMonth::from_name(&self.purchase_month)?;
        record.placement = self.placement;
        record.source = self.source;
        record.name = self.name;
        record.asset_group = self.asset_group;
        record.ownership = self.ownership;
        record.quantity = self.quantity;
        record.documentation_url = self.documentation_url;
        record.invoice_url = self.invoice_url;
        record.acquisition_cost = self.acquisition_cost;
        record.purchase_year = Some(self.purchase_year);
        record.purchase_month = purchase_month.indonesian_name().to_string();
        record.economic_life_years = Some(self.economic_life_years);
        record.monthly_depreciation = self.monthly_depreciation;
        record.status = self.status;
        record.label = self.label;
        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.to_string()))
}

fn validate_cost(cost: Decimal) -> Result<()> {
    if cost.is_sign_negative() && !cost.is_zero() {
        return Err(invalid("Acquisition cost must not be negative"));
    }
    Ok(())
}

fn validate_purchase_year(year: i32) -> Result<()> {
    if !(MIN_PURCHASE_YEAR..=MAX_PURCHASE_YEAR).contains(&year) {
        return Err(invalid(&format!(
            "Purchase year must be between {} and {}, got {}",
            MIN_PURCHASE_YEAR, MAX_PURCHASE_YEAR, year
        )));
    }
    Ok(())
}

fn validate_economic_life(years: u32) -> Result<()> {
    if !(MIN_ECONOMIC_LIFE_YEARS..=MAX_ECONOMIC_LIFE_YEARS).contains(&years) {
        return Err(invalid(&format!(
            "Economic life must be between {} and {} years, got {}",
            MIN_ECONOMIC_LIFE_YEARS, MAX_ECONOMIC_LIFE_YEARS, years
        )));
    }
    Ok(())
}
