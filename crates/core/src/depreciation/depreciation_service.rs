use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

use super::depreciation_calculator::calculate_depreciation;
use super::depreciation_model::{AssetDepreciation, DepreciationInput, DepreciationStatus};
use super::depreciation_traits::DepreciationServiceTrait;
use crate::assets::{AssetRecord, AssetRepositoryTrait};
use crate::errors::{DepreciationError, Result};
use crate::utils::{format_rupiah, Clock};

/// Evaluates depreciation schedules for stored assets.
pub struct DepreciationService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl DepreciationService {
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        Self {
            asset_repository,
            clock,
        }
    }

    /// Evaluates an already loaded record.
    pub fn evaluate_record(
        &self,
        asset: &AssetRecord,
        as_of: Option<NaiveDate>,
    ) -> Result<AssetDepreciation> {
        let purchase_year = asset
            .purchase_year
            .ok_or_else(|| DepreciationError::MissingPurchaseYear(asset.asset_number.clone()))?;

        let input = DepreciationInput::from_month_name(
            asset.acquisition_cost,
            asset.monthly_depreciation,
            purchase_year,
            &asset.purchase_month,
        )
        .inspect_err(|e| warn!("Cannot evaluate asset {}: {}", asset.asset_number, e))?;

        let evaluation_date = as_of.unwrap_or_else(|| self.clock.today());
        let result = calculate_depreciation(&input, evaluation_date);
        let status = result.status();

        if status == DepreciationStatus::InvalidRate {
            warn!(
                "Asset {} has no usable monthly depreciation; schedule not computed",
                asset.asset_number
            );
        } else {
            debug!(
                "Asset {} evaluated at {}: {} of {} months elapsed",
                asset.asset_number, result.evaluated_at, result.elapsed_months, result.total_months
            );
        }

        Ok(AssetDepreciation {
            asset_number: asset.asset_number.clone(),
            asset_name: asset.name.clone(),
            economic_life_years: asset.economic_life_years,
            status,
            progress_percent: result.progress_percent(),
            formatted_acquisition_cost: format_rupiah(result.acquisition_cost),
            formatted_book_value: format_rupiah(result.book_value),
            formatted_monthly_depreciation: format_rupiah(result.monthly_depreciation),
            result,
        })
    }
}

impl DepreciationServiceTrait for DepreciationService {
    fn evaluate_asset(
        &self,
        asset_number: &str,
        as_of: Option<NaiveDate>,
    ) -> Result<AssetDepreciation> {
        let asset = self.asset_repository.get_by_number(asset_number.trim())?;
        self.evaluate_record(&asset, as_of)
    }
}
