use chrono::NaiveDate;

use super::depreciation_model::AssetDepreciation;
use crate::errors::Result;

/// Trait for depreciation service operations
pub trait DepreciationServiceTrait: Send + Sync {
    /// Evaluates the stored asset's schedule at `as_of`, or today when absent.
    fn evaluate_asset(&self, asset_number: &str, as_of: Option<NaiveDate>)
        -> Result<AssetDepreciation>;
}
