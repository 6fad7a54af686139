//! Depreciation module - straight-line schedule calculator, models, and service.

mod depreciation_calculator;
mod depreciation_model;
mod depreciation_service;
mod depreciation_traits;
mod month;

#[cfg(test)]
mod depreciation_service_tests;

pub use depreciation_calculator::{calculate_depreciation, evaluate};
pub use depreciation_model::{
    AssetDepreciation, DepreciationInput, DepreciationResult, DepreciationStatus,
    YearlyDepreciation,
};
pub use depreciation_service::DepreciationService;
pub use depreciation_traits::DepreciationServiceTrait;
pub use month::{PurchaseMonth, YearMonth};
