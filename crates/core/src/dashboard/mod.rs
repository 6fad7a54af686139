//! Dashboard module - inventory totals, ownership mix, and filter options.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{AcquisitionYear, DashboardSummary, FilterOptions, OwnershipShare};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
