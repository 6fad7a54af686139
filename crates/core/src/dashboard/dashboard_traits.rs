use super::dashboard_model::{DashboardSummary, FilterOptions};
use crate::assets::AssetFilter;
use crate::errors::Result;

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    fn get_summary(&self, filter: &AssetFilter) -> Result<DashboardSummary>;
    fn get_filter_options(&self) -> Result<FilterOptions>;
}
