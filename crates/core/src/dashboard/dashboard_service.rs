use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use super::dashboard_model::{AcquisitionYear, DashboardSummary, FilterOptions, OwnershipShare};
use super::dashboard_traits::DashboardServiceTrait;
use crate::assets::{AssetFilter, AssetRecord, AssetRepositoryTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::depreciation::PurchaseMonth;
use crate::errors::Result;
use crate::utils::format_rupiah;

/// Aggregates the inventory for the overview dashboard.
pub struct DashboardService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl DashboardService {
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_summary(&self, filter: &AssetFilter) -> Result<DashboardSummary> {
        let assets = filter.apply(self.asset_repository.list()?);
        debug!("Building dashboard summary over {} assets", assets.len());
        Ok(summarize(&assets))
    }

    fn get_filter_options(&self) -> Result<FilterOptions> {
        let assets = self.asset_repository.list()?;
        Ok(filter_options(&assets))
    }
}

pub(crate) fn summarize(assets: &[AssetRecord]) -> DashboardSummary {
    let total_quantity: Decimal = assets.iter().map(|a| a.quantity).sum();
    let total_acquisition_cost: Decimal = assets.iter().map(|a| a.acquisition_cost).sum();

    DashboardSummary {
        asset_count: assets.len(),
        total_quantity,
        total_acquisition_cost,
        formatted_total_acquisition_cost: format_rupiah(total_acquisition_cost),
        ownership_distribution: ownership_distribution(assets),
        acquisition_timeline: acquisition_timeline(assets),
    }
}

/// Row share per owner; rows without an owner are left out of the base.
fn ownership_distribution(assets: &[AssetRecord]) -> Vec<OwnershipShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for asset in assets {
        let owner = asset.ownership.trim();
        if !owner.is_empty() {
            *counts.entry(owner).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<OwnershipShare> = counts
        .into_iter()
        .map(|(owner, count)| OwnershipShare {
            ownership: owner.to_string(),
            asset_count: count,
            percentage: (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total))
                .round_dp(DISPLAY_DECIMAL_PRECISION),
        })
        .collect();
    shares.sort_by(|a, b| {
        b.asset_count
            .cmp(&a.asset_count)
            .then_with(|| a.ownership.cmp(&b.ownership))
    });
    shares
}

fn acquisition_timeline(assets: &[AssetRecord]) -> Vec<AcquisitionYear> {
    let mut by_year: BTreeMap<i32, (Decimal, Decimal)> = BTreeMap::new();
    for asset in assets {
        if let Some(year) = asset.purchase_year {
            let entry = by_year.entry(year).or_insert((Decimal::ZERO, Decimal::ZERO));
            entry.0 += asset.quantity;
            entry.1 += asset.acquisition_cost;
        }
    }
    by_year
        .into_iter()
        .map(|(year, (quantity, acquisition_cost))| AcquisitionYear {
            year,
            quantity,
            acquisition_cost,
        })
        .collect()
}

pub(crate) fn filter_options(assets: &[AssetRecord]) -> FilterOptions {
    fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
        values
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    let present_months: BTreeSet<&str> =
        assets.iter().map(|a| a.purchase_month.as_str()).collect();
    let purchase_months = PurchaseMonth::ALL
        .iter()
        .map(|m| m.indonesian_name())
        .filter(|name| present_months.contains(name))
        .map(str::to_string)
        .collect();

    let years = assets.iter().filter_map(|a| a.purchase_year);
    let costs = assets.iter().map(|a| a.acquisition_cost);

    FilterOptions {
        placements: distinct(assets.iter().map(|a| &a.placement)),
        sources: distinct(assets.iter().map(|a| &a.source)),
        asset_groups: distinct(assets.iter().map(|a| &a.asset_group)),
        ownerships: distinct(assets.iter().map(|a| &a.ownership)),
        purchase_months,
        min_purchase_year: years.clone().min(),
        max_purchase_year: years.max(),
        min_acquisition_cost: costs.clone().min(),
        max_acquisition_cost: costs.max(),
    }
}
