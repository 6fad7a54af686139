use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assets_model::AssetRecord;

/// Browse filter over the inventory.
///
/// Each list is a multi-select: empty means "any". Ranges are inclusive and
/// open-ended when a bound is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetFilter {
    pub placements: Vec<String>,
    pub sources: Vec<String>,
    pub asset_groups: Vec<String>,
    pub ownerships: Vec<String>,
    pub purchase_months: Vec<String>,
    pub min_purchase_year: Option<i32>,
    pub max_purchase_year: Option<i32>,
    pub min_acquisition_cost: Option<Decimal>,
    pub max_acquisition_cost: Option<Decimal>,
}

impl AssetFilter {
    pub fn is_empty(&self) -> bool {
        *self == AssetFilter::default()
    }

    pub fn matches(&self, asset: &AssetRecord) -> bool {
        selected(&self.placements, &asset.placement)
            && selected(&self.sources, &asset.source)
            && selected(&self.asset_groups, &asset.asset_group)
            && selected(&self.ownerships, &asset.ownership)
            && selected(&self.purchase_months, &asset.purchase_month)
            && self.year_in_range(asset.purchase_year)
            && in_range(
                asset.acquisition_cost,
                self.min_acquisition_cost,
                self.max_acquisition_cost,
            )
    }

    pub fn apply(&self, assets: Vec<AssetRecord>) -> Vec<AssetRecord> {
        if self.is_empty() {
            return assets;
        }
        assets.into_iter().filter(|a| self.matches(a)).collect()
    }

    fn year_in_range(&self, year: Option<i32>) -> bool {
        if self.min_purchase_year.is_none() && self.max_purchase_year.is_none() {
            return true;
        }
        // A year bound excludes rows without a purchase year
        match year {
            Some(year) => in_range(year, self.min_purchase_year, self.max_purchase_year),
            None => false,
        }
    }
}

fn selected(options: &[String], value: &str) -> bool {
    options.is_empty() || options.iter().any(|o| o == value)
}

fn in_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
