use std::str::FromStr;

use inventaris_core::assets::AssetFilter;

use crate::error::{ApiError, ApiResult};

/// Builds an [`AssetFilter`] from a raw query string.
///
/// Multi-select keys may repeat (`placement=Studio&placement=Gudang`) and
/// also accept the bracketed form (`placement[]=Studio`).
pub fn parse_asset_filter(raw: Option<String>) -> ApiResult<AssetFilter> {
    let mut filter = AssetFilter::default();
    let Some(qs) = raw else {
        return Ok(filter);
    };

    let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(&qs)
        .map_err(|e| ApiError::BadRequest(format!("Malformed query string: {}", e)))?;

    for (key, value) in pairs {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match key.trim_end_matches("[]") {
            "placement" => filter.placements.push(value),
            "source" => filter.sources.push(value),
            "assetGroup" => filter.asset_groups.push(value),
            "ownership" => filter.ownerships.push(value),
            "purchaseMonth" => filter.purchase_months.push(value),
            "minPurchaseYear" => filter.min_purchase_year = Some(parse_bound(&key, &value)?),
            "maxPurchaseYear" => filter.max_purchase_year = Some(parse_bound(&key, &value)?),
            "minAcquisitionCost" => filter.min_acquisition_cost = Some(parse_bound(&key, &value)?),
            "maxAcquisitionCost" => filter.max_acquisition_cost = Some(parse_bound(&key, &value)?),
            _ => {}
        }
    }
    Ok(filter)
}

fn parse_bound<T: FromStr>(key: &str, value: &str) -> ApiResult<T> {
    value
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid value '{}' for {}", value, key)))
}
