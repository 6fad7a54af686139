//! In-memory asset store shared by service tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::assets::{AssetRecord, AssetRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};

pub struct MockAssetRepository {
    assets: RwLock<Vec<AssetRecord>>,
}

impl MockAssetRepository {
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        Self {
            assets: RwLock::new(assets),
        }
    }

    pub fn snapshot(&self) -> Vec<AssetRecord> {
        self.assets.read().unwrap().clone()
    }
}

fn not_found(asset_number: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Asset {} not found",
        asset_number
    )))
}

#[async_trait]
impl AssetRepositoryTrait for MockAssetRepository {
    fn list(&self) -> Result<Vec<AssetRecord>> {
        Ok(self.snapshot())
    }

    fn get_by_number(&self, asset_number: &str) -> Result<AssetRecord> {
        self.assets
            .read()
            .unwrap()
            .iter()
            .find(|a| a.asset_number == asset_number)
            .cloned()
            .ok_or_else(|| not_found(asset_number))
    }

    async fn create(&self, record: AssetRecord) -> Result<AssetRecord> {
        self.assets.write().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: AssetRecord) -> Result<AssetRecord> {
        let mut assets = self.assets.write().unwrap();
        let slot = assets
            .iter_mut()
            .find(|a| a.asset_number == record.asset_number)
            .ok_or_else(|| not_found(&record.asset_number))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, asset_number: &str) -> Result<()> {
        let mut assets = self.assets.write().unwrap();
        let before = assets.len();
        assets.retain(|a| a.asset_number != asset_number);
        if assets.len() == before {
            return Err(not_found(asset_number));
        }
        Ok(())
    }
}

/// Builds a sheet row with the fields the tests care about.
#[allow(clippy::too_many_arguments)]
pub fn asset(
    asset_number: &str,
    ownership: &str,
    placement: &str,
    quantity: i64,
    acquisition_cost: Decimal,
    monthly_depreciation: Decimal,
    purchase_year: Option<i32>,
    purchase_month: &str,
) -> AssetRecord {
    AssetRecord {
        asset_number: asset_number.to_string(),
        placement: placement.to_string(),
        source: "Invoice Fauzie".to_string(),
        name: format!("Item {}", asset_number),
        asset_group: "Kelompok I".to_string(),
        ownership: ownership.to_string(),
        quantity: Decimal::from(quantity),
        documentation_url: String::new(),
        invoice_url: String::new(),
        acquisition_cost,
        purchase_year,
        purchase_month: purchase_month.to_string(),
        economic_life_years: Some(4),
        monthly_depreciation,
        status: "Available".to_string(),
        label: "TRUE".to_string(),
        extra_columns: BTreeMap::new(),
    }
}
