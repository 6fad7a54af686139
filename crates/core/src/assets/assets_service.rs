use log::{debug, warn};
use std::sync::Arc;

use super::assets_filter::AssetFilter;
use super::assets_model::{AssetRecord, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for managing inventory assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Lists the assets matching `filter`, in sheet order
    fn get_assets(&self, filter: &AssetFilter) -> Result<Vec<AssetRecord>> {
        let assets = self.asset_repository.list()?;
        let total = assets.len();
        let filtered = filter.apply(assets);
        debug!("Asset filter kept {} of {} rows", filtered.len(), total);
        Ok(filtered)
    }

    fn get_asset(&self, asset_number: &str) -> Result<AssetRecord> {
        self.asset_repository.get_by_number(asset_number.trim())
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<AssetRecord> {
        new_asset.validate()?;
        let record = new_asset.into_record();

        match self.asset_repository.get_by_number(&record.asset_number) {
            Ok(_) => {
                warn!("Rejected duplicate asset number {}", record.asset_number);
                return Err(Error::ConstraintViolation(format!(
                    "Asset number {} already exists",
                    record.asset_number
                )));
            }
            Err(Error::Database(DatabaseError::NotFound(_))) => {}
            Err(e) => return Err(e),
        }

        debug!(
            "Creating asset {} with monthly depreciation {}",
            record.asset_number, record.monthly_depreciation
        );
        self.asset_repository.create(record).await
    }

    async fn update_asset(&self, asset_number: &str, update: AssetUpdate) -> Result<AssetRecord> {
        update.validate()?;
        let mut record = self.asset_repository.get_by_number(asset_number.trim())?;
        update.apply_to(&mut record)?;
        self.asset_repository.update(record).await
    }

    async fn delete_asset(&self, asset_number: &str) -> Result<()> {
        self.asset_repository.delete(asset_number.trim()).await
    }
}
