use super::assets_filter::AssetFilter;
use super::assets_model::{AssetRecord, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self, filter: &AssetFilter) -> Result<Vec<AssetRecord>>;
    fn get_asset(&self, asset_number: &str) -> Result<AssetRecord>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<AssetRecord>;
    async fn update_asset(&self, asset_number: &str, update: AssetUpdate) -> Result<AssetRecord>;
    async fn delete_asset(&self, asset_number: &str) -> Result<()>;
}

/// Trait defining the contract for the asset store.
///
/// Implemented by the storage adapter; rows are keyed by asset number.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<AssetRecord>>;
    fn get_by_number(&self, asset_number: &str) -> Result<AssetRecord>;
    async fn create(&self, record: AssetRecord) -> Result<AssetRecord>;
    async fn update(&self, record: AssetRecord) -> Result<AssetRecord>;
    async fn delete(&self, asset_number: &str) -> Result<()>;
}
