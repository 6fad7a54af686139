//! Assets module - inventory records, browse filter, services, and traits.

mod assets_filter;
mod assets_model;
mod assets_service;
mod assets_traits;

#[cfg(test)]
mod assets_model_tests;

pub use assets_filter::AssetFilter;
pub use assets_model::{AssetRecord, AssetStatus, AssetUpdate, NewAsset};
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
