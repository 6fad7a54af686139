//! Sheet storage implementation for assets.

mod model;
mod repository;

pub use model::{SheetColumns, CANONICAL_COLUMNS, COL_ASSET_NUMBER, LEGACY_COLUMNS};
pub use repository::SheetAssetRepository;
