//! Inventaris Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the inventory application:
//! asset records and their browse filter, the straight-line depreciation
//! engine, and dashboard aggregates. It performs no I/O; the asset store
//! is reached through [`assets::AssetRepositoryTrait`], implemented by the
//! `storage-sheet` crate.

pub mod assets;
pub mod constants;
pub mod dashboard;
pub mod depreciation;
pub mod errors;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export the types most callers need
pub use assets::{AssetFilter, AssetRecord};
pub use depreciation::{DepreciationResult, PurchaseMonth, YearMonth};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
