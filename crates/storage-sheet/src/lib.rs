//! Spreadsheet storage implementation for Inventaris.
//!
//! The inventory lives in a single sheet whose first row names the columns.
//! This crate reads a CSV export of that sheet and implements the repository
//! traits defined in `inventaris-core`:
//! - Sheet file loading, header handling and whole-file rewrites
//! - Column mapping between sheet rows and [`AssetRecord`]s
//! - The [`SheetAssetRepository`] used by the server
//!
//! ```text
//!   core (domain)
//!        │
//!        ▼
//!   storage-sheet (this crate)
//!        │
//!        ▼
//!   inventory.csv
//! ```
//!
//! [`AssetRecord`]: inventaris_core::assets::AssetRecord

pub mod assets;
pub mod errors;
pub mod sheet;

pub use assets::SheetAssetRepository;
pub use errors::StorageError;

// Re-export from inventaris-core for convenience
pub use inventaris_core::errors::{DatabaseError, Error, Result};
