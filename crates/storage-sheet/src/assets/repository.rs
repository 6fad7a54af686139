use async_trait::async_trait;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::Mutex;

use inventaris_core::assets::{AssetRecord, AssetRepositoryTrait};
use inventaris_core::errors::{DatabaseError, Error, Result};

use super::model::{SheetColumns, CANONICAL_COLUMNS};
use crate::errors::StorageError;
use crate::sheet::{create_if_missing, read_sheet, write_sheet};

struct SheetState {
    columns: SheetColumns,
    assets: Vec<AssetRecord>,
}

/// Repository for the inventory sheet.
///
/// The whole sheet is loaded on open and kept in memory; reads never touch
/// the file. Every mutation rewrites the file before the in-memory copy is
/// replaced, and mutations are serialised so two writers cannot interleave.
pub struct SheetAssetRepository {
    path: PathBuf,
    state: RwLock<SheetState>,
    writer: Mutex<()>,
}

impl SheetAssetRepository {
    /// Opens the sheet at `path`, creating it with the canonical header when
    /// it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        create_if_missing(&path, &CANONICAL_COLUMNS)?;
        let state = load(&path)?;
        info!(
            "Loaded {} assets from {}",
            state.assets.len(),
            path.display()
        );
        Ok(Self {
            path,
            state: RwLock::new(state),
            writer: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the file, picking up edits made outside this process.
    pub async fn reload(&self) -> Result<()> {
        let _guard = self.writer.lock().await;
        let state = load(&self.path)?;
        debug!("Reloaded {} assets from {}", state.assets.len(), self.path.display());
        *self.write_state()? = state;
        Ok(())
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, SheetState>> {
        self.state
            .read()
            .map_err(|_| Error::Unexpected("Sheet state lock poisoned".to_string()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, SheetState>> {
        self.state
            .write()
            .map_err(|_| Error::Unexpected("Sheet state lock poisoned".to_string()))
    }

    /// Runs `change` against a copy of the rows, writes the result to disk,
    /// then publishes it. Nothing is published when the write fails.
    async fn mutate<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<AssetRecord>) -> Result<T>,
    {
        let _guard = self.writer.lock().await;

        let (columns, mut assets) = {
            let state = self.read_state()?;
            (state.columns.clone(), state.assets.clone())
        };
        let outcome = change(&mut assets)?;

        let path = self.path.clone();
        let headers = columns.headers().to_vec();
        let rows: Vec<Vec<String>> = assets.iter().map(|a| columns.encode(a)).collect();
        tokio::task::spawn_blocking(move || write_sheet(&path, &headers, &rows))
            .await
            .map_err(|e| StorageError::WriteTask(e.to_string()))??;

        *self.write_state()? = SheetState { columns, assets };
        Ok(outcome)
    }
}

fn load(path: &Path) -> std::result::Result<SheetState, StorageError> {
    let sheet = read_sheet(path)?;
    let columns = SheetColumns::resolve(&sheet.headers)?;
    let assets = columns.decode_sheet(&sheet)?;

    let mut seen = HashSet::new();
    for asset in &assets {
        if !seen.insert(asset.asset_number.as_str()) {
            warn!(
                "Asset number {} appears more than once in {}; lookups use the first row",
                asset.asset_number,
                path.display()
            );
        }
    }

    Ok(SheetState { columns, assets })
}

fn not_found(asset_number: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Asset {} not found",
        asset_number
    )))
}

#[async_trait]
impl AssetRepositoryTrait for SheetAssetRepository {
    fn list(&self) -> Result<Vec<AssetRecord>> {
        Ok(self.read_state()?.assets.clone())
    }

    fn get_by_number(&self, asset_number: &str) -> Result<AssetRecord> {
        self.read_state()?
            .assets
            .iter()
            .find(|a| a.asset_number == asset_number)
            .cloned()
            .ok_or_else(|| not_found(asset_number))
    }

    async fn create(&self, record: AssetRecord) -> Result<AssetRecord> {
        let created = self
            .mutate(|assets| {
                if assets.iter().any(|a| a.asset_number == record.asset_number) {
                    return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                        "Asset {} already exists",
                        record.asset_number
                    ))));
                }
                assets.push(record.clone());
                Ok(record)
            })
            .await?;
        debug!("Appended asset {} to sheet", created.asset_number);
        Ok(created)
    }

    async fn update(&self, record: AssetRecord) -> Result<AssetRecord> {
        self.mutate(|assets| {
            let slot = assets
                .iter_mut()
                .find(|a| a.asset_number == record.asset_number)
                .ok_or_else(|| not_found(&record.asset_number))?;
            *slot = record.clone();
            Ok(record)
        })
        .await
    }

    async fn delete(&self, asset_number: &str) -> Result<()> {
        self.mutate(|assets| {
            let position = assets
                .iter()
                .position(|a| a.asset_number == asset_number)
                .ok_or_else(|| not_found(asset_number))?;
            assets.remove(position);
            Ok(())
        })
        .await
    }
}
