//! Reset, export, import and check the stored snapshot.
//!
//! These commands open the same storage file the site writes, so they should
//! run while the site is stopped: the site keeps its snapshot in memory and
//! overwrites the file on its next save.

use std::path::Path;

use folio_core::{Snapshot, SnapshotPatch, seed};
use folio_site::store::{ContentStore, DATA_KEY, FileStorage, Storage};
use tracing::{info, warn};

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Read the stored snapshot strictly.
///
/// Unlike the site, a stored value that does not parse is an error here
/// rather than a silent fallback. Nothing stored yet means the defaults.
async fn stored_snapshot(storage: &FileStorage) -> CommandResult<Snapshot> {
    match storage.get_item(DATA_KEY).await? {
        Some(raw) => Ok(serde_json::from_str(&raw).map_err(|e| {
            format!("stored snapshot in {} is invalid: {e}", storage.path().display())
        })?),
        None => {
            warn!(path = %storage.path().display(), "Nothing stored yet, using defaults");
            Ok(seed())
        }
    }
}

/// Replace the stored content with the defaults.
///
/// # Errors
///
/// Returns an error if the storage file cannot be read or written.
pub async fn reset(storage_path: &Path) -> CommandResult<()> {
    let storage = FileStorage::open(storage_path).await?;
    let mut content = ContentStore::load(storage).await;
    content.reset_data().await?;

    info!(path = %storage_path.display(), "Content reset to defaults");
    Ok(())
}

/// The stored snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the storage file cannot be read or the stored
/// snapshot is invalid.
pub async fn export(storage_path: &Path) -> CommandResult<String> {
    let storage = FileStorage::open(storage_path).await?;
    let snapshot = stored_snapshot(&storage).await?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Validate a snapshot file and store it, replacing all content.
///
/// # Errors
///
/// Returns an error if the file does not hold a valid snapshot, holds
/// duplicate ids, or cannot be stored.
pub async fn import(storage_path: &Path, file: &Path) -> CommandResult<()> {
    let raw = tokio::fs::read_to_string(file).await?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .map_err(|e| format!("{} is not a valid snapshot: {e}", file.display()))?;

    let duplicates = snapshot.duplicate_ids();
    if let Some((section, id)) = duplicates.first() {
        return Err(format!(
            "{} has {} duplicate id(s), first is {id:?} in {section}",
            file.display(),
            duplicates.len()
        )
        .into());
    }

    let storage = FileStorage::open(storage_path).await?;
    let mut content = ContentStore::load(storage).await;
    content.update_data(SnapshotPatch::from(snapshot)).await?;

    info!(from = %file.display(), path = %storage_path.display(), "Snapshot imported");
    Ok(())
}

/// Duplicate ids in the stored snapshot, as `(list, id)`.
///
/// # Errors
///
/// Returns an error if the storage file cannot be read or the stored
/// snapshot is invalid.
pub async fn check(storage_path: &Path) -> CommandResult<Vec<(&'static str, String)>> {
    let storage = FileStorage::open(storage_path).await?;
    let snapshot = stored_snapshot(&storage).await?;
    Ok(snapshot.duplicate_ids())
}
