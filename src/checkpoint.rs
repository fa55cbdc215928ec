use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{KitError, Result};

/// Extension of the current checkpoint
pub const CHECKPOINT_EXTENSION: &str = "pth";

/// Extension of the single backup kept alongside it
pub const BACKUP_EXTENSION: &str = "bak";

/// Path of the checkpoint for a base name, e.g. `model` -> `model.pth`
pub fn checkpoint_path(checkpoint_file_name: impl AsRef<Path>) -> PathBuf {
    checkpoint_file_name.as_ref().with_extension(CHECKPOINT_EXTENSION)
}

/// Path of the backup for a base name, e.g. `model` -> `model.bak`
pub fn backup_path(checkpoint_file_name: impl AsRef<Path>) -> PathBuf {
    checkpoint_file_name.as_ref().with_extension(BACKUP_EXTENSION)
}

/// Make room for a new checkpoint.
///
/// If a checkpoint already exists it becomes the backup; any older backup
/// is deleted first. Does nothing if there is no checkpoint yet.
///
/// # Arguments
/// * `checkpoint_file_name` - Base name of the checkpoint; an existing extension is replaced
///
/// # Returns
/// * `Ok(())` if successful
/// * `Err(KitError::Io)` if the delete or rename failed
pub fn ensure_we_can_save(checkpoint_file_name: impl AsRef<Path>) -> Result<()> {
    let checkpoint = checkpoint_path(&checkpoint_file_name);
    if !checkpoint.is_file() {
        return Ok(());
    }

    let backup = backup_path(&checkpoint_file_name);
    if backup.is_file() {
        info!("Removing old backup {:?}", backup);
        fs::remove_file(&backup).map_err(|e| KitError::io(&backup, e))?;
    }

    info!("Moving checkpoint {:?} to {:?}", checkpoint, backup);
    fs::rename(&checkpoint, &backup).map_err(|e| KitError::io(&checkpoint, e))?;

    Ok(())
}
