//! File operation functionality
//!
//! This module applies a [`RenamePlan`] to the filesystem.

use std::fs::{rename, symlink_metadata};
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::errors::{rename_error, Result};
use crate::path_gen::{RenameEntry, RenamePlan, Renamer};

/// Result of applying one plan entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileActionResult {
    /// The entry was renamed on disk
    Renamed,
    /// Source and target are the same path; nothing was done
    Unchanged,
}

impl Renamer {
    /// Applies every entry of `plan`, in order
    ///
    /// Stops at the first entry that fails. Entries renamed before the
    /// failure stay renamed and entries after it are not attempted.
    ///
    /// # Returns
    /// * `Result<usize>` - The number of entries renamed on disk
    ///
    /// # Errors
    /// Returns the failing entry's I/O error, including `AlreadyExists` when
    /// its target is already taken
    pub fn rename(&self, plan: &RenamePlan) -> Result<usize> {
        let mut renamed = 0;
        for entry in plan {
            if perform_file_action(entry)? == FileActionResult::Renamed {
                renamed += 1;
            }
        }

        info!("Renamed {renamed} of {} matched entries", plan.len());
        Ok(renamed)
    }
}

/// Renames a single entry
///
/// Refuses to overwrite an existing target; the platform rename would
/// otherwise replace it silently on unix.
///
/// # Errors
/// Returns a rename error carrying the underlying I/O error
pub fn perform_file_action(entry: &RenameEntry) -> Result<FileActionResult> {
    let RenameEntry { source, target } = entry;

    if !entry.is_changed() {
        debug!("Unchanged: {}", source.display());
        return Ok(FileActionResult::Unchanged);
    }

    if exists(target) {
        return Err(rename_error(
            io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            source.clone(),
            target.clone(),
        ));
    }

    debug!("Renaming: {} -> {}", source.display(), target.display());
    rename(source, target).map_err(|e| rename_error(e, source.clone(), target.clone()))?;

    Ok(FileActionResult::Renamed)
}

fn exists(path: &Path) -> bool {
    symlink_metadata(path).is_ok()
}
