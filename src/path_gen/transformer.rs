//! Name transformation
//!
//! This module contains the [`Renamer`] and the functions that turn a matched
//! path into its new path.

use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{invalid_filename_error, path_operation_error, Result};

use super::plan::{RenameEntry, RenamePlan};
use super::rule::RenameRule;

/// Compiles new names for matched paths and applies them
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    rule: RenameRule,
}

impl Renamer {
    pub fn new(rule: RenameRule) -> Self {
        Renamer { rule }
    }

    /// Builds the new path for `path`
    ///
    /// Only the base name without its extension is rewritten; the directory
    /// part and the extension are kept as they are.
    ///
    /// # Errors
    /// * Returns an error if the path has no final component
    /// * Returns an error if the final component is not valid unicode
    pub fn compile(&self, path: &Path) -> Result<PathBuf> {
        let file_name = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename of"))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;

        let (stem, extension) = split_extension(file_name);
        let new_name = format!("{}{}", self.rule.apply(stem), extension);
        trace!("{file_name} -> {new_name}");

        Ok(path.with_file_name(new_name))
    }

    /// Compiles every path into a rename plan, keeping the input order
    ///
    /// # Errors
    /// Returns the first error [`compile`](Self::compile) reports
    pub fn compile_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<RenamePlan> {
        let mut plan = RenamePlan::new();
        for path in paths {
            let source = path.as_ref().to_path_buf();
            let target = self.compile(&source)?;
            if !plan.push(RenameEntry::new(source, target)) {
                debug!("Ignoring duplicate path: {}", path.as_ref().display());
            }
        }
        Ok(plan)
    }
}

/// Splits a file name at its last dot
///
/// The extension keeps its dot. A name whose only dot is the leading one,
/// such as `.bashrc`, is all extension and has an empty stem.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) => file_name.split_at(index),
        None => (file_name, ""),
    }
}
