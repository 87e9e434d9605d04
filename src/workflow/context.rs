//! Workflow context
//!
//! This module defines the options a run starts from and the report it ends
//! with.

use std::path::PathBuf;

use crate::constants::DEFAULT_DIR;
use crate::discovery::SearchConfig;
use crate::path_gen::RenameRule;

/// Everything a run needs, already parsed and validated
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory to search
    pub root: PathBuf,
    /// Patterns, depth and entry kind for the search
    pub search: SearchConfig,
    /// How matched names are rewritten
    pub rule: RenameRule,
    /// Ask for confirmation before applying the renames
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            root: PathBuf::from(DEFAULT_DIR),
            search: SearchConfig::default(),
            rule: RenameRule::default(),
            dry_run: false,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing matched, or no matched name would change
    NothingToDo,
    /// The user declined the dry-run confirmation
    Aborted,
    /// The renames were applied
    Applied,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of entries that matched a pattern
    pub matched: usize,
    /// Number of entries renamed on disk
    pub renamed: usize,
    /// Number of matched entries whose name stays the same
    pub unchanged: usize,
}

/// Result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowReport {
    pub outcome: RunOutcome,
    pub stats: WorkflowStats,
}
