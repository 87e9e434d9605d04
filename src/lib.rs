//! Batch file renaming
//!
//! The crate has two core components. The [`Searcher`](discovery::Searcher)
//! walks a directory and collects entries whose names match a set of glob
//! patterns. The [`Renamer`](path_gen::Renamer) compiles a new name for each
//! match (replace, then prefix, then suffix, keeping the extension) and
//! applies the resulting [`RenamePlan`](path_gen::RenamePlan).
//!
//! ```no_run
//! use std::path::Path;
//! use file_rename::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let searcher = Searcher::new(&SearchConfig::new(["*.txt"]))?;
//! let paths = searcher.search(Path::new("."))?;
//!
//! let renamer = Renamer::new(RenameRule::new().replace("report", "summary").prefix("2024_"));
//! let plan = renamer.compile_all(&paths)?;
//! renamer.rename(&plan)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::discovery::{Depth, EntryKind, SearchConfig, Searcher};
    pub use crate::errors::{generic_error, Error, Result};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::path_gen::{RenameEntry, RenamePlan, RenameRule, Renamer};
    pub use crate::workflow::{run, RunOptions, RunOutcome, WorkflowReport};
}
