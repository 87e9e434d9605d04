//! Path generation module
//!
//! This module contains the rename rule and the components that compute new
//! paths from it.

mod plan;
mod rule;
mod transformer;

pub use plan::{RenameEntry, RenamePlan};
pub use rule::RenameRule;
pub use transformer::{Renamer, split_extension};
