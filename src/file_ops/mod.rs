//! File operations module
//!
//! This module contains the components that change the filesystem.

mod actions;

pub use actions::{FileActionResult, perform_file_action};
