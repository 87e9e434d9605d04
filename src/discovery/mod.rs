//! File discovery module
//!
//! This module contains components for walking a directory tree and finding
//! the entries to rename.

mod matcher;
mod scanner;
mod search_config;

pub use matcher::PatternSet;
pub use scanner::Searcher;
pub use search_config::{Depth, EntryKind, SearchConfig};
