//! Workflow module
//!
//! This module contains the components that orchestrate the renaming workflow.

mod context;
mod engine;
mod preview;

pub use context::{RunOptions, RunOutcome, WorkflowReport, WorkflowStats};
pub use engine::run;
pub use preview::{Confirmation, confirm_changes, show_preview};
