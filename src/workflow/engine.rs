//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::discovery::Searcher;
use crate::errors::Result;
use crate::path_gen::Renamer;

use super::context::{RunOptions, RunOutcome, WorkflowReport, WorkflowStats};
use super::preview::{confirm_changes, show_preview, Confirmation};

/// Searches, previews and renames
///
/// This function orchestrates the workflow steps:
/// 1. Compile the patterns and walk the root directory
/// 2. Compile the new name of every match into a rename plan
/// 3. Write the preview to `output`
/// 4. On a dry run, ask on `input`/`output` whether to continue
/// 5. Apply the plan
///
/// # Arguments
/// * `options` - The parsed run options
/// * `input` - Where the confirmation answer is read from
/// * `output` - Where the preview and the prompt are written to
///
/// # Returns
/// * `Result<WorkflowReport>` - How the run ended, with statistics
///
/// # Errors
/// * Returns an error if a pattern is invalid or the walk fails; nothing has
///   been renamed at that point
/// * Returns an error if a rename fails; earlier renames are kept
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
) -> Result<WorkflowReport> {
    // Step 1: search
    let searcher = Searcher::new(&options.search)?;
    let paths = searcher.search(&options.root)?;

    // Step 2: compile
    let renamer = Renamer::new(options.rule.clone());
    let plan = renamer.compile_all(&paths)?;

    let mut stats = WorkflowStats {
        matched: plan.len(),
        unchanged: plan.len() - plan.changed_count(),
        ..WorkflowStats::default()
    };

    if plan.changed_count() == 0 {
        info!("No entries to rename in {}", options.root.display());
        return Ok(WorkflowReport {
            outcome: RunOutcome::NothingToDo,
            stats,
        });
    }

    info!(
        "Renaming {} entries{}...",
        plan.changed_count(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    // Step 3: preview
    show_preview(&plan, output)?;

    // Step 4: confirm
    if options.dry_run && confirm_changes(input, output)? == Confirmation::Abort {
        debug!("Confirmation declined");
        return Ok(WorkflowReport {
            outcome: RunOutcome::Aborted,
            stats,
        });
    }

    // Step 5: rename
    stats.renamed = renamer.rename(&plan)?;

    Ok(WorkflowReport {
        outcome: RunOutcome::Applied,
        stats,
    })
}
