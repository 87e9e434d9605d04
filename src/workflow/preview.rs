//! Preview and confirmation
//!
//! Console glue around a [`RenamePlan`]: listing the planned changes and
//! asking whether to go ahead.

use std::io::{BufRead, Write};

use colored::Colorize;
use log::warn;

use crate::constants::{CONFIRM_PROMPT, PREVIEW_ARROW};
use crate::errors::{console_error, Result};
use crate::logging::format_message;
use crate::path_gen::RenamePlan;

/// Answer to the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Abort,
}

/// Writes one `old ---> new` line per changed plan entry
///
/// # Errors
/// Returns an error if writing to `output` fails
pub fn show_preview<W: Write>(plan: &RenamePlan, output: &mut W) -> Result<()> {
    for entry in plan.iter().filter(|e| e.is_changed()) {
        let source = entry.source.display().to_string();
        let target = entry.target.display().to_string();

        let message = format!("{source} {PREVIEW_ARROW} {target}");
        let colored_message = format!(
            "{} {} {}",
            source,
            PREVIEW_ARROW.dimmed(),
            target.green()
        );
        writeln!(output, "{}", format_message(&message, &colored_message))
            .map_err(console_error)?;
    }
    Ok(())
}

/// Asks until the answer is yes or no
///
/// `y`/`yes` proceed and `n`/`no` abort, in any letter case. Anything else
/// asks again. End of input counts as a refusal.
///
/// # Errors
/// Returns an error if reading `input` or writing `output` fails
pub fn confirm_changes<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Confirmation> {
    let mut answer = String::new();
    loop {
        write!(output, "{CONFIRM_PROMPT}").map_err(console_error)?;
        output.flush().map_err(console_error)?;

        answer.clear();
        if input.read_line(&mut answer).map_err(console_error)? == 0 {
            writeln!(output).map_err(console_error)?;
            warn!("End of input, nothing renamed");
            return Ok(Confirmation::Abort);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Confirmation::Proceed),
            "n" | "no" => return Ok(Confirmation::Abort),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_gen::RenameEntry;
    use std::io::Cursor;

    fn answer(text: &str) -> (Confirmation, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmation = confirm_changes(&mut input, &mut output).unwrap();
        (confirmation, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirm_yes() {
        assert_eq!(answer("y\n").0, Confirmation::Proceed);
        assert_eq!(answer("YES\n").0, Confirmation::Proceed);
    }

    #[test]
    fn test_confirm_no() {
        assert_eq!(answer("n\n").0, Confirmation::Abort);
        assert_eq!(answer("no\n").0, Confirmation::Abort);
    }

    #[test]
    fn test_reprompts_on_other_input() {
        let (confirmation, output) = answer("maybe\n\nyes\n");
        assert_eq!(confirmation, Confirmation::Proceed);
        assert_eq!(output.matches(CONFIRM_PROMPT).count(), 3);
    }

    #[test]
    fn test_end_of_input_aborts() {
        assert_eq!(answer("maybe\n").0, Confirmation::Abort);
    }

    #[test]
    fn test_preview_lists_changed_entries_only() {
        let plan: RenamePlan = vec![
            RenameEntry::new("a.txt".into(), "x_a.txt".into()),
            RenameEntry::new("b.txt".into(), "b.txt".into()),
        ]
        .into_iter()
        .collect();

        let mut output = Vec::new();
        show_preview(&plan, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("a.txt "));
        assert!(output.contains("x_a.txt"));
        assert!(!output.contains("b.txt"));
    }
}
