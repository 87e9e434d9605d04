//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Short program name used to prefix diagnostics
pub const PROGRAM_NAME: &str = "rn";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is used to locate the platform configuration directory, where the
/// log file is written unless local logging is requested.
pub const APPLICATION: &str = "file_rename";

/// Pattern used when no match expression is given
pub const DEFAULT_PATTERN: &str = "*";

/// Separator between patterns in a match expression
pub const PATTERN_SEPARATOR: char = ',';

/// Root directory used when none is given
pub const DEFAULT_DIR: &str = ".";

/// Depth sentinel meaning no limit
pub const UNBOUNDED_DEPTH: i64 = -1;

/// Arrow placed between the old and the new path in previews
pub const PREVIEW_ARROW: &str = "--->";

/// Question asked before a dry run is applied
pub const CONFIRM_PROMPT: &str = "would you like to apply changes (y/n): ";

pub const DIR_HELP: &str = "Specifies the root directory to traverse";
pub const MATCH_HELP: &str =
    "Filter entries by glob patterns, separated by commas (surrounding spaces are ignored)";
pub const DEPTH_HELP: &str =
    "Depth of subdirectories to traverse relative to the root directory (-1 for no limit)";
pub const REPLACE_HELP: &str = "Replaces part of the filename, use with --with";
pub const WITH_HELP: &str = "Provides the replacement value, use with --replace";
pub const PREFIX_HELP: &str = "Adds a prefix to the filename";
pub const SUFFIX_HELP: &str = "Adds a suffix to the filename";
pub const DRY_RUN_HELP: &str = "Preview the changes and ask before applying them";
pub const INCLUDE_DIRS_HELP: &str = "Also rename directories whose names match";
pub const ALLOW_EMPTY_WITH_HELP: &str =
    "Let an empty --with delete the --replace text instead of ignoring it";
pub const CONFIG_HELP: &str = "Read defaults from a YAML configuration file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file relative to the working directory instead of the config directory";
