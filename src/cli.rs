use std::path::{Path, PathBuf};

use clap::{
    command, crate_authors, crate_description, crate_version, Arg, ArgAction, ArgMatches, Command,
};
use log::{debug, warn};

use crate::config::{load_config, Config};
use crate::constants::{
    ALLOW_EMPTY_WITH_HELP, CONFIG_HELP, DEFAULT_DIR, DEFAULT_PATTERN, DEPTH_HELP, DIR_HELP,
    DRY_RUN_HELP, INCLUDE_DIRS_HELP, LOCAL_LOGGING_HELP, LOG_FILE_HELP, MATCH_HELP, PREFIX_HELP,
    PROGRAM_NAME, REPLACE_HELP, SUFFIX_HELP, VERBOSE_HELP, WITH_HELP,
};
use crate::discovery::{Depth, EntryKind, SearchConfig};
use crate::errors::Result;
use crate::logging::LogLevel;
use crate::path_gen::RenameRule;
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::RunOptions;

/// Builds the command-line interface
///
/// Kept separate from [`get_matches`] so tests can parse their own argument
/// lists.
pub fn build_command() -> Command {
    let arg_dir = Arg::new("dir").long("dir").value_name("PATH").help(DIR_HELP);

    let arg_match = Arg::new("match")
        .long("match")
        .value_name("PATTERN[,PATTERN...]")
        .help(MATCH_HELP);

    let arg_depth = Arg::new("depth")
        .long("depth")
        .value_name("INT")
        .help(DEPTH_HELP)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(i64));

    let arg_replace = Arg::new("replace").long("replace").help(REPLACE_HELP);
    let arg_with = Arg::new("with").long("with").help(WITH_HELP);
    let arg_prefix = Arg::new("prefix").long("prefix").help(PREFIX_HELP);
    let arg_suffix = Arg::new("suffix").long("suffix").help(SUFFIX_HELP);

    let arg_dry = Arg::new("dry_run")
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_include_dirs = Arg::new("include_dirs")
        .long("include-dirs")
        .help(INCLUDE_DIRS_HELP)
        .action(ArgAction::SetTrue);

    let arg_allow_empty_with = Arg::new("allow_empty_with")
        .long("allow-empty-with")
        .help(ALLOW_EMPTY_WITH_HELP)
        .action(ArgAction::SetTrue);

    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .name(PROGRAM_NAME)
        .author(crate_authors!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(arg_dir)
        .arg(arg_match)
        .arg(arg_depth)
        .arg(arg_replace)
        .arg(arg_with)
        .arg(arg_prefix)
        .arg(arg_suffix)
        .arg(arg_dry)
        .arg(arg_include_dirs)
        .arg(arg_allow_empty_with)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, if logging to a file was requested
///
/// Without `--log-locally` the file name is placed in the platform
/// configuration directory.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined or created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}

/// Builds the run options from the command line and the optional config file
///
/// Command-line values win over configuration file values, which win over
/// the built-in defaults.
///
/// # Errors
/// * Returns an error if the configuration file cannot be loaded
/// * Returns an error if the match expression is empty or the depth is invalid
pub fn get_run_options(matches: &ArgMatches) -> Result<RunOptions> {
    let config = match matches.get_one::<String>("config") {
        Some(file) => load_config(Path::new(file))?,
        None => Config::default(),
    };

    let root = match matches.get_one::<String>("dir") {
        Some(dir) => expand_path(dir),
        None => config
            .root_dir()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR)),
    };

    let search = search_config(matches, &config)?;
    let rule = rename_rule(matches, &config.rename);

    if !rule.replace_from.is_empty() && !rule.replaces() {
        warn!(
            "Ignoring replace '{}': no replacement given (see --with and --allow-empty-with)",
            rule.replace_from
        );
    }
    if rule.replace_from.is_empty() && !rule.replace_with.is_empty() {
        warn!("Ignoring with '{}': nothing to replace", rule.replace_with);
    }

    let options = RunOptions {
        root,
        search,
        rule,
        dry_run: matches.get_flag("dry_run"),
    };
    debug!("Run options: {options:?}");

    Ok(options)
}

fn search_config(matches: &ArgMatches, config: &Config) -> Result<SearchConfig> {
    let search = match (matches.get_one::<String>("match"), &config.patterns) {
        (Some(expression), _) => SearchConfig::from_match_expression(expression)?,
        (None, Some(patterns)) => SearchConfig::new(
            patterns
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty()),
        ),
        (None, None) => SearchConfig::from_match_expression(DEFAULT_PATTERN)?,
    };

    let depth = match matches.get_one::<i64>("depth") {
        Some(depth) => Depth::from_signed(*depth)?,
        None => config.max_depth()?.unwrap_or_default(),
    };

    let entry_kind = if matches.get_flag("include_dirs") {
        EntryKind::FilesAndDirectories
    } else {
        config.entry_kind().unwrap_or_default()
    };

    Ok(search.depth(depth).entry_kind(entry_kind))
}

fn rename_rule(matches: &ArgMatches, defaults: &RenameRule) -> RenameRule {
    let pick = |id: &str, default: &String| {
        matches
            .get_one::<String>(id)
            .cloned()
            .unwrap_or_else(|| default.clone())
    };

    RenameRule {
        prefix: pick("prefix", &defaults.prefix),
        suffix: pick("suffix", &defaults.suffix),
        replace_from: pick("replace", &defaults.replace_from),
        replace_with: pick("with", &defaults.replace_with),
        allow_empty_replacement: matches.get_flag("allow_empty_with")
            || defaults.allow_empty_replacement,
    }
}

/// Reports an error the way the binary does: prefixed with the program name
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("{PROGRAM_NAME}: {err}")
}

