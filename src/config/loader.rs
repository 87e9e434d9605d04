//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::Path;

use log::debug;
use serde_yaml::from_str;

use crate::errors::{config_parsing_error, file_operation_error, Error, Result};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(file).map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

    let config = parse_config(&content).map_err(|e| match e {
        Error::ConfigParsing { source, detail } => Error::ConfigParsing {
            source,
            detail: format!("{}: {detail}", file.display()),
        },
        other => other,
    })?;

    debug!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Parses and validates configuration text
///
/// An empty document yields the default configuration.
///
/// # Errors
/// Returns an error if the YAML is malformed or fails validation
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = from_str(content).map_err(|e| {
        let detail = e.to_string();
        config_parsing_error(e, &detail)
    })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{Depth, EntryKind};
    use crate::path_gen::RenameRule;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
dir: photos
patterns: ["*.jpg", "*.png"]
depth: 2
include_directories: true
rename:
  prefix: "2024_"
  replace: IMG
  with: holiday
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.root_dir(), Some("photos".into()));
        assert_eq!(config.max_depth().unwrap(), Some(Depth::Limited(2)));
        assert_eq!(config.entry_kind(), Some(EntryKind::FilesAndDirectories));
        assert_eq!(
            config.rename,
            RenameRule::new().prefix("2024_").replace("IMG", "holiday")
        );
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = parse_config("prefx: a\n");
        assert!(matches!(result, Err(Error::ConfigParsing { .. })));
    }

    #[test]
    fn test_invalid_depth_is_rejected() {
        let result = parse_config("depth: -3\n");
        assert!(matches!(result, Err(Error::InvalidDepth { value: -3 })));
    }

    #[test]
    fn test_empty_pattern_list_is_rejected() {
        let result = parse_config("patterns: []\n");
        assert!(matches!(result, Err(Error::EmptyPatternList)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rename:\n  suffix: _old").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.rename.suffix, "_old");
    }

    #[test]
    fn test_load_missing_config() {
        let result = load_config(Path::new("/nonexistent/rename.yaml"));
        assert!(matches!(result, Err(Error::FileOperation { .. })));
    }
}
