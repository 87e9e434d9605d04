use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the renaming tool
#[derive(Debug)]
pub enum Error {
    /// The directory walk could not read an entry
    Traversal { source: io::Error, path: PathBuf },
    /// The search root exists but is not a directory
    NotADirectory { path: PathBuf },
    /// A configured glob pattern is not valid
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Every segment of the pattern list was empty
    EmptyPatternList,
    /// Depth value below the unbounded sentinel
    InvalidDepth { value: i64 },
    /// Renaming a single entry failed
    Rename {
        source: io::Error,
        from: PathBuf,
        to: PathBuf,
    },
    /// Error related to file operations other than renaming
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Reading the confirmation or writing the preview failed
    Console { source: io::Error },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Traversal { source, path } => {
                write!(f, "cannot traverse {}: {source}", path.display())
            }
            Error::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            Error::GlobPattern { source, pattern } => {
                write!(f, "invalid match expression '{pattern}': {source}")
            }
            Error::EmptyPatternList => write!(f, "no match expression given"),
            Error::InvalidDepth { value } => {
                write!(f, "invalid depth {value}: use -1 for no limit")
            }
            // The OS error comes first; it is the part the user acts on.
            Error::Rename { source, from, to } => {
                write!(f, "{source} ({} ---> {})", from.display(), to.display())
            }
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "failed to {} {}: {source}", operation, path.display())
            }
            Error::Console { source } => write!(f, "console I/O failed: {source}"),
            Error::ConfigParsing { detail, .. } => {
                write!(f, "configuration parsing error: {detail}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Traversal { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::Rename { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::Console { source } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let source = match err.into_io_error() {
            Some(io_err) => io_err,
            None => io::Error::other("filesystem loop detected"),
        };
        Error::Traversal { source, path }
    }
}

/// Custom Result type for the renaming tool
///
/// # Examples
/// ```
/// use file_rename::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The I/O error at the bottom of this error, if there is one
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Traversal { source, .. }
            | Error::Rename { source, .. }
            | Error::FileOperation { source, .. }
            | Error::Console { source } => Some(source),
            _ => None,
        }
    }
}

/// Helper function to create a traversal error
pub fn traversal_error(err: io::Error, path: PathBuf) -> Error {
    Error::Traversal { source: err, path }
}

/// Helper function to create a not-a-directory error
pub fn not_a_directory_error(path: PathBuf) -> Error {
    Error::NotADirectory { path }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an invalid depth error
pub fn invalid_depth_error(value: i64) -> Error {
    Error::InvalidDepth { value }
}

/// Helper function to create a rename error
pub fn rename_error(err: io::Error, from: PathBuf, to: PathBuf) -> Error {
    Error::Rename {
        source: err,
        from,
        to,
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a console error
pub fn console_error(err: io::Error) -> Error {
    Error::Console { source: err }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = traversal_error(io_error, PathBuf::from("/test/locked"));

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/locked"),
            "Error message should contain the path"
        );
        assert!(
            error_string.contains("permission denied"),
            "Error message should contain the OS error"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_walk_error_becomes_traversal_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing");

        let walk_error = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();
        let error = Error::from(walk_error);

        match &error {
            Error::Traversal { path, source } => {
                assert_eq!(path, &missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected a traversal error, got {other:?}"),
        }
        assert!(format!("{error}").contains("missing"));
    }

    #[test]
    fn test_glob_pattern_error() {
        let pattern_error = glob::Pattern::new("[").err().unwrap();
        let error = glob_pattern_error(pattern_error, "[");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("invalid match expression '['"),
            "Error message should contain the pattern"
        );
    }

    #[test]
    fn test_rename_error_surfaces_os_error_first() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = rename_error(io_error, PathBuf::from("old.txt"), PathBuf::from("new.txt"));

        let error_string = format!("{error}");
        assert!(error_string.starts_with("No such file or directory"));
        assert!(error_string.contains("old.txt ---> new.txt"));
        assert_eq!(
            error.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_invalid_depth_error() {
        let error = invalid_depth_error(-4);
        assert!(format!("{error}").contains("-4"));
        assert!(error.io_error().is_none());
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "unknown field `prefx`");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("unknown field `prefx`"),
            "Error message should contain the detail"
        );
    }

    #[test]
    fn test_invalid_filename_error() {
        let error = invalid_filename_error(PathBuf::from("/test/invalid:file"));
        assert!(format!("{error}").contains("/test/invalid:file"));
    }

    #[test]
    fn test_error_conversion() {
        let pattern_error = glob::Pattern::new("a[").err().unwrap();
        let error: Error = pattern_error.into();
        assert!(format!("{error}").contains("invalid match expression"));
    }
}
