//! Error handling for the CLI application

use std::fmt;

/// Errors specific to the command-line front end
#[derive(Debug)]
pub enum CliError {
    /// No file matched, or a named file is inaccessible
    FileNotFound(String),
    /// A glob pattern could not be parsed
    InvalidPattern(String),
    /// The configuration file is unreadable or malformed
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("lines.txt".to_string()).to_string(),
            "File not found: lines.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[oops".to_string()).to_string(),
            "Invalid file pattern: [oops"
        );
        assert_eq!(
            CliError::ConfigError("unknown field `size`".to_string()).to_string(),
            "Configuration error: unknown field `size`"
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let result: CliResult<()> = Err(CliError::ConfigError("bad".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_non_ascii_paths() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
