use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git repository not found for {}", .0.display())]
    NotAGitRepository(PathBuf),

    #[error("Cannot resolve HEAD: repository has no commits")]
    UnbornRepository,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tag-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Whether the declared version should simply be kept.
    ///
    /// A missing repository or an empty history is an expected situation,
    /// everything else is a metadata failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VersionError::NotAGitRepository(_) | VersionError::UnbornRepository
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionError::config("empty prefix");
        assert_eq!(err.to_string(), "Configuration error: empty prefix");
    }

    #[test]
    fn test_not_a_repository_mentions_path() {
        let err = VersionError::NotAGitRepository(PathBuf::from("/tmp/project"));
        assert!(err.to_string().contains("/tmp/project"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("corrupt packfile");
        let err: VersionError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("corrupt packfile"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(VersionError::NotAGitRepository(PathBuf::from(".")).is_recoverable());
        assert!(VersionError::UnbornRepository.is_recoverable());
        assert!(!VersionError::config("x").is_recoverable());
        assert!(!VersionError::Git(git2::Error::from_str("x")).is_recoverable());
        assert!(!VersionError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied"
        ))
        .is_recoverable());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionError::config("x"), "Configuration error"),
            (VersionError::UnbornRepository, "Cannot resolve HEAD"),
            (
                VersionError::NotAGitRepository(PathBuf::from("x")),
                "Git repository not found",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
