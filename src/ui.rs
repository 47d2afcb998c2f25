//! Terminal output for the command line tool.

use crate::resolver::Resolution;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Explain why no version was derived.
///
/// Returns `None` for a resolved version, which needs no explanation.
pub fn describe_resolution(resolution: &Resolution) -> Option<String> {
    match resolution {
        Resolution::Resolved(_) => None,
        Resolution::Unchanged => {
            Some("No git repository or no commits found; version unchanged".to_string())
        }
        Resolution::Failed(reason) => Some(format!("Failed to read git metadata: {}", reason)),
    }
}
