use thiserror::Error;

use casts_l10n::L10nError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for content problems (lint issues, stale output, low coverage).
pub const EXIT_CHECK_FAILED: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    L10n(#[from] L10nError),

    #[error("unknown key: {key}")]
    UnknownKey { key: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("lint found {issues} issue(s)")]
    LintFailed { issues: usize },

    #[error("failed to install log subscriber: {0}")]
    Telemetry(String),

    #[error("{message}")]
    Exit { code: i32, message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exit { code, .. } => *code,
            Self::LintFailed { .. } => EXIT_CHECK_FAILED,
            _ => 1,
        }
    }

    #[must_use]
    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, EXIT_CHECK_FAILED};
    use casts_l10n::L10nError;

    #[test]
    fn exit_constructor_preserves_code_and_message() {
        let error = CliError::exit(3, "stale");
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "stale");
    }

    #[test]
    fn lint_failures_use_check_exit_code() {
        assert_eq!(CliError::LintFailed { issues: 4 }.exit_code(), EXIT_CHECK_FAILED);
    }

    #[test]
    fn library_errors_render_transparently() {
        let error = CliError::from(L10nError::InvalidLocale("C".into()));
        assert_eq!(error.to_string(), "invalid locale: \"C\"");
        assert_eq!(error.exit_code(), 1);
    }
}
