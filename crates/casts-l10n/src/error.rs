use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, L10nError>;

/// Errors from loading, linting, and generating string tables.
///
/// Resolution itself never fails; these only surface from tooling paths.
#[derive(Debug, Error)]
pub enum L10nError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),

    #[error("key {key:?} cannot be used as an accessor name: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("duplicate key '{key}' in locale '{locale}'")]
    DuplicateKey { locale: String, key: String },
}

impl L10nError {
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::L10nError;

    #[test]
    fn parse_error_renders_location() {
        let error = L10nError::parse("de.lproj/Localizable.strings", 12, "expected '='");
        assert_eq!(
            error.to_string(),
            "de.lproj/Localizable.strings:12: expected '='"
        );
    }

    #[test]
    fn duplicate_key_names_locale_and_key() {
        let error = L10nError::DuplicateKey {
            locale: "fr".to_string(),
            key: "account_login".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "duplicate key 'account_login' in locale 'fr'"
        );
    }
}
