//! Error types for theme conversion.
//!
//! Every failure is fatal to a run: nothing is retried and no partial output
//! is produced. [`ThemeError::kind`] collapses the variants into the coarse
//! categories callers usually branch on.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, merging or serializing a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme configuration file could not be read.
    #[error("failed to read theme config {}: {source}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme configuration is not valid YAML or not a mapping.
    #[error("{}", parse_message(path.as_ref(), message))]
    Parse {
        /// Source file, when the document came from disk.
        path: Option<PathBuf>,
        message: String,
    },

    /// A top-level section has the wrong shape.
    #[error("invalid '{section}' section: {message}")]
    InvalidSection { section: String, message: String },

    /// An image referenced from the `images` section could not be read.
    #[error("failed to read image '{slot}' at {}: {source}", path.display())]
    ImageNotFound {
        slot: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_message(path: Option<&PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to parse theme config {}: {}", p.display(), message),
        None => format!("failed to parse theme config: {}", message),
    }
}

/// Coarse classification of a [`ThemeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigNotFound,
    Parse,
    ImageNotFound,
    Serialize,
}

impl ThemeError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThemeError::ConfigNotFound { .. } => ErrorKind::ConfigNotFound,
            ThemeError::Parse { .. } | ThemeError::InvalidSection { .. } => ErrorKind::Parse,
            ThemeError::ImageNotFound { .. } => ErrorKind::ImageNotFound,
            ThemeError::Json(_) => ErrorKind::Serialize,
        }
    }

    pub(crate) fn invalid_section(section: &str, message: impl Into<String>) -> Self {
        ThemeError::InvalidSection {
            section: section.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_display() {
        let err = ThemeError::ConfigNotFound {
            path: PathBuf::from("/tmp/site/theme.conf.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("theme.conf.yaml"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.kind(), ErrorKind::ConfigNotFound);
    }

    #[test]
    fn test_parse_display_with_and_without_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("site/theme.conf.yaml")),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("site/theme.conf.yaml"));
        assert!(err.to_string().contains("bad indent"));

        let err = ThemeError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse theme config: bad indent");
    }

    #[test]
    fn test_invalid_section_is_parse_kind() {
        let err = ThemeError::invalid_section("images", "expected a mapping");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(
            err.to_string(),
            "invalid 'images' section: expected a mapping"
        );
    }

    #[test]
    fn test_image_not_found_keeps_source() {
        use std::error::Error as _;

        let err = ThemeError::ImageNotFound {
            slot: "logo".to_string(),
            path: PathBuf::from("site/img/logo.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.kind(), ErrorKind::ImageNotFound);
        assert!(err.to_string().contains("'logo'"));
        assert!(err.source().is_some());
    }
}
