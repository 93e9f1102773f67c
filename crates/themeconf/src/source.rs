//! Parsing of the user's theme configuration.
//!
//! The document is parsed into a generic YAML value and then narrowed to the
//! three sections the mappers understand. Every section is optional; unknown
//! top-level keys are ignored.
//!
//! ```yaml
//! colors:
//!   header: "#000000"
//!   text_links: "#1155CB"
//! fonts:
//!   body: { family: Inter, weight: 400 }
//! images:
//!   logo: img/logo.png
//! ```

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::ThemeError;

/// Default name of the configuration file inside the base directory.
pub const CONFIG_FILE_NAME: &str = "theme.conf.yaml";

/// The narrowed sections of a theme configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceDocument {
    /// Color slot name to color value.
    pub colors: Option<Mapping>,
    /// Passed through verbatim. `Some(Value::Null)` means the key was present
    /// with an empty value.
    pub fonts: Option<Value>,
    /// Image slot name to path relative to the base directory.
    pub images: Option<Mapping>,
}

impl SourceDocument {
    /// Parses a configuration from YAML text.
    ///
    /// An empty document yields an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the text is not YAML or its root is
    /// not a mapping, and [`ThemeError::InvalidSection`] if `colors` or
    /// `images` is not a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::from_value(root)
    }

    /// Reads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            ThemeError::ConfigNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_yaml(&content).map_err(|err| match err {
            ThemeError::Parse { message, .. } => ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Narrows an already parsed YAML value.
    pub fn from_value(root: Value) -> Result<Self, ThemeError> {
        let mut root = match root {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(ThemeError::Parse {
                    path: None,
                    message: format!("theme config must be a mapping, got {}", kind_of(&other)),
                })
            }
        };

        Ok(Self {
            colors: take_mapping(&mut root, "colors")?,
            fonts: root.remove("fonts"),
            images: take_mapping(&mut root, "images")?,
        })
    }
}

/// Removes a section expected to be a mapping. A null section counts as absent.
fn take_mapping(root: &mut Mapping, section: &str) -> Result<Option<Mapping>, ThemeError> {
    match root.remove(section) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(mapping)) => Ok(Some(mapping)),
        Some(other) => Err(ThemeError::invalid_section(
            section,
            format!("expected a mapping, got {}", kind_of(&other)),
        )),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
