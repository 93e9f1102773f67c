//! The merge driver.
//!
//! A [`Merger`] is bound to a base directory. Every merge starts from a fresh
//! copy of the default template, applies the color, font and image mappers,
//! and returns the assembled [`MergedTheme`]. The mappers write to disjoint
//! parts of the document, so their order does not affect the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use themeconf::Merger;
//!
//! let merged = Merger::new("./site").merge_file()?;
//! println!("{}", merged.to_json_pretty()?);
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::ThemeError;
use crate::mapper::{apply_colors, apply_fonts, apply_images};
use crate::source::{SourceDocument, CONFIG_FILE_NAME};
use crate::template::default_template;

/// Options controlling where the merger looks for its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Name of the configuration file inside the base directory.
    pub config_file_name: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            config_file_name: CONFIG_FILE_NAME.to_string(),
        }
    }
}

/// The merged theme document, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedTheme(Map<String, Value>);

impl MergedTheme {
    /// Looks up a value by dotted path, e.g. `customTheme.colors.section.header`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let first = self.0.get(keys.next()?)?;
        keys.try_fold(first, |node, key| node.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Serializes with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Serializes on a single line.
    pub fn to_json_compact(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

/// Merges theme configurations found under a base directory.
#[derive(Debug, Clone)]
pub struct Merger {
    base_dir: PathBuf,
    options: MergeOptions,
}

impl Merger {
    /// Creates a merger reading from `base_dir` with default options.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            options: MergeOptions::default(),
        }
    }

    /// Replaces the options, returning `self` for chaining.
    pub fn with_options(mut self, options: MergeOptions) -> Self {
        self.options = options;
        self
    }

    /// Full path of the configuration file this merger reads.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(&self.options.config_file_name)
    }

    /// Reads the configuration file and merges it.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is missing or malformed, or if any
    /// referenced image cannot be read.
    pub fn merge_file(&self) -> Result<MergedTheme, ThemeError> {
        let path = self.config_path();
        let source = SourceDocument::from_file(&path)?;
        info!(path = %path.display(), "loaded theme config");
        self.merge_source(&source)
    }

    /// Parses `yaml` and merges it. Image paths resolve against the base
    /// directory.
    pub fn merge_str(&self, yaml: &str) -> Result<MergedTheme, ThemeError> {
        let source = SourceDocument::from_yaml(yaml)?;
        self.merge_source(&source)
    }

    /// Merges an already parsed source over a fresh copy of the defaults.
    pub fn merge_source(&self, source: &SourceDocument) -> Result<MergedTheme, ThemeError> {
        let mut merged = default_template();
        apply_colors(source.colors.as_ref(), &mut merged)?;
        apply_fonts(source.fonts.as_ref(), &mut merged)?;
        apply_images(&self.base_dir, source.images.as_ref(), &mut merged)?;
        Ok(MergedTheme(merged))
    }
}

/// Reads `theme.conf.yaml` from `base_dir` and returns the merged document as
/// pretty-printed JSON.
pub fn convert<P: AsRef<Path>>(base_dir: P) -> Result<String, ThemeError> {
    Merger::new(base_dir.as_ref()).merge_file()?.to_json_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_empty_source_equals_template() {
        let merged = Merger::new(".").merge_source(&SourceDocument::default()).unwrap();
        assert_eq!(merged.as_map(), &default_template());
        assert!(!merged.contains_key("customFonts"));
        assert!(!merged.contains_key("images"));
    }

    #[test]
    fn test_merge_str_all_sections() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("logo.svg"), "<svg/>").unwrap();

        let merged = Merger::new(temp_dir.path())
            .merge_str(
                r##"
                colors:
                  header: "#000000"
                  button_primary_fill: "#FF0000"
                fonts:
                  body: Inter
                images:
                  logo: logo.svg
                "##,
            )
            .unwrap();

        assert_eq!(
            merged.get_path("customTheme.colors.section.header"),
            Some(&json!("#000000"))
        );
        assert_eq!(
            merged.get_path("customTheme.colors.button.primary_fill"),
            Some(&json!("#FF0000"))
        );
        assert_eq!(merged.get_path("customFonts"), Some(&json!({ "body": "Inter" })));
        assert_eq!(
            merged.get_path("images.logo.data"),
            Some(&json!("data:image/svg;base64,PHN2Zy8+"))
        );
        assert_eq!(merged.get_path("images.logo.filename"), Some(&json!("logo.svg")));
    }

    #[test]
    fn test_root_key_order() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.png"), [1u8]).unwrap();

        let merged = Merger::new(temp_dir.path())
            .merge_str("images:\n  a: a.png\nfonts: {}\ncolors: {}\n")
            .unwrap();
        let keys: Vec<&str> = merged.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["customTheme", "text", "customFonts", "images"]);
    }

    #[test]
    fn test_merges_do_not_share_state() {
        let merger = Merger::new(".");
        let first = merger.merge_str("colors:\n  footer: black\n").unwrap();
        let second = merger.merge_str("").unwrap();

        assert_eq!(
            first.get_path("customTheme.colors.section.footer"),
            Some(&json!("black"))
        );
        assert_eq!(
            second.get_path("customTheme.colors.section.footer.value"),
            Some(&json!("#07A88D"))
        );
    }

    #[test]
    fn test_merge_file_uses_configured_name() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("alt.yaml"), "colors:\n  hero: teal\n").unwrap();

        let merger = Merger::new(temp_dir.path()).with_options(MergeOptions {
            config_file_name: "alt.yaml".to_string(),
        });
        assert_eq!(merger.config_path(), temp_dir.path().join("alt.yaml"));

        let merged = merger.merge_file().unwrap();
        assert_eq!(
            merged.get_path("customTheme.colors.section.hero"),
            Some(&json!("teal"))
        );
    }

    #[test]
    fn test_merge_file_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let err = Merger::new(temp_dir.path()).merge_file().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigNotFound);
    }

    #[test]
    fn test_convert_missing_image_produces_nothing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "colors:\n  header: '#000000'\nimages:\n  logo: nope.png\n",
        )
        .unwrap();

        let err = convert(temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ImageNotFound);
    }

    #[test]
    fn test_compact_and_pretty_agree() {
        let merged = Merger::new(".").merge_str("colors:\n  page: white\n").unwrap();
        let pretty: Value = serde_json::from_str(&merged.to_json_pretty().unwrap()).unwrap();
        let compact: Value = serde_json::from_str(&merged.to_json_compact().unwrap()).unwrap();
        assert_eq!(pretty, compact);
        assert!(!merged.to_json_compact().unwrap().contains('\n'));
        assert!(merged.to_json_pretty().unwrap().starts_with("{\n  \"customTheme\""));
    }

    #[test]
    fn test_get_path_misses() {
        let merged = Merger::new(".").merge_source(&SourceDocument::default()).unwrap();
        assert!(merged.get_path("customTheme.nope").is_none());
        assert!(merged.get_path("").is_none());
        assert_eq!(
            merged.into_value()["text"]["catalog"]["primary_header"],
            json!("Discover our content")
        );
    }
}
