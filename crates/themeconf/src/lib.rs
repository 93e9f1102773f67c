//! # themeconf - Theme Configuration Merger
//!
//! `themeconf` turns a user-supplied theme configuration (colors, fonts, image
//! references) into the normalized JSON document a rendering layer expects.
//!
//! The input is a YAML file with three optional sections:
//!
//! ```yaml
//! colors:
//!   header: "#000000"
//!   text_links: "#1155CB"
//! fonts:
//!   heading: { family: Playfair Display }
//! images:
//!   logo: img/logo.png
//! ```
//!
//! It is merged over a fixed default document:
//!
//! - `colors`: recognized slots (see [`COLOR_FIELDS`]) overwrite their leaf
//!   under `customTheme.colors`; unknown slots are ignored
//! - `fonts`: copied verbatim to `customFonts`
//! - `images`: each file is read relative to the base directory and inlined
//!   as `{ data: "data:image/<ext>;base64,...", filename }` under `images`
//!
//! Every default key survives the merge. There is no partial success: a
//! missing config or image fails the whole conversion.
//!
//! ## Quick Start
//!
//! ```rust
//! use themeconf::Merger;
//!
//! let merged = Merger::new(".")
//!     .merge_str("colors:\n  header: '#000000'\n")
//!     .unwrap();
//!
//! assert_eq!(
//!     merged.get_path("customTheme.colors.section.header"),
//!     Some(&serde_json::json!("#000000")),
//! );
//! assert!(!merged.contains_key("customFonts"));
//! ```
//!
//! To read `theme.conf.yaml` from a directory and get the final JSON text in
//! one call, use [`convert`].

pub mod error;
pub mod mapper;
pub mod merge;
pub mod source;
pub mod template;

pub use error::{ErrorKind, ThemeError};
pub use mapper::EncodedImage;
pub use merge::{convert, MergeOptions, MergedTheme, Merger};
pub use source::{SourceDocument, CONFIG_FILE_NAME};
pub use template::{color_field, default_template, ColorField, COLOR_FIELDS};
