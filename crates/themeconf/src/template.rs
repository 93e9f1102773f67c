//! The default theme document and the color slot table.
//!
//! The default document is built once per process and cloned for every merge,
//! so a merge can never leak overrides into the next one. Every color leaf is
//! a `{ "value", "description" }` pair; overrides replace the whole leaf.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

/// A recognized color slot: a key in the source `colors` section and the
/// dotted path it is written to under `customTheme.colors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorField {
    pub source: &'static str,
    pub target: &'static str,
}

impl ColorField {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    /// Full key path from the document root.
    pub fn target_path(&self) -> Vec<&'static str> {
        let mut path = vec![CUSTOM_THEME_KEY, "colors"];
        path.extend(self.target.split('.'));
        path
    }
}

/// Root key holding the color groups.
pub const CUSTOM_THEME_KEY: &str = "customTheme";

/// Root key written by the font mapper.
pub const CUSTOM_FONTS_KEY: &str = "customFonts";

/// Root key written by the image mapper.
pub const IMAGES_KEY: &str = "images";

/// Source color keys and where they land.
pub const COLOR_FIELDS: &[ColorField] = &[
    ColorField::new("header", "section.header"),
    ColorField::new("page", "section.body"),
    ColorField::new("hero", "section.hero"),
    ColorField::new("accent", "section.accent"),
    ColorField::new("tertiary", "section.tertiary"),
    ColorField::new("stroke", "section.stroke"),
    ColorField::new("footer", "section.footer"),
    ColorField::new("text_hero", "text.hero"),
    ColorField::new("text_primary", "text.primary"),
    ColorField::new("text_secondary", "text.secondary"),
    ColorField::new("text_headings", "text.headings"),
    ColorField::new("text_links", "text.link"),
    ColorField::new("button_primary_fill", "button.primary_fill"),
    ColorField::new("button_primary_text", "button.primary_text"),
];

/// Looks up a recognized color slot by its source key.
pub fn color_field(source: &str) -> Option<&'static ColorField> {
    COLOR_FIELDS.iter().find(|field| field.source == source)
}

static DEFAULT_TEMPLATE: Lazy<Map<String, Value>> = Lazy::new(build_default_template);

fn color(value: &str, description: &str) -> Value {
    json!({ "value": value, "description": description })
}

fn build_default_template() -> Map<String, Value> {
    let mut root = Map::new();
    root.insert(
        CUSTOM_THEME_KEY.to_string(),
        json!({
            "colors": {
                "section": {
                    "header": color("#F8F8F8", "Background for header"),
                    "body": color("#FFFFFF", "Background for main content"),
                    "hero": color("#F8F8F8", "Background for hero section"),
                    "accent": color("#F8F8F8", "Subtle background"),
                    "tertiary": color("#FFFFFF", "Tertiary background"),
                    "stroke": color("rgba(0,0,0,0.1)", "Border color"),
                    "footer": color("#07A88D", "Background for footer"),
                },
                "text": {
                    "header": color("rgba(0,0,0,0.8)", "Header text"),
                    "hero": color("#FFFFFF", "Hero text"),
                    "headings": color("rgba(0,0,0,0.8)", "Headings text"),
                    "primary": color("rgba(0,0,0,0.8)", "Main content text"),
                    "secondary": color("rgba(0,0,0,0.8)", "Supporting text"),
                    "accent": color("#07A88D", "Subtle text"),
                    "link": color("#07A88D", "Link text"),
                    "footer": color("#FFFFFF", "Footer text"),
                },
                "button": {
                    "primary_fill": color("#1155CB", "Background for Primary Button"),
                    "primary_text": color("#FFFFFF", "Text for Primary Button"),
                },
            }
        }),
    );
    root.insert(
        "text".to_string(),
        json!({
            "catalog": {
                "welcome_message": "Welcome to our platform!",
                "primary_header": "Discover our content",
            }
        }),
    );
    root
}

/// Returns a fresh copy of the default document.
pub fn default_template() -> Map<String, Value> {
    DEFAULT_TEMPLATE.clone()
}

/// Writes `value` at `path`, creating intermediate objects as needed.
///
/// A non-object found on the way is replaced by an empty object. An empty
/// path is a no-op.
pub(crate) fn set_path(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for key in parents {
        let entry = current
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Some(next) = entry.as_object_mut() else {
            return;
        };
        current = next;
    }
    current.insert((*last).to_string(), value);
}
