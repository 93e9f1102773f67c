//! The three section mappers.
//!
//! Each mapper reads one section of a [`SourceDocument`](crate::SourceDocument)
//! and writes to its own part of the merged document, so they can run in any
//! order:
//!
//! | Section | Writes to |
//! |---------|-----------|
//! | `colors` | leaves under `customTheme.colors` |
//! | `fonts` | `customFonts` |
//! | `images` | `images` |

mod colors;
mod fonts;
mod images;

pub use colors::apply_colors;
pub use fonts::apply_fonts;
pub use images::{apply_images, encode_image, EncodedImage};

use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use crate::error::ThemeError;
use crate::source::kind_of;

/// Converts a YAML value taken from `section` into its JSON equivalent.
///
/// Scalar mapping keys are written as strings (`~` becomes `"null"`, `1`
/// becomes `"1"`). Tags are dropped in favor of the tagged value. A sequence
/// or mapping used as a key is rejected.
pub(crate) fn to_json(section: &str, value: &YamlValue) -> Result<Value, ThemeError> {
    let json = match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => number_to_json(n),
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::Array(
            items
                .iter()
                .map(|item| to_json(section, item))
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(key_to_string(section, key)?, to_json(section, value)?);
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => to_json(section, &tagged.value)?,
    };
    Ok(json)
}

/// Non-finite floats have no JSON form and become `null`.
fn number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(u) = n.as_u64() {
        Value::from(u)
    } else if let Some(i) = n.as_i64() {
        Value::from(i)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key_to_string(section: &str, key: &YamlValue) -> Result<String, ThemeError> {
    match key {
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Tagged(tagged) => key_to_string(section, &tagged.value),
        other => Err(ThemeError::invalid_section(
            section,
            format!("mapping keys must be scalars, got {}", kind_of(other)),
        )),
    }
}
