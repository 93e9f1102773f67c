use serde_json::{Map, Value};
use tracing::debug;

use super::to_json;
use crate::error::ThemeError;
use crate::template::CUSTOM_FONTS_KEY;

/// Copies the `fonts` section verbatim into `customFonts`.
///
/// Without a `fonts` section the merged document gets no `customFonts` key.
pub fn apply_fonts(
    fonts: Option<&serde_yaml::Value>,
    target: &mut Map<String, Value>,
) -> Result<(), ThemeError> {
    if let Some(fonts) = fonts {
        debug!("applying custom fonts");
        target.insert(CUSTOM_FONTS_KEY.to_string(), to_json("fonts", fonts)?);
    }
    Ok(())
}
