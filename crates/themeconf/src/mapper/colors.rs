use serde_json::{Map, Value};
use serde_yaml::Mapping;
use tracing::{debug, trace};

use super::to_json;
use crate::error::ThemeError;
use crate::template::{color_field, set_path};

/// Writes recognized color slots from `colors` into `target`.
///
/// Values are copied verbatim and replace the whole default leaf. Slots the
/// source omits keep their defaults; unknown keys are skipped.
pub fn apply_colors(
    colors: Option<&Mapping>,
    target: &mut Map<String, Value>,
) -> Result<(), ThemeError> {
    let Some(colors) = colors else {
        return Ok(());
    };

    for (key, value) in colors {
        let Some(field) = key.as_str().and_then(color_field) else {
            trace!(?key, "ignoring unknown color slot");
            continue;
        };
        debug!(slot = field.source, target = field.target, "applying color");
        set_path(target, &field.target_path(), to_json("colors", value)?);
    }

    Ok(())
}
