use std::path::Path;

use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};
use serde_yaml::Mapping;
use tracing::debug;

use crate::error::ThemeError;
use crate::source::kind_of;
use crate::template::IMAGES_KEY;

/// An image inlined as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedImage {
    /// `data:image/<ext>;base64,<payload>`
    pub data: String,
    /// Last path segment of the source path.
    pub filename: String,
}

impl EncodedImage {
    /// Builds the record for `bytes` read from `path`.
    ///
    /// The MIME subtype is whatever follows the last `.` in `path`, taken
    /// as-is: `logo.JPG` gives `image/JPG` and a path without a dot gives the
    /// whole path.
    pub fn from_bytes(path: &str, bytes: &[u8]) -> Self {
        let ext = path.rsplit('.').next().unwrap_or(path);
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        let filename = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        Self {
            data: format!("data:image/{};base64,{}", ext, payload),
            filename,
        }
    }
}

/// Reads the image at `relative` under `base_dir` and encodes it.
pub fn encode_image(
    base_dir: &Path,
    slot: &str,
    relative: &str,
) -> Result<EncodedImage, ThemeError> {
    let path = base_dir.join(relative);
    let bytes = std::fs::read(&path).map_err(|source| ThemeError::ImageNotFound {
        slot: slot.to_string(),
        path: path.clone(),
        source,
    })?;
    debug!(slot, path = %path.display(), bytes = bytes.len(), "encoded image");
    Ok(EncodedImage::from_bytes(relative, &bytes))
}

/// Encodes every image in `images` and writes them under `images`, keyed by
/// slot in source order.
///
/// The first unreadable image fails the whole call and `target` is left
/// without an `images` key.
pub fn apply_images(
    base_dir: &Path,
    images: Option<&Mapping>,
    target: &mut Map<String, Value>,
) -> Result<(), ThemeError> {
    let Some(images) = images else {
        return Ok(());
    };

    let mut encoded = Map::new();
    for (key, value) in images {
        let slot = key.as_str().ok_or_else(|| {
            ThemeError::invalid_section(
                "images",
                format!("image slot must be a string, got {}", kind_of(key)),
            )
        })?;
        let relative = value.as_str().ok_or_else(|| {
            ThemeError::invalid_section(
                "images",
                format!("path for '{}' must be a string, got {}", slot, kind_of(value)),
            )
        })?;

        let image = encode_image(base_dir, slot, relative)?;
        encoded.insert(slot.to_string(), serde_json::to_value(image)?);
    }

    target.insert(IMAGES_KEY.to_string(), Value::Object(encoded));
    Ok(())
}
