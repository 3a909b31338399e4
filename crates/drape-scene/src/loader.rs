//! Scene file loading.
//!
//! `.toml` and `.json` files are accepted; the format is chosen by
//! extension. Loaded scenes are validated before they are returned.

use std::path::Path;

use tracing::debug;

use drape_types::{DrapeError, DrapeResult};

use crate::scene::SceneConfig;
use crate::validator::validate_scene;

/// Reads, parses and validates a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> DrapeResult<SceneConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let scene = match ext.as_deref() {
        Some("toml") => parse_scene_toml(&text)?,
        Some("json") => parse_scene_json(&text)?,
        _ => {
            return Err(DrapeError::InvalidScene(format!(
                "unsupported scene file extension: {}",
                path.display()
            )))
        }
    };

    validate_scene(&scene)?;
    debug!(
        path = %path.display(),
        name = %scene.name,
        colliders = scene.colliders.len(),
        "loaded scene"
    );
    Ok(scene)
}

/// Parses a scene from TOML text without validating it.
pub fn parse_scene_toml(text: &str) -> DrapeResult<SceneConfig> {
    toml::from_str(text).map_err(|e| DrapeError::Serialization(e.to_string()))
}

/// Parses a scene from JSON text without validating it.
pub fn parse_scene_json(text: &str) -> DrapeResult<SceneConfig> {
    serde_json::from_str(text).map_err(|e| DrapeError::Serialization(e.to_string()))
}
