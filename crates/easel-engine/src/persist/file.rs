use std::path::Path;

use anyhow::{Context, Result};

use crate::scene::Scene;

use super::{LoadError, LoadPolicy, parse_save, to_json};

/// Default export file name.
pub const SAVE_FILE_NAME: &str = "beautiful_painting.json";

/// MIME type of an exported save.
pub const SAVE_MIME: &str = "application/json";

/// Writes `scene` to `path` as compact UTF-8 JSON, replacing any existing file.
pub fn write_save(path: impl AsRef<Path>, scene: &Scene) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_json(scene))
        .with_context(|| format!("failed to write save file {}", path.display()))?;
    log::info!("saved {} shapes to {}", scene.len(), path.display());
    Ok(())
}

/// Reads a save file as UTF-8 text. Non-UTF-8 content is an I/O error.
pub fn read_save_text(path: impl AsRef<Path>) -> Result<String, LoadError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Reads and parses a save file.
pub fn load_file(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<Scene, LoadError> {
    let text = read_save_text(path)?;
    parse_save(&text, policy)
}
