//! Scene configuration file handling
//!
//! Scenes are described by a `ringview.toml`. Every section is optional;
//! a missing file means the built-in scene.

use anyhow::{Context, Result};
use ringview_3d::config::CONFIG_FILE;
use ringview_3d::{SceneConfig, SceneError};
use std::path::{Path, PathBuf};

/// Load the scene configuration.
///
/// With no explicit path, `ringview.toml` in the current directory is used
/// when present, otherwise the defaults.
pub fn load_scene_config(path: Option<&Path>) -> Result<SceneConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if !local.exists() {
                tracing::debug!("no {} found, using built-in scene", CONFIG_FILE);
                return Ok(SceneConfig::default());
            }
            local
        }
    };

    let config = SceneConfig::load(&path).map_err(|err| {
        let action = if matches!(err, SceneError::Io(_)) {
            "read"
        } else {
            "parse"
        };
        anyhow::Error::new(err).context(format!("Failed to {} {}", action, path.display()))
    })?;
    tracing::debug!("loaded scene configuration from {}", path.display());
    Ok(config)
}

/// Write the default scene configuration to `path`
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }
    SceneConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
