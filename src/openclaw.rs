//! Host config patching.
//!
//! Deep-merges the required settings into `openclaw.json` when that file
//! already exists. A missing file is a no-op: the host application writes its
//! own config on first run, and the bootstrap only enforces overrides on top
//! of one that is already there.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::merge::deep_merge;
use serde_json::{json, Value};
use std::fs;
use tracing::{debug, info};

/// The fixed patch enforced on every bootstrap run: workspace default for
/// agents, Telegram channel and plugin enabled, and the bundled skills
/// directory on the skill load path.
pub fn required_patch(config: &BootstrapConfig) -> Value {
    json!({
        "agents": {
            "defaults": {
                "workspace": config.workspace_dir.display().to_string()
            }
        },
        "channels": {
            "telegram": { "enabled": true }
        },
        "plugins": {
            "entries": {
                "telegram": { "enabled": true }
            }
        },
        "skills": {
            "load": {
                "extraDirs": [config.image_skills_dir.display().to_string()]
            }
        }
    })
}

/// Merge the required patch into the host config file, overwriting it in
/// place. Absent file: no-op, returns `false`. Unparseable file: fatal error,
/// nothing written. Returns whether the file was rewritten.
pub fn patch_host_config(config: &BootstrapConfig) -> Result<bool, BootstrapError> {
    let path = config.openclaw_config();
    if !path.exists() {
        debug!("Host config absent, skipping patch: {}", path.display());
        return Ok(false);
    }

    let raw = fs::read_to_string(&path).map_err(|e| BootstrapError::io(&path, e))?;
    let current: Value = serde_json::from_str(&raw).map_err(|e| BootstrapError::Parse {
        path: path.clone(),
        source: e,
    })?;

    let merged = deep_merge(&current, &required_patch(config));
    let rendered = serde_json::to_string_pretty(&merged)
        .map_err(|e| BootstrapError::Config(format!("Failed to render host config: {}", e)))?;
    fs::write(&path, rendered).map_err(|e| BootstrapError::io(&path, e))?;

    info!("Patched host config at {}", path.display());
    Ok(true)
}
