//! Connector config seeding.
//!
//! Writes the default `mcporter.json` describing the remote MCP endpoint,
//! only when no config exists yet. The Authorization header carries a literal
//! env-reference placeholder; mcporter expands it at runtime, so the real
//! token never lands on disk.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::fsops;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Placeholder token reference written verbatim into the connector config.
pub const TOKEN_PLACEHOLDER: &str = "Bearer $env:SENPI_MCP_TOKEN";

/// Description of the senpi connector entry.
pub const SENPI_DESCRIPTION: &str = "Senpi Hyperliquid MCP (remote HTTP)";

/// Default connector config tree for the given MCP endpoint.
pub fn default_config(mcp_url: &str) -> Value {
    json!({
        "mcpServers": {
            "senpi": {
                "baseUrl": mcp_url,
                "description": SENPI_DESCRIPTION,
                "headers": {
                    "Authorization": TOKEN_PLACEHOLDER
                }
            }
        },
        "imports": []
    })
}

/// Seed the connector config if absent. First-writer-wins: an existing file
/// is left byte-for-byte unchanged. Returns whether a write occurred.
pub fn seed(config: &BootstrapConfig) -> Result<bool, BootstrapError> {
    let path = &config.mcporter_config;
    if let Some(parent) = path.parent() {
        fsops::ensure_dir(parent)?;
    }

    let rendered = serde_json::to_string_pretty(&default_config(&config.mcp_url))
        .map_err(|e| BootstrapError::Config(format!("Failed to render connector config: {}", e)))?;

    let written = fsops::write_if_missing(path, &rendered)?;
    if written {
        info!("Seeded connector config at {}", path.display());
    } else {
        debug!("Connector config already present at {}", path.display());
    }
    Ok(written)
}
