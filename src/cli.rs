//! CLI surface: clap definitions, summary presentation, and error mapping.
//! No orchestration; the binary dispatches straight to the bootstrap driver.

use crate::bootstrap::BootstrapSummary;
use crate::config::{
    BootstrapConfig, DEFAULT_MCP_URL, DEFAULT_STATE_DIR, DEFAULT_WORKSPACE_DIR, IMAGE_SKILLS_DIR,
};
use crate::error::BootstrapError;
use clap::Parser;
use std::path::PathBuf;

/// OpenClaw bootstrap - idempotent startup preparation of the state directory
#[derive(Parser)]
#[command(name = "openclaw-bootstrap")]
#[command(about = "Idempotent startup bootstrap for the OpenClaw state directory")]
pub struct Cli {
    /// Persisted state directory
    #[arg(long, env = "OPENCLAW_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: PathBuf,

    /// Agent workspace directory
    #[arg(long, env = "OPENCLAW_WORKSPACE_DIR", default_value = DEFAULT_WORKSPACE_DIR)]
    pub workspace_dir: PathBuf,

    /// Connector config path (defaults to <state-dir>/config/mcporter.json)
    #[arg(long, env = "MCPORTER_CONFIG")]
    pub mcporter_config: Option<PathBuf>,

    /// Remote MCP endpoint written into the connector config
    #[arg(long, env = "SENPI_MCP_URL", default_value = DEFAULT_MCP_URL)]
    pub mcp_url: String,

    /// Directory of skills bundled into the image
    #[arg(long, default_value = IMAGE_SKILLS_DIR)]
    pub image_skills_dir: PathBuf,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

impl Cli {
    /// Resolve CLI arguments (env vars folded in by clap) into the driver
    /// configuration.
    pub fn bootstrap_config(&self) -> BootstrapConfig {
        BootstrapConfig::new(
            self.state_dir.clone(),
            self.workspace_dir.clone(),
            self.mcporter_config.clone(),
            self.mcp_url.clone(),
            self.image_skills_dir.clone(),
        )
    }
}

/// Map domain errors to a string for CLI output.
/// Keeps the binary thin; extend with stable categories if needed.
pub fn map_error(e: &BootstrapError) -> String {
    e.to_string()
}

/// Render a bootstrap summary for terminal output.
pub fn format_summary_text(summary: &BootstrapSummary) -> String {
    let mut lines = Vec::new();
    if summary.applied.is_empty() {
        lines.push("Bootstrap complete: nothing to do".to_string());
    } else {
        lines.push("Bootstrap complete".to_string());
        for step in &summary.applied {
            lines.push(format!("  applied: {}", step));
        }
    }
    for step in &summary.skipped {
        lines.push(format!("  skipped: {}", step));
    }
    lines.join("\n")
}
