//! Bootstrap Configuration
//!
//! Paths and endpoints for the bootstrap run, resolved once at process start
//! from environment variables (or CLI flags) and passed by reference into the
//! driver. No ambient global state.

use std::path::PathBuf;

/// Persisted OpenClaw state directory (volume mounted in the container).
pub const DEFAULT_STATE_DIR: &str = "/data/.openclaw";

/// Agent workspace directory.
pub const DEFAULT_WORKSPACE_DIR: &str = "/data/workspace";

/// Remote MCP endpoint used when `SENPI_MCP_URL` is unset.
pub const DEFAULT_MCP_URL: &str = "https://mcp.dev.senpi.ai/mcp";

/// Skills bundled into the container image, copied into state on first run.
pub const IMAGE_SKILLS_DIR: &str = "/opt/openclaw-skills";

/// Host configuration file name under the state directory.
pub const OPENCLAW_CONFIG_FILE: &str = "openclaw.json";

/// Name of the bundled skill that fronts the MCP connector.
pub const MCPORTER_SKILL: &str = "mcporter";

/// Resolved configuration for one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Persisted state directory root.
    pub state_dir: PathBuf,

    /// Agent workspace directory.
    pub workspace_dir: PathBuf,

    /// Connector config file path.
    pub mcporter_config: PathBuf,

    /// Remote MCP endpoint written into the connector config.
    pub mcp_url: String,

    /// Directory of skills bundled into the image.
    pub image_skills_dir: PathBuf,
}

impl BootstrapConfig {
    /// Build a config from explicit parts. A missing connector-config path
    /// resolves to `<state_dir>/config/mcporter.json`.
    pub fn new(
        state_dir: PathBuf,
        workspace_dir: PathBuf,
        mcporter_config: Option<PathBuf>,
        mcp_url: String,
        image_skills_dir: PathBuf,
    ) -> Self {
        let mcporter_config = mcporter_config
            .unwrap_or_else(|| state_dir.join("config").join("mcporter.json"));
        Self {
            state_dir,
            workspace_dir,
            mcporter_config,
            mcp_url,
            image_skills_dir,
        }
    }

    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let state_dir = env_path("OPENCLAW_STATE_DIR", DEFAULT_STATE_DIR);
        let workspace_dir = env_path("OPENCLAW_WORKSPACE_DIR", DEFAULT_WORKSPACE_DIR);
        let mcporter_config = std::env::var_os("MCPORTER_CONFIG").map(PathBuf::from);
        let mcp_url = std::env::var("SENPI_MCP_URL").unwrap_or_else(|_| DEFAULT_MCP_URL.to_string());
        Self::new(
            state_dir,
            workspace_dir,
            mcporter_config,
            mcp_url,
            PathBuf::from(IMAGE_SKILLS_DIR),
        )
    }

    /// Host configuration file path.
    pub fn openclaw_config(&self) -> PathBuf {
        self.state_dir.join(OPENCLAW_CONFIG_FILE)
    }

    /// Skills directory under the persisted state.
    pub fn skills_dir(&self) -> PathBuf {
        self.state_dir.join("skills")
    }

    /// Bundled mcporter skill in the image.
    pub fn bundled_skill(&self) -> PathBuf {
        self.image_skills_dir.join(MCPORTER_SKILL)
    }

    /// Destination of the mcporter skill under the persisted state.
    pub fn state_skill(&self) -> PathBuf {
        self.skills_dir().join(MCPORTER_SKILL)
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new(
            PathBuf::from(DEFAULT_STATE_DIR),
            PathBuf::from(DEFAULT_WORKSPACE_DIR),
            None,
            DEFAULT_MCP_URL.to_string(),
            PathBuf::from(IMAGE_SKILLS_DIR),
        )
    }
}
