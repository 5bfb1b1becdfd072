//! Bootstrap driver.
//!
//! Runs the idempotent startup sequence: ensure directories, copy the bundled
//! skill, seed the connector config, patch the host config. Sequential and
//! run-to-completion; the first error aborts the run, leaving state in
//! whatever condition the last completed step produced.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::{fsops, mcporter, openclaw};
use tracing::{debug, info};

/// What the run did: which idempotent steps applied and which were already
/// satisfied.
#[derive(Debug, Clone, Default)]
pub struct BootstrapSummary {
    /// Steps that created or wrote something this run.
    pub applied: Vec<String>,

    /// Steps that were already satisfied and left untouched.
    pub skipped: Vec<String>,

    /// Whether the host config existed and was rewritten with the merged tree.
    pub patched_host_config: bool,
}

impl BootstrapSummary {
    fn record(&mut self, step: &str, applied: bool) {
        if applied {
            self.applied.push(step.to_string());
        } else {
            self.skipped.push(step.to_string());
        }
    }
}

/// Execute the bootstrap sequence. Every step is idempotent; re-running
/// against already-bootstrapped state reports all steps as skipped and leaves
/// every file byte-for-byte unchanged except the host config, which is
/// rewritten with an identical merged tree.
pub fn run(config: &BootstrapConfig) -> Result<BootstrapSummary, BootstrapError> {
    info!("Bootstrapping OpenClaw state at {}", config.state_dir.display());
    let mut summary = BootstrapSummary::default();

    fsops::ensure_dir(&config.state_dir)?;
    fsops::ensure_dir(&config.workspace_dir)?;
    fsops::ensure_dir(&config.skills_dir())?;
    debug!("State, workspace, and skills directories ensured");

    let copied = fsops::copy_dir_if_missing(&config.bundled_skill(), &config.state_skill())?;
    summary.record("mcporter skill", copied);

    let seeded = mcporter::seed(config)?;
    summary.record("connector config", seeded);

    let patched = openclaw::patch_host_config(config)?;
    summary.patched_host_config = patched;
    if patched {
        summary.applied.push("host config patch".to_string());
    } else {
        summary.skipped.push("host config patch".to_string());
    }

    info!(
        "Bootstrap complete: {} applied, {} skipped",
        summary.applied.len(),
        summary.skipped.len()
    );
    Ok(summary)
}
