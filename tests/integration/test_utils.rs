//! Shared helpers for bootstrap integration tests

use openclaw_bootstrap::config::BootstrapConfig;
use std::fs;
use std::path::Path;

/// Build a bootstrap config entirely rooted under a test directory.
pub fn test_config(root: &Path) -> BootstrapConfig {
    BootstrapConfig::new(
        root.join("state"),
        root.join("workspace"),
        None,
        "https://mcp.example.test/mcp".to_string(),
        root.join("image-skills"),
    )
}

/// Lay down a bundled mcporter skill under the image skills directory.
pub fn seed_bundled_skill(config: &BootstrapConfig) {
    let skill = config.bundled_skill();
    fs::create_dir_all(skill.join("scripts")).unwrap();
    fs::write(skill.join("SKILL.md"), "# mcporter skill\n").unwrap();
    fs::write(skill.join("scripts").join("run.sh"), "#!/bin/sh\n").unwrap();
}
