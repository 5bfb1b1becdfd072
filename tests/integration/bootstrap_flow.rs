//! End-to-end bootstrap flow tests

use openclaw_bootstrap::bootstrap;
use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::{seed_bundled_skill, test_config};

#[test]
fn test_first_run_creates_everything() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    seed_bundled_skill(&config);

    let summary = bootstrap::run(&config).unwrap();

    assert!(config.state_dir.is_dir());
    assert!(config.workspace_dir.is_dir());
    assert!(config.skills_dir().is_dir());
    assert!(config.state_skill().join("SKILL.md").exists());
    assert!(config.mcporter_config.exists());

    assert!(summary.applied.contains(&"mcporter skill".to_string()));
    assert!(summary.applied.contains(&"connector config".to_string()));
    // No openclaw.json was present, so no patch
    assert!(!summary.patched_host_config);
    assert!(summary.skipped.contains(&"host config patch".to_string()));
}

#[test]
fn test_second_run_skips_everything() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    seed_bundled_skill(&config);

    bootstrap::run(&config).unwrap();
    let connector_before = fs::read_to_string(&config.mcporter_config).unwrap();

    let summary = bootstrap::run(&config).unwrap();

    assert!(summary.applied.is_empty());
    assert!(summary.skipped.contains(&"mcporter skill".to_string()));
    assert!(summary.skipped.contains(&"connector config".to_string()));
    assert_eq!(
        fs::read_to_string(&config.mcporter_config).unwrap(),
        connector_before
    );
}

#[test]
fn test_run_without_bundled_skills() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    // No image skills directory at all: the copy step must skip, not fail

    let summary = bootstrap::run(&config).unwrap();

    assert!(summary.skipped.contains(&"mcporter skill".to_string()));
    assert!(!config.state_skill().exists());
    assert!(config.mcporter_config.exists());
}

#[test]
fn test_existing_state_skill_left_untouched() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    seed_bundled_skill(&config);

    // A user-modified copy of the skill already lives in state
    fs::create_dir_all(config.state_skill()).unwrap();
    fs::write(config.state_skill().join("SKILL.md"), "user edits\n").unwrap();

    let summary = bootstrap::run(&config).unwrap();

    assert!(summary.skipped.contains(&"mcporter skill".to_string()));
    assert_eq!(
        fs::read_to_string(config.state_skill().join("SKILL.md")).unwrap(),
        "user edits\n"
    );
}

#[test]
fn test_bootstrap_with_host_config_present() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::create_dir_all(&config.state_dir).unwrap();
    fs::write(
        config.openclaw_config(),
        r#"{"channels": {"discord": {"enabled": true}}}"#,
    )
    .unwrap();

    let summary = bootstrap::run(&config).unwrap();

    assert!(summary.patched_host_config);
    assert!(summary.applied.contains(&"host config patch".to_string()));

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.openclaw_config()).unwrap()).unwrap();
    // Existing channel preserved, required channel merged in
    assert_eq!(merged["channels"]["discord"]["enabled"], true);
    assert_eq!(merged["channels"]["telegram"]["enabled"], true);
    assert_eq!(
        merged["agents"]["defaults"]["workspace"],
        config.workspace_dir.display().to_string()
    );
}
