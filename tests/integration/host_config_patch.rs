//! Host config patching tests

use openclaw_bootstrap::error::BootstrapError;
use openclaw_bootstrap::openclaw;
use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::test_config;

#[test]
fn test_missing_host_config_is_noop() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::create_dir_all(&config.state_dir).unwrap();

    assert!(!openclaw::patch_host_config(&config).unwrap());
    assert!(!config.openclaw_config().exists());
}

#[test]
fn test_patch_merges_into_existing_config() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::create_dir_all(&config.state_dir).unwrap();
    fs::write(
        config.openclaw_config(),
        r#"{
  "agents": { "defaults": { "model": "claude" } },
  "channels": { "telegram": { "enabled": false, "token": "abc" } },
  "skills": { "load": { "extraDirs": ["/old/skills"] } }
}"#,
    )
    .unwrap();

    assert!(openclaw::patch_host_config(&config).unwrap());

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.openclaw_config()).unwrap()).unwrap();

    // Sibling keys survive, patched leaves win
    assert_eq!(merged["agents"]["defaults"]["model"], "claude");
    assert_eq!(
        merged["agents"]["defaults"]["workspace"],
        config.workspace_dir.display().to_string()
    );
    assert_eq!(merged["channels"]["telegram"]["enabled"], true);
    assert_eq!(merged["channels"]["telegram"]["token"], "abc");
    // Arrays replace, never merge
    assert_eq!(
        merged["skills"]["load"]["extraDirs"],
        serde_json::json!([config.image_skills_dir.display().to_string()])
    );
}

#[test]
fn test_patch_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::create_dir_all(&config.state_dir).unwrap();
    fs::write(config.openclaw_config(), r#"{"plugins": {"entries": {}}}"#).unwrap();

    openclaw::patch_host_config(&config).unwrap();
    let first = fs::read_to_string(config.openclaw_config()).unwrap();
    openclaw::patch_host_config(&config).unwrap();
    let second = fs::read_to_string(config.openclaw_config()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_malformed_host_config_is_fatal_and_untouched() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    fs::create_dir_all(&config.state_dir).unwrap();
    let malformed = r#"{"channels": "#;
    fs::write(config.openclaw_config(), malformed).unwrap();

    let err = openclaw::patch_host_config(&config).unwrap_err();
    assert!(matches!(err, BootstrapError::Parse { .. }));
    // Nothing was written over the broken file
    assert_eq!(
        fs::read_to_string(config.openclaw_config()).unwrap(),
        malformed
    );
}
