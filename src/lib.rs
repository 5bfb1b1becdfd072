//! OpenClaw Bootstrap
//!
//! Idempotent startup preparation of the OpenClaw persisted state directory:
//! ensures required directories exist, seeds the MCP connector config if
//! absent, copies the bundled mcporter skill on first run, and deep-merges
//! required settings into an existing `openclaw.json`.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod mcporter;
pub mod merge;
pub mod openclaw;
