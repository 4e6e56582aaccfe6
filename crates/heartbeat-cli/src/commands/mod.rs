//! CLI command implementations

pub mod info;
pub mod init;
pub mod render;

use anyhow::{Context, Result};
use heartbeat_core::HeartConfig;
use std::path::Path;

/// Resolve layered config, then let a CLI seed win over everything else
pub(crate) fn load_config(path: Option<&str>, seed: Option<u64>) -> Result<HeartConfig> {
    let mut config = HeartConfig::load(path.map(Path::new)).context("Failed to load config")?;
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}
