//! Config initialization command

use anyhow::{Context, Result};
use heartbeat_core::HeartConfig;
use std::fs;
use std::path::Path;

pub fn run(path: &str) -> Result<()> {
    let target = Path::new(path);

    if target.exists() {
        anyhow::bail!("'{}' already exists", path);
    }

    let content = HeartConfig::default()
        .to_toml_string()
        .context("Failed to serialize default config")?;
    fs::write(target, content).context(format!("Failed to write {}", path))?;

    println!("Created {}", path);
    Ok(())
}
