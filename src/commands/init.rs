//! `exemplar init`: write a default configuration file.

use crate::config::{ExemplarConfig, CONFIG_FILE_NAME};
use anyhow::{bail, Result};
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new(CONFIG_FILE_NAME), force)
}

pub fn init_config_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(path, ExemplarConfig::default_toml())?;
    println!("Created {}", path.display());
    Ok(())
}
