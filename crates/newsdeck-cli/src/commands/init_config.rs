use anyhow::{bail, Result};

use newsdeck_core::DeckConfig;

pub fn run(force: bool) -> Result<()> {
    let path = DeckConfig::config_path();

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    DeckConfig::default().save_to(&path)?;

    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
