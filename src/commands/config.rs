use anyhow::{Context, Result};
use paws_core::PawsConfig;

pub fn run(cfg: &PawsConfig, init: bool) -> Result<()> {
    let path = PawsConfig::config_path()?;

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            PawsConfig::create_default_config(&path)
                .with_context(|| format!("Failed to write config file at {}", path.display()))?;
            println!("Created {}", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg).context("Failed to serialize config")?);

    Ok(())
}
