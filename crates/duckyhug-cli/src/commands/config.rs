use std::path::Path;

use anyhow::Result;

use duckyhug_core::AppConfig;

pub fn run(config: &AppConfig, override_path: Option<&Path>, write: bool) -> Result<()> {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);

    if write {
        config.save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let state = if path.exists() { "" } else { " (not found, using defaults)" };

    println!("# Config file: {}{}", path.display(), state);
    println!("# Log file:    {}\n", config.log_path().display());
    print!("{}", config.to_toml()?);

    Ok(())
}
