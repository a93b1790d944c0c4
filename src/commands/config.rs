use crate::config::{Config, save_to_path};
use crate::platform;
use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str.trim_end());
    Ok(())
}

/// Look up a dotted key such as `refresh.interval_secs` or `presets.targets.0.label`.
pub fn lookup(key: &str, config: &Config) -> Result<serde_json::Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        let next = match current {
            serde_json::Value::Array(items) => {
                part.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            other => other.get(part),
        };
        current = next.with_context(|| format!("Key not found: {}", key))?;
    }

    Ok(current.clone())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}

pub fn path(explicit: Option<&Path>) -> Result<()> {
    let path = platform::config_write_path(explicit)?;
    let status = if path.exists() { "" } else { " (not created)" };
    println!("{}{}", path.display(), status);
    Ok(())
}

pub fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = platform::config_write_path(explicit)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    save_to_path(&Config::default(), &path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
