use crate::OutputFormat;
use crate::config::Config;
use anyhow::{Context, Result};

pub fn list(config: &Config, format: OutputFormat) -> Result<()> {
    let presets = &config.presets;

    if let OutputFormat::Json = format {
        let json = serde_json::to_string_pretty(presets).context("Failed to serialize presets")?;
        println!("{}", json);
        return Ok(());
    }

    let marker = |is_default: bool| if is_default { " (default)" } else { "" };

    println!("Target times:");
    for (i, preset) in presets.targets.iter().enumerate() {
        println!(
            "  [{}] {} at {}{}",
            i,
            preset.label,
            preset.time,
            marker(i == presets.default_target)
        );
    }

    println!("Run times:");
    for (i, preset) in presets.run_times.iter().enumerate() {
        println!(
            "  [{}] {} = {}{}",
            i,
            preset.label,
            preset.minutes,
            marker(i == presets.default_run_time)
        );
    }

    Ok(())
}
