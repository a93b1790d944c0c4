use crate::clock::{Duration, TimeOfDay};
use crate::error::{DelayError, PresetKind};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Name used in the "will finish at" message
    pub appliance: String,
    pub presets: PresetsConfig,
    pub refresh: RefreshConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appliance: "Dishwasher".to_string(),
            presets: PresetsConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TargetPreset {
    pub label: String,
    pub time: TimeOfDay,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RunPreset {
    pub label: String,
    pub minutes: Duration,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PresetsConfig {
    /// Index into `targets` selected at startup
    pub default_target: usize,
    /// Index into `run_times` selected at startup, also the fallback for bad custom input
    pub default_run_time: usize,
    pub targets: Vec<TargetPreset>,
    pub run_times: Vec<RunPreset>,
}

fn default_targets() -> Vec<TargetPreset> {
    [("7:00 AM", 7), ("12:00 PM", 12), ("5:00 PM", 17)]
        .into_iter()
        .map(|(label, hour)| TargetPreset {
            label: label.to_string(),
            time: TimeOfDay::from_hm(hour, 0),
        })
        .collect()
}

fn default_run_times() -> Vec<RunPreset> {
    [("3:50", 230), ("3:22", 202), ("2:20", 140)]
        .into_iter()
        .map(|(label, minutes)| RunPreset {
            label: label.to_string(),
            minutes: Duration::from_minutes(minutes),
        })
        .collect()
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            default_target: 0,
            default_run_time: 0,
            targets: default_targets(),
            run_times: default_run_times(),
        }
    }
}

impl PresetsConfig {
    pub fn target(&self, index: usize) -> Result<&TargetPreset, DelayError> {
        self.targets.get(index).ok_or(DelayError::PresetOutOfRange {
            kind: PresetKind::Target,
            index,
            len: self.targets.len(),
        })
    }

    pub fn run_time(&self, index: usize) -> Result<&RunPreset, DelayError> {
        self.run_times.get(index).ok_or(DelayError::PresetOutOfRange {
            kind: PresetKind::RunTime,
            index,
            len: self.run_times.len(),
        })
    }

    /// Duration used when a custom run time is blank or unreadable.
    pub fn fallback_run_duration(&self) -> Duration {
        self.run_times
            .get(self.default_run_time)
            .or_else(|| self.run_times.first())
            .map(|p| p.minutes)
            .unwrap_or(Duration::ZERO)
    }

    pub fn validate(&self) -> Result<(), DelayError> {
        if self.targets.is_empty() {
            return Err(DelayError::EmptyPresets {
                kind: PresetKind::Target,
            });
        }
        if self.run_times.is_empty() {
            return Err(DelayError::EmptyPresets {
                kind: PresetKind::RunTime,
            });
        }
        self.target(self.default_target)?;
        self.run_time(self.default_run_time)?;

        for preset in &self.run_times {
            if i64::from(preset.minutes.minutes()) >= crate::clock::MINUTES_PER_DAY {
                tracing::warn!(
                    label = %preset.label,
                    minutes = preset.minutes.minutes(),
                    "Run time preset is a day or longer and can never fit before a target"
                );
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RefreshConfig {
    /// Seconds between recomputations in watch mode
    pub interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

impl RefreshConfig {
    pub fn validate(&self) -> Result<(), DelayError> {
        if self.interval_secs == 0 {
            return Err(DelayError::InvalidConfig(
                "refresh.interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<(), DelayError> {
        self.presets.validate()?;
        self.refresh.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.as_ref().display()))?;

    Ok(config)
}

/// Load the effective configuration, falling back to built-in defaults when
/// no config file exists.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match crate::platform::find_config_file(explicit)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config");
            load_from_path(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
