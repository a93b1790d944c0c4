//! What the user has picked: a target time and a run duration, each either a
//! preset or a custom value.
//!
//! `Selection` is a plain value. Every transition consumes the old selection
//! and returns a new one, so a renderer always sees one consistent snapshot.

use crate::clock::{Duration, TimeOfDay};
use crate::config::PresetsConfig;
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TargetChoice {
    Preset(usize),
    Custom(TimeOfDay),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RunChoice {
    Preset(usize),
    Custom(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub target: TargetChoice,
    pub run: RunChoice,
}

impl Selection {
    pub fn initial(presets: &PresetsConfig) -> Self {
        Self {
            target: TargetChoice::Preset(presets.default_target),
            run: RunChoice::Preset(presets.default_run_time),
        }
    }

    pub fn select_target_preset(self, presets: &PresetsConfig, index: usize) -> Result<Self> {
        presets.target(index)?;
        Ok(Self {
            target: TargetChoice::Preset(index),
            ..self
        })
    }

    pub fn select_custom_target(self, time: TimeOfDay) -> Self {
        Self {
            target: TargetChoice::Custom(time),
            ..self
        }
    }

    pub fn select_run_preset(self, presets: &PresetsConfig, index: usize) -> Result<Self> {
        presets.run_time(index)?;
        Ok(Self {
            run: RunChoice::Preset(index),
            ..self
        })
    }

    pub fn select_custom_run(self, duration: Duration) -> Self {
        Self {
            run: RunChoice::Custom(duration),
            ..self
        }
    }

    pub fn is_custom_target(&self) -> bool {
        matches!(self.target, TargetChoice::Custom(_))
    }

    pub fn is_custom_run(&self) -> bool {
        matches!(self.run, RunChoice::Custom(_))
    }

    /// Turn the selection into concrete calculator inputs.
    pub fn resolve(&self, presets: &PresetsConfig) -> Result<(TimeOfDay, Duration)> {
        let target = match self.target {
            TargetChoice::Preset(index) => presets.target(index)?.time,
            TargetChoice::Custom(time) => time,
        };
        let run = match self.run {
            RunChoice::Preset(index) => presets.run_time(index)?.minutes,
            RunChoice::Custom(duration) => duration,
        };
        Ok((target, run))
    }
}
