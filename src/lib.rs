pub mod calculator;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod platform;
pub mod presenter;
pub mod selection;
pub mod ticker;

use clap::ValueEnum;
use serde::Serialize;

pub use calculator::{ScheduleRequest, ScheduleResult, compute_schedule};
pub use clock::{Duration, TimeOfDay};
pub use format::{format_clock12, format_duration};

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
