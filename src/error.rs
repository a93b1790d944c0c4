use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelayError {
    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("No {kind} preset at index {index} ({len} available)")]
    PresetOutOfRange {
        kind: PresetKind,
        index: usize,
        len: usize,
    },

    #[error("At least one {kind} preset is required")]
    EmptyPresets { kind: PresetKind },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Which of the two preset lists an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Target,
    RunTime,
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetKind::Target => write!(f, "target time"),
            PresetKind::RunTime => write!(f, "run time"),
        }
    }
}

pub type Result<T> = std::result::Result<T, DelayError>;
