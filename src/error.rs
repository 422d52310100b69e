//! Crate-wide error type
//!
//! Only startup can fail. Everything that happens inside a tick is normal
//! control flow; the one terminal condition (player caught) is reported as
//! `GamePhase::GameOver`, not as an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    /// No controller is attached
    #[error("no input devices detected, connect a controller")]
    NoInputDevice,

    /// The requested controller index does not exist
    #[error("invalid input device {index}: only {available} device(s) available")]
    DeviceOutOfRange { index: usize, available: usize },

    /// Configuration values that break an invariant
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
