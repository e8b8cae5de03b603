//! View pipeline error types

use thiserror::Error;

/// Errors raised by view parts and the host that drives them
#[derive(Error, Debug)]
pub enum ViewError {
    /// `prepare_render` was called on a part that never asked to render.
    ///
    /// This means the host scheduler is out of sync with the part's own
    /// dirty tracking. It is fatal for the frame: nothing may be committed.
    #[error("Render protocol violation: {part} was prepared without requesting a render")]
    ProtocolViolation {
        /// Name of the offending view part
        part: &'static str,
    },

    /// Editor options could not be parsed
    #[error("Invalid editor options: {0}")]
    InvalidOptions(String),

    /// Failed to read an options file
    #[error("Failed to read options: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewError {
    /// Whether this error means the host scheduler itself is broken
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, ViewError::ProtocolViolation { .. })
    }
}

impl From<toml::de::Error> for ViewError {
    fn from(err: toml::de::Error) -> Self {
        ViewError::InvalidOptions(err.to_string())
    }
}

/// Result type for view operations
pub type Result<T> = std::result::Result<T, ViewError>;
