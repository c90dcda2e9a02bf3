//! Error types for the swarm core.

use thiserror::Error;

/// Everything that can go wrong while bringing a swarm up.
///
/// Once a [`Surface`](crate::Surface) exists, stepping and drawing never fail.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// The host could not provide a 2D drawing surface. Fatal, no fallback.
    #[error("Drawing surface unavailable: {0}")]
    CapabilityUnavailable(String),

    /// The host already started a swarm; only one runs per page.
    #[error("Swarm already initialized")]
    AlreadyInitialized,

    /// Viewport dimensions must be finite and positive.
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwarmError {
    /// Shorthand for a [`SwarmError::CapabilityUnavailable`] with a message.
    pub fn unavailable(what: impl Into<String>) -> Self {
        SwarmError::CapabilityUnavailable(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_message_names_the_missing_piece() {
        let err = SwarmError::unavailable("2d context");
        assert_eq!(err.to_string(), "Drawing surface unavailable: 2d context");
    }

    #[test]
    fn second_init_message() {
        assert_eq!(
            SwarmError::AlreadyInitialized.to_string(),
            "Swarm already initialized"
        );
    }

    #[test]
    fn viewport_message_includes_dimensions() {
        let err = SwarmError::InvalidViewport { width: 0.0, height: 600.0 };
        assert_eq!(err.to_string(), "Invalid viewport: 0x600");
    }
}
