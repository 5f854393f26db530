//! Framing and outbound queue limits.

use serde::Deserialize;

use super::defaults::{default_max_frame_len, default_sendq_capacity};

/// Per-connection resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted frame payload in bytes (default: 65536).
    /// A length prefix above this is a malformed frame and ends the session.
    #[serde(default = "default_max_frame_len")]
    pub max_frame_len: usize,
    /// Outbound queue depth per client (default: 256).
    /// A client whose queue is full when a broadcast arrives is disconnected.
    #[serde(default = "default_sendq_capacity")]
    pub sendq_capacity: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_frame_len: default_max_frame_len(),
            sendq_capacity: default_sendq_capacity(),
        }
    }
}
