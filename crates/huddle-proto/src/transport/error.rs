//! Transport error types.

use thiserror::Error;

use crate::error::ProtocolError;

/// Errors that can occur when reading from a transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportReadError {
    /// An I/O error occurred.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A protocol error occurred.
    #[error("transport protocol error: {0}")]
    Protocol(ProtocolError),
}

impl From<ProtocolError> for TransportReadError {
    fn from(err: ProtocolError) -> Self {
        // The codec surfaces socket failures as ProtocolError::Io; keep them
        // classified as I/O so callers can tell a dead peer from a bad frame.
        match err {
            ProtocolError::Io(io) => Self::Io(io),
            other => Self::Protocol(other),
        }
    }
}

impl TransportReadError {
    /// Whether the peer sent a frame that violates the framing rules.
    pub fn is_malformed_frame(&self) -> bool {
        matches!(self, Self::Protocol(p) if p.is_malformed_frame())
    }
}
