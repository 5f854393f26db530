//! Error types for the huddle protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The length prefix announced a payload above the configured limit.
    #[error("frame too long: {actual} bytes (limit: {limit})")]
    FrameTooLong {
        /// Announced payload length.
        actual: usize,
        /// Maximum payload length accepted.
        limit: usize,
    },

    /// The payload does not fit in a 4-byte length prefix.
    #[error("payload of {0} bytes cannot be framed")]
    PayloadTooLarge(usize),
}

impl ProtocolError {
    /// Whether the error is a framing violation rather than an I/O failure.
    pub fn is_malformed_frame(&self) -> bool {
        matches!(self, Self::FrameTooLong { .. } | Self::PayloadTooLarge(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_too_long_display() {
        let err = ProtocolError::FrameTooLong {
            actual: 70_000,
            limit: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "frame too long: 70000 bytes (limit: 65536)"
        );
        assert!(err.is_malformed_frame());
    }

    #[test]
    fn io_is_not_malformed() {
        let err: ProtocolError =
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(!err.is_malformed_frame());
        assert_eq!(err.to_string(), "io error: eof");
    }
}
