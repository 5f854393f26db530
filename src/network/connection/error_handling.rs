//! Error handling utilities for connection management.
//!
//! Classifies transport read errors so the session loop can log them at the
//! right level before tearing down.

use huddle_proto::transport::TransportReadError;

/// Classification of transport read errors.
pub(super) enum ReadErrorAction {
    /// The peer sent a frame that cannot be decoded; the session ends.
    MalformedFrame { error_msg: String },
    /// I/O error - connection is broken, just log and disconnect
    IoError,
}

/// Classify a transport read error into an actionable category.
pub(super) fn classify_read_error(e: &TransportReadError) -> ReadErrorAction {
    match e {
        TransportReadError::Protocol(proto_err) => ReadErrorAction::MalformedFrame {
            error_msg: proto_err.to_string(),
        },
        TransportReadError::Io(_) => ReadErrorAction::IoError,
        // Handle future variants gracefully
        _ => ReadErrorAction::IoError,
    }
}
