//! Telemetry utilities for command timing and span construction.

use std::time::Instant;
use tracing::trace;

/// Guard for timing command execution.
///
/// Logs the command latency at trace level when dropped.
pub struct CommandTimer {
    command: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let elapsed_us = self.start.elapsed().as_micros() as u64;
        trace!(command = self.command, elapsed_us, "Command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use crate::state::ClientId;
    use std::net::SocketAddr;
    use tracing::{Span, info_span};

    /// Create a span for a client connection.
    pub fn connection(id: ClientId, addr: SocketAddr) -> Span {
        info_span!("connection", client = id.get(), addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, id: ClientId) -> Span {
        info_span!("command", name = %name, client = id.get())
    }
}
