//! Client identifier generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque, stable identifier of one accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(u64);

impl ClientId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Nickname a client carries until it picks its own.
    pub fn placeholder_nick(self) -> String {
        format!("Client {}", self.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generates monotonically increasing client ids, starting at 1.
pub struct ClientIdGenerator {
    counter: AtomicU64,
}

impl ClientIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next unique id.
    pub fn next(&self) -> ClientId {
        ClientId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ClientIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl From<u64> for ClientId {
    fn from(raw: u64) -> Self {
        ClientId(raw)
    }
}
