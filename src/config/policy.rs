//! Session policy switches.

use serde::Deserialize;

/// Policy knobs that change observable session behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    /// Reject `/nickname` when another connected client already uses the name.
    /// Off by default: nicknames are display names and may repeat.
    #[serde(default)]
    pub unique_nicknames: bool,
}
