//! Session handshake state machine.
//!
//! ```text
//! ┌────────────┐ /connect ┌──────────────────┐ /nickname ┌─────────────────┐ /join ┌────────┐
//! │ Connecting ├─────────►│ Registered       ├──────────►│ Registered      ├──────►│ Joined │
//! └────────────┘          │ (named: false)   │           │ (named: true)   │◄──────┤        │
//!                         └──────────────────┘           └─────────────────┘ /kick └────────┘
//! ```
//!
//! Stages are never skipped. `/ping` and `/quit` are admitted in every live
//! stage and never cause a transition. `Disconnected` is terminal: the client
//! record is gone from the hub.
//!
//! The stage is derived from the client record rather than stored, so a kick
//! issued from another session moves the target back to `Registered` just by
//! clearing its channel.

use huddle_proto::{Command, response};

/// Handshake progress of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStage {
    Connecting,
    Registered { named: bool },
    Joined { channel: String },
    Disconnected,
}

/// Why a command was refused in the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    NeedConnect,
    AlreadyConnected,
    NeedNickname,
    NeedJoin,
}

impl Guidance {
    /// Reply text sent to the client.
    pub fn text(self) -> &'static str {
        match self {
            Self::NeedConnect => response::NEED_CONNECT,
            Self::AlreadyConnected => response::ALREADY_CONNECTED,
            Self::NeedNickname => response::NEED_NICKNAME,
            Self::NeedJoin => response::NEED_JOIN,
        }
    }
}

impl SessionStage {
    /// Check whether `command` may run in this stage.
    pub fn admits(&self, command: &Command) -> Result<(), Guidance> {
        if command.is_meta() {
            return match self {
                Self::Disconnected => Err(Guidance::NeedConnect),
                _ => Ok(()),
            };
        }

        match (self, command) {
            (Self::Connecting, Command::Connect) => Ok(()),
            (Self::Connecting, _) => Err(Guidance::NeedConnect),

            (_, Command::Connect) if self.is_live() => Err(Guidance::AlreadyConnected),

            (Self::Registered { .. }, Command::Nickname(_)) => Ok(()),
            (Self::Registered { named: false }, _) => Err(Guidance::NeedNickname),
            (Self::Registered { named: true }, Command::Join(_)) => Ok(()),
            (Self::Registered { named: true }, _) => Err(Guidance::NeedJoin),

            (Self::Joined { .. }, _) => Ok(()),

            (Self::Disconnected, _) => Err(Guidance::NeedConnect),
        }
    }

    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Disconnected)
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Registered { named: false } => "registered",
            Self::Registered { named: true } => "named",
            Self::Joined { .. } => "joined",
            Self::Disconnected => "disconnected",
        }
    }
}
