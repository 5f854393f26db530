//! Owner-only channel commands.
//!
//! Authority check, target resolution and the state change happen under a
//! single lock acquisition, so a denied or unresolved request mutates nothing
//! and a granted one cannot race with membership changes.

use std::net::SocketAddr;

use super::Hub;
use crate::error::ChannelError;
use crate::state::client::Outbound;
use crate::state::uid::ClientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick,
    Mute,
    Unmute,
    Whois,
}

impl ModerationAction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Whois => "whois",
        }
    }
}

/// What a granted moderation request touched.
#[derive(Debug, Clone)]
pub struct ModerationOutcome {
    pub channel: String,
    pub target: ClientId,
    pub target_nick: String,
    pub target_addr: SocketAddr,
    /// Queue for notifying the target after the lock is released.
    pub target_outbound: Outbound,
}

impl Hub {
    /// Apply `action` to the member of the requester's channel named `nick`.
    pub fn moderate(
        &self,
        requester: ClientId,
        nick: &str,
        action: ModerationAction,
    ) -> Result<ModerationOutcome, ChannelError> {
        let mut state = self.inner.lock();

        let channel = state
            .clients
            .get(&requester)
            .ok_or(ChannelError::UnknownClient(requester))?
            .channel
            .clone()
            .ok_or(ChannelError::NotInChannel)?;

        let owner = state.channels.get(&channel).map(|c| c.owner());
        if owner != Some(requester) {
            return Err(ChannelError::NotOwner(channel));
        }

        let target = state
            .resolve_member(&channel, nick)
            .ok_or_else(|| ChannelError::UserNotFound(nick.to_string()))?;

        match action {
            ModerationAction::Kick => {
                state.leave(target);
            }
            ModerationAction::Mute | ModerationAction::Unmute => {
                if let Some(record) = state.clients.get_mut(&target) {
                    record.muted = action == ModerationAction::Mute;
                }
            }
            ModerationAction::Whois => {}
        }

        let record = state
            .clients
            .get(&target)
            .ok_or(ChannelError::UnknownClient(target))?;

        Ok(ModerationOutcome {
            channel,
            target,
            target_nick: record.nickname.clone(),
            target_addr: record.addr,
            target_outbound: record.outbound.clone(),
        })
    }
}

#[cfg(test)]
impl Hub {
    /// Whether `id` is currently muted.
    pub fn is_muted(&self, id: ClientId) -> bool {
        self.inner.lock().clients.get(&id).is_some_and(|c| c.muted)
    }
}
