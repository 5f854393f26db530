//! Channel registry operations.

use tracing::{debug, info};

use super::{Hub, HubState};
use crate::error::ChannelError;
use crate::state::channel::Channel;
use crate::state::uid::ClientId;

/// Result of a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The channel did not exist; the requester now owns it.
    Created,
    /// The channel already existed.
    Exists,
}

impl HubState {
    /// Drop `id` from its current channel, clearing its mute flag.
    ///
    /// Returns the channel left, if any. Channels are never removed.
    pub(super) fn leave(&mut self, id: ClientId) -> Option<String> {
        let record = self.clients.get_mut(&id)?;
        let name = record.channel.take()?;
        record.muted = false;

        if let Some(channel) = self.channels.get_mut(&name) {
            channel.remove(id);
        }
        Some(name)
    }

    /// First member of `channel` whose nickname is `nick`.
    pub(super) fn resolve_member(&self, channel: &str, nick: &str) -> Option<ClientId> {
        let channel = self.channels.get(channel)?;
        channel.members().iter().copied().find(|member| {
            self.clients
                .get(member)
                .is_some_and(|record| record.nickname == nick)
        })
    }
}

impl Hub {
    /// Join `name`, creating it with `requester` as owner if needed.
    ///
    /// Membership of any previous channel is dropped first; a client belongs
    /// to at most one channel.
    pub fn get_or_create(&self, name: &str, requester: ClientId) -> Result<JoinOutcome, ChannelError> {
        let mut state = self.inner.lock();

        let current = state
            .clients
            .get(&requester)
            .ok_or(ChannelError::UnknownClient(requester))?
            .channel
            .clone();
        if current.as_deref() == Some(name) {
            return Ok(JoinOutcome::Exists);
        }

        if let Some(previous) = state.leave(requester) {
            debug!(client = %requester, channel = %previous, "Left previous channel");
        }

        let outcome = match state.channels.get_mut(name) {
            Some(channel) => {
                channel.insert(requester);
                JoinOutcome::Exists
            }
            None => {
                let mut channel = Channel::new(requester);
                channel.insert(requester);
                info!(
                    channel = %name,
                    owner = %requester,
                    created_at = %channel.created_at.to_rfc3339(),
                    "Channel created"
                );
                state.channels.insert(name.to_string(), channel);
                JoinOutcome::Created
            }
        };

        if let Some(record) = state.clients.get_mut(&requester) {
            record.channel = Some(name.to_string());
        }
        Ok(outcome)
    }

    /// Live snapshot of the channel's members in join order.
    pub fn members(&self, channel: &str) -> Vec<ClientId> {
        self.inner
            .lock()
            .channels
            .get(channel)
            .map(|c| c.members().to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Hub {
    /// Leave the current channel; no-op if not a member.
    pub fn leave(&self, id: ClientId) -> Option<String> {
        self.inner.lock().leave(id)
    }

    /// Owner recorded when the channel was created.
    pub fn owner_of(&self, channel: &str) -> Option<ClientId> {
        self.inner.lock().channels.get(channel).map(Channel::owner)
    }

    /// Resolve `nick` among the members of `channel` only.
    pub fn resolve_member(&self, channel: &str, nick: &str) -> Option<ClientId> {
        self.inner.lock().resolve_member(channel, nick)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{hub, joined, named};
    use super::*;
    use crate::state::SessionStage;

    #[test]
    fn first_join_creates_and_owns() {
        let hub = hub();
        let alice = named(&hub, "Alice");

        assert_eq!(hub.get_or_create("lobby", alice.id), Ok(JoinOutcome::Created));
        assert_eq!(hub.owner_of("lobby"), Some(alice.id));
        assert_eq!(hub.members("lobby"), vec![alice.id]);
        assert_eq!(
            hub.stage(alice.id),
            SessionStage::Joined {
                channel: "lobby".into()
            }
        );
    }

    #[test]
    fn second_join_keeps_owner() {
        let hub = hub();
        let alice = joined(&hub, "Alice", "lobby");
        let bob = named(&hub, "Bob");

        assert_eq!(hub.get_or_create("lobby", bob.id), Ok(JoinOutcome::Exists));
        assert_eq!(hub.owner_of("lobby"), Some(alice.id));
        assert_eq!(hub.members("lobby"), vec![alice.id, bob.id]);
    }

    #[test]
    fn switching_channels_moves_membership() {
        let hub = hub();
        let alice = joined(&hub, "Alice", "lobby");

        assert_eq!(hub.get_or_create("den", alice.id), Ok(JoinOutcome::Created));
        assert!(hub.members("lobby").is_empty());
        assert_eq!(hub.members("den"), vec![alice.id]);
        // Empty channels persist with their owner.
        assert_eq!(hub.owner_of("lobby"), Some(alice.id));
        assert_eq!(hub.channel_count(), 2);
    }

    #[test]
    fn rejoining_same_channel_is_stable() {
        let hub = hub();
        let alice = joined(&hub, "Alice", "lobby");
        let bob = joined(&hub, "Bob", "lobby");

        assert_eq!(hub.get_or_create("lobby", alice.id), Ok(JoinOutcome::Exists));
        assert_eq!(hub.members("lobby"), vec![alice.id, bob.id]);
    }

    #[test]
    fn leave_is_noop_without_channel() {
        let hub = hub();
        let alice = named(&hub, "Alice");
        assert_eq!(hub.leave(alice.id), None);

        hub.get_or_create("lobby", alice.id).unwrap();
        assert_eq!(hub.leave(alice.id).as_deref(), Some("lobby"));
        assert_eq!(hub.leave(alice.id), None);
        assert_eq!(hub.stage(alice.id), SessionStage::Registered { named: true });
    }

    #[test]
    fn resolution_is_scoped_to_channel() {
        let hub = hub();
        let _alice = joined(&hub, "Alice", "lobby");
        let bob_elsewhere = joined(&hub, "Bob", "den");

        assert_eq!(hub.resolve_member("lobby", "Bob"), None);
        assert_eq!(hub.resolve_member("den", "Bob"), Some(bob_elsewhere.id));
        assert_eq!(hub.resolve_member("nowhere", "Bob"), None);
    }

    #[test]
    fn resolution_picks_first_member_on_duplicates() {
        let hub = hub();
        let first = joined(&hub, "Bob", "lobby");
        let _second = joined(&hub, "Bob", "lobby");
        assert_eq!(hub.resolve_member("lobby", "Bob"), Some(first.id));
    }
}
