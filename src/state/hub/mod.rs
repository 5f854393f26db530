//! The Hub: single authoritative registry of clients and channels.
//!
//! All shared state sits behind one `parking_lot::Mutex` so that operations
//! touching both tables (join, kick, teardown) are atomic. The lock is never
//! held across an `.await`: fan-out snapshots the member queues under the lock
//! and delivers after releasing it.
//!
//! Operations are split by concern:
//! - [`lifecycle`]: attach, handshake progress, teardown, forced disconnect
//! - [`registry`]: channel get-or-create, leave, members, owner lookup
//! - [`moderation`]: owner-checked kick/mute/unmute/whois
//! - [`broadcast`]: chat submission and fan-out delivery

mod broadcast;
mod lifecycle;
mod moderation;
mod registry;

pub use moderation::ModerationAction;
pub use registry::JoinOutcome;

use parking_lot::Mutex;
use std::collections::HashMap;

use super::channel::Channel;
use super::client::ClientRecord;
use super::uid::{ClientId, ClientIdGenerator};
use crate::config::PolicyConfig;

/// Shared chat state.
pub struct Hub {
    inner: Mutex<HubState>,
    id_gen: ClientIdGenerator,
    policy: PolicyConfig,
}

#[derive(Default)]
struct HubState {
    clients: HashMap<ClientId, ClientRecord>,
    channels: HashMap<String, Channel>,
}

impl Hub {
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            inner: Mutex::new(HubState::default()),
            id_gen: ClientIdGenerator::new(),
            policy,
        }
    }

    /// Allocate the id for a freshly accepted connection.
    pub fn next_client_id(&self) -> ClientId {
        self.id_gen.next()
    }

    pub fn client_count(&self) -> usize {
        self.inner.lock().clients.len()
    }

    pub fn channel_count(&self) -> usize {
        self.inner.lock().channels.len()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::net::SocketAddr;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    /// A client attached to a hub, with the receiving end of its queue.
    pub struct TestPeer {
        pub id: ClientId,
        pub rx: mpsc::Receiver<String>,
        pub tx: mpsc::Sender<String>,
        pub disconnect: CancellationToken,
    }

    impl TestPeer {
        /// Everything queued so far.
        pub fn drain(&mut self) -> Vec<String> {
            let mut lines = Vec::new();
            while let Ok(line) = self.rx.try_recv() {
                lines.push(line);
            }
            lines
        }
    }

    pub fn hub() -> Hub {
        Hub::new(PolicyConfig::default())
    }

    pub fn attach(hub: &Hub, capacity: usize) -> TestPeer {
        let id = hub.next_client_id();
        let (tx, rx) = mpsc::channel(capacity);
        let disconnect = CancellationToken::new();
        let addr: SocketAddr = format!("127.0.0.{}:40000", id.get())
            .parse()
            .expect("valid test address");
        hub.attach(id, addr, tx.clone(), disconnect.clone());
        TestPeer {
            id,
            rx,
            tx,
            disconnect,
        }
    }

    /// Attach a client and walk it through `/connect` and `/nickname`.
    pub fn named(hub: &Hub, nick: &str) -> TestPeer {
        let peer = attach(hub, 32);
        hub.complete_connect(peer.id).expect("connect");
        hub.set_nickname(peer.id, nick).expect("nickname");
        peer
    }

    /// Named client that has joined `channel`.
    pub fn joined(hub: &Hub, nick: &str, channel: &str) -> TestPeer {
        let peer = named(hub, nick);
        hub.get_or_create(channel, peer.id).expect("join");
        peer
    }
}
