//! Per-client record held by the hub.

use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::machine::SessionStage;
use super::uid::ClientId;

/// Handle to a client's bounded outbound queue.
pub type Outbound = mpsc::Sender<String>;

/// Everything the server knows about one connected client.
#[derive(Debug)]
pub struct ClientRecord {
    pub nickname: String,
    /// Peer address recorded at accept time.
    pub addr: SocketAddr,
    /// `/connect` completed.
    pub connected: bool,
    /// `/nickname` completed at least once.
    pub named: bool,
    /// Channel the client is a member of, if any.
    pub channel: Option<String>,
    /// Server-side mute flag for the current channel membership.
    pub muted: bool,
    pub outbound: Outbound,
    /// Cancelling ends the owning connection task.
    pub disconnect: CancellationToken,
    pub connected_at: DateTime<Utc>,
}

impl ClientRecord {
    pub fn new(
        id: ClientId,
        addr: SocketAddr,
        outbound: Outbound,
        disconnect: CancellationToken,
    ) -> Self {
        Self {
            nickname: id.placeholder_nick(),
            addr,
            connected: false,
            named: false,
            channel: None,
            muted: false,
            outbound,
            disconnect,
            connected_at: Utc::now(),
        }
    }

    pub fn stage(&self) -> SessionStage {
        match (&self.channel, self.connected) {
            (Some(channel), _) => SessionStage::Joined {
                channel: channel.clone(),
            },
            (None, true) => SessionStage::Registered { named: self.named },
            (None, false) => SessionStage::Connecting,
        }
    }
}
