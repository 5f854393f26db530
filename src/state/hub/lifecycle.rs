//! Client lifecycle: attach, handshake progress, teardown.

use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::Hub;
use crate::error::ChannelError;
use crate::state::client::{ClientRecord, Outbound};
use crate::state::machine::SessionStage;
use crate::state::uid::ClientId;

/// What remains of a client after teardown, for logging.
#[derive(Debug, Clone)]
pub struct DepartedClient {
    pub nickname: String,
    pub channel: Option<String>,
    pub connected_at: DateTime<Utc>,
}

impl Hub {
    /// Register a freshly accepted connection in the `Connecting` stage.
    pub fn attach(
        &self,
        id: ClientId,
        addr: SocketAddr,
        outbound: Outbound,
        disconnect: CancellationToken,
    ) {
        let record = ClientRecord::new(id, addr, outbound, disconnect);
        self.inner.lock().clients.insert(id, record);
        debug!(client = %id, %addr, "Client attached");
    }

    /// Mark `/connect` as done.
    pub fn complete_connect(&self, id: ClientId) -> Result<(), ChannelError> {
        let mut state = self.inner.lock();
        let record = state
            .clients
            .get_mut(&id)
            .ok_or(ChannelError::UnknownClient(id))?;
        record.connected = true;
        Ok(())
    }

    /// Set the display name, returning the previous one.
    ///
    /// With `policy.unique_nicknames` the name must not be held by any other
    /// connected client.
    pub fn set_nickname(&self, id: ClientId, nick: &str) -> Result<String, ChannelError> {
        let mut state = self.inner.lock();

        if self.policy.unique_nicknames
            && state
                .clients
                .iter()
                .any(|(other, c)| *other != id && c.nickname == nick)
        {
            return Err(ChannelError::NicknameInUse(nick.to_string()));
        }

        let record = state
            .clients
            .get_mut(&id)
            .ok_or(ChannelError::UnknownClient(id))?;
        record.named = true;
        Ok(std::mem::replace(&mut record.nickname, nick.to_string()))
    }

    /// Current handshake stage; `Disconnected` once the record is gone.
    pub fn stage(&self, id: ClientId) -> SessionStage {
        self.inner
            .lock()
            .clients
            .get(&id)
            .map(ClientRecord::stage)
            .unwrap_or(SessionStage::Disconnected)
    }

    pub fn nickname(&self, id: ClientId) -> Option<String> {
        self.inner.lock().clients.get(&id).map(|c| c.nickname.clone())
    }

    /// Remove a client and its channel membership.
    ///
    /// Returns `None` if the client was already gone, so teardown happens at
    /// most once no matter how many paths reach it.
    pub fn deregister(&self, id: ClientId) -> Option<DepartedClient> {
        let mut state = self.inner.lock();
        let channel = state.leave(id);
        let record = state.clients.remove(&id)?;
        Some(DepartedClient {
            nickname: record.nickname,
            channel,
            connected_at: record.connected_at,
        })
    }

    /// Ask a client's connection task to shut down.
    ///
    /// Returns false if the client is unknown.
    pub fn request_disconnect(&self, id: ClientId, reason: &str) -> bool {
        let token = self
            .inner
            .lock()
            .clients
            .get(&id)
            .map(|c| c.disconnect.clone());

        match token {
            Some(token) => {
                if !token.is_cancelled() {
                    warn!(client = %id, reason, "Disconnect requested");
                    token.cancel();
                }
                true
            }
            None => false,
        }
    }
}
