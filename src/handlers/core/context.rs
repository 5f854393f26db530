//! Command handler context and core types.

use async_trait::async_trait;
use huddle_proto::Command;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{HandlerError, HandlerResult};
use crate::state::{ClientId, Hub, Outbound, SessionStage};

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The client's id.
    pub id: ClientId,
    /// Shared chat state.
    pub hub: &'a Arc<Hub>,
    /// Sender for outgoing lines to this client.
    pub sender: &'a Outbound,
    /// Remote address of the client.
    pub remote_addr: SocketAddr,
    /// Cancelled once the session must end.
    pub disconnect: &'a CancellationToken,
}

impl<'a> Context<'a> {
    pub fn new(
        id: ClientId,
        hub: &'a Arc<Hub>,
        sender: &'a Outbound,
        remote_addr: SocketAddr,
        disconnect: &'a CancellationToken,
    ) -> Self {
        Self {
            id,
            hub,
            sender,
            remote_addr,
            disconnect,
        }
    }

    /// Queue a reply line for this client.
    ///
    /// Waits for room in the outbound queue, but gives up with
    /// [`HandlerError::Cancelled`] once the session has been told to end. A
    /// full queue whose writer is stuck must not keep the session alive.
    pub async fn reply(&self, line: impl Into<String>) -> HandlerResult {
        let line = line.into();
        tokio::select! {
            biased;
            _ = self.disconnect.cancelled() => Err(HandlerError::Cancelled),
            sent = self.sender.send(line) => {
                sent?;
                Ok(())
            }
        }
    }

    /// Current handshake stage of this client.
    pub fn stage(&self) -> SessionStage {
        self.hub.stage(self.id)
    }

    /// Current nickname, or the placeholder if the record is gone.
    pub fn nick(&self) -> String {
        self.hub
            .nickname(self.id)
            .unwrap_or_else(|| self.id.placeholder_nick())
    }
}

/// Trait implemented by all command handlers.
///
/// The registry only calls a handler once the session stage admits the
/// command, so handlers never re-check handshake order.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle a classified command.
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult;
}
