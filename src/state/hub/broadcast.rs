//! Broadcast fan-out.
//!
//! Delivery never blocks: each member's queue gets a `try_send`. A closed
//! queue belongs to a session that is already tearing down and is skipped. A
//! full queue means the member cannot keep up; it is asked to disconnect and
//! its own session does the cleanup. Neither case stops delivery to the
//! remaining members.

use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use super::{Hub, HubState};
use crate::error::ChannelError;
use crate::state::client::Outbound;
use crate::state::uid::ClientId;
use huddle_proto::response;

/// Outcome of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub delivered: usize,
    pub dropped: usize,
}

impl HubState {
    /// Outbound handles of `channel`'s members, in member order.
    fn member_outbounds(&self, channel: &str) -> Vec<(ClientId, Outbound)> {
        self.channels
            .get(channel)
            .map(|ch| {
                ch.members()
                    .iter()
                    .filter_map(|id| self.clients.get(id).map(|c| (*id, c.outbound.clone())))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Hub {
    /// Deliver `line` to every current member of `channel`, in member order.
    pub fn broadcast(&self, channel: &str, line: &str) -> FanoutReport {
        let targets = self.inner.lock().member_outbounds(channel);
        self.fan_out(&targets, line)
    }

    /// Broadcast chat from `sender` to its channel as `"<nick>: <text>"`.
    ///
    /// Refused unless the sender is in a channel and not muted.
    pub fn submit_chat(&self, sender: ClientId, text: &str) -> Result<FanoutReport, ChannelError> {
        let (channel, line) = {
            let state = self.inner.lock();
            let record = state
                .clients
                .get(&sender)
                .ok_or(ChannelError::UnknownClient(sender))?;
            let channel = record.channel.clone().ok_or(ChannelError::NotInChannel)?;
            if record.muted {
                return Err(ChannelError::Muted(channel));
            }
            let line = response::chat_line(&record.nickname, text);
            (channel, line)
        };

        Ok(self.broadcast(&channel, &line))
    }

    /// Queue a single line for `id` without waiting.
    ///
    /// Returns true if the line was queued.
    pub fn deliver(&self, id: ClientId, outbound: &Outbound, line: String) -> bool {
        match outbound.try_send(line) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(client = %id, "Outbound queue full, dropping slow client");
                self.request_disconnect(id, "SendQ exceeded");
                false
            }
            Err(TrySendError::Closed(_)) => {
                debug!(client = %id, "Outbound queue closed, skipping");
                false
            }
        }
    }

    fn fan_out(&self, targets: &[(ClientId, Outbound)], line: &str) -> FanoutReport {
        let mut report = FanoutReport::default();
        for (id, outbound) in targets {
            if self.deliver(*id, outbound, line.to_string()) {
                report.delivered += 1;
            } else {
                report.dropped += 1;
            }
        }
        report
    }
}
