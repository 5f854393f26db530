//! Chat content handler.

use super::super::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use huddle_proto::Command;
use tracing::debug;

/// Handler for any payload that is not a recognized command.
///
/// Broadcasts `"<nick>: <text>"` to the sender's channel. Muted senders get an
/// explicit notice instead. Blank payloads are dropped.
pub struct ChatHandler;

#[async_trait]
impl Handler for ChatHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let text = cmd.arg().unwrap_or_default();
        if text.trim().is_empty() {
            debug!(client = %ctx.id, "Ignoring blank chat payload");
            return Ok(());
        }

        let report = ctx.hub.submit_chat(ctx.id, text)?;
        debug!(
            client = %ctx.id,
            delivered = report.delivered,
            dropped = report.dropped,
            "Chat broadcast"
        );
        Ok(())
    }
}
