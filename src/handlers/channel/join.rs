//! /join handler.

use super::super::{Context, Handler, HandlerError, HandlerResult};
use crate::state::JoinOutcome;
use async_trait::async_trait;
use huddle_proto::{Command, response};
use tracing::info;

/// Handler for `/join <channel>`.
///
/// Creates the channel with the requester as owner if it does not exist, and
/// moves the requester out of any channel it was in.
pub struct JoinHandler;

#[async_trait]
impl Handler for JoinHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let channel = cmd.arg().unwrap_or_default();
        if channel.is_empty() {
            return Err(HandlerError::EmptyChannelName);
        }

        let reply = match ctx.hub.get_or_create(channel, ctx.id)? {
            JoinOutcome::Created => response::channel_created(channel),
            JoinOutcome::Exists => response::channel_joined(channel),
        };
        info!(
            client = %ctx.id,
            nick = %ctx.nick(),
            %channel,
            members = ctx.hub.members(channel).len(),
            "Joined channel"
        );

        ctx.reply(reply).await
    }
}
