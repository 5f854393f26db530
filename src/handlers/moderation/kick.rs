//! /kick handler.

use super::super::{Context, Handler, HandlerResult};
use crate::state::ModerationAction;
use async_trait::async_trait;
use huddle_proto::{Command, response};
use tracing::info;

/// Handler for `/kick <nick>`.
///
/// The target leaves the channel but keeps its connection and nickname.
pub struct KickHandler;

#[async_trait]
impl Handler for KickHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let nick = cmd.arg().unwrap_or_default();
        let outcome = ctx.hub.moderate(ctx.id, nick, ModerationAction::Kick)?;

        info!(
            client = %ctx.id,
            target = %outcome.target,
            channel = %outcome.channel,
            "Kicked member"
        );

        ctx.hub.deliver(
            outcome.target,
            &outcome.target_outbound,
            response::you_were_kicked(&outcome.channel),
        );
        ctx.reply(response::kicked(&outcome.target_nick)).await
    }
}
