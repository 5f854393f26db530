//! /whois handler.

use super::super::{Context, Handler, HandlerResult};
use crate::state::ModerationAction;
use async_trait::async_trait;
use huddle_proto::{Command, response};

/// Handler for `/whois <nick>`: reports the member's peer IP.
pub struct WhoisHandler;

#[async_trait]
impl Handler for WhoisHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let nick = cmd.arg().unwrap_or_default();
        let outcome = ctx.hub.moderate(ctx.id, nick, ModerationAction::Whois)?;
        ctx.reply(response::whois(&outcome.target_nick, outcome.target_addr.ip()))
            .await
    }
}
