//! /nickname handler.

use super::super::{Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use huddle_proto::{Command, response};
use tracing::info;

/// Handler for `/nickname <name>`.
///
/// The name is the trimmed remainder of the payload and may contain spaces.
/// Renaming is allowed in every stage after `/connect`.
pub struct NicknameHandler;

#[async_trait]
impl Handler for NicknameHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let nick = cmd.arg().unwrap_or_default();
        if nick.is_empty() {
            return Err(HandlerError::EmptyNickname);
        }

        let previous = ctx.hub.set_nickname(ctx.id, nick)?;
        info!(client = %ctx.id, old = %previous, new = %nick, "Nickname set");

        ctx.reply(response::nickname_set(nick)).await
    }
}
