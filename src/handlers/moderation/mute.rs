//! /mute and /unmute handlers.

use super::super::{Context, Handler, HandlerResult};
use crate::state::ModerationAction;
use async_trait::async_trait;
use huddle_proto::{Command, response};
use tracing::info;

/// Handler for `/mute <nick>` and `/unmute <nick>`.
///
/// Both set the target's mute flag to a fixed value, so repeating either is
/// harmless.
pub struct MuteHandler {
    mute: bool,
}

impl MuteHandler {
    pub fn mute() -> Self {
        Self { mute: true }
    }

    pub fn unmute() -> Self {
        Self { mute: false }
    }

    fn action(&self) -> ModerationAction {
        if self.mute {
            ModerationAction::Mute
        } else {
            ModerationAction::Unmute
        }
    }
}

#[async_trait]
impl Handler for MuteHandler {
    async fn handle(&self, ctx: &mut Context<'_>, cmd: &Command) -> HandlerResult {
        let nick = cmd.arg().unwrap_or_default();
        let action = self.action();
        let outcome = ctx.hub.moderate(ctx.id, nick, action)?;

        info!(
            client = %ctx.id,
            target = %outcome.target,
            channel = %outcome.channel,
            action = action.name(),
            "Moderation applied"
        );

        let (notice, confirmation) = if self.mute {
            (
                response::you_were_muted(&outcome.channel),
                response::muted(&outcome.target_nick),
            )
        } else {
            (
                response::you_were_unmuted(&outcome.channel),
                response::unmuted(&outcome.target_nick),
            )
        };

        ctx.hub.deliver(outcome.target, &outcome.target_outbound, notice);
        ctx.reply(confirmation).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HandlerError;
    use crate::handlers::Registry;
    use crate::handlers::core::registry::tests::run;
    use crate::state::test_support::{hub, joined};
    use huddle_proto::response;
    use std::sync::Arc;

    #[tokio::test]
    async fn muted_member_is_silenced_until_unmuted() {
        let hub = Arc::new(hub());
        let registry = Registry::new();
        let mut alice = joined(&hub, "Alice", "lobby");
        let mut bob = joined(&hub, "Bob", "lobby");

        run(&registry, &hub, &alice, "/mute Bob").await.unwrap();
        assert_eq!(alice.drain(), vec![response::muted("Bob")]);
        assert_eq!(bob.drain(), vec![response::you_were_muted("lobby")]);

        let err = run(&registry, &hub, &bob, "hello").await.unwrap_err();
        assert!(matches!(err, HandlerError::Muted(_)));
        assert_eq!(bob.drain(), vec![response::muted_notice("lobby")]);
        assert!(alice.drain().is_empty());

        run(&registry, &hub, &alice, "/unmute Bob").await.unwrap();
        assert_eq!(alice.drain(), vec![response::unmuted("Bob")]);
        assert_eq!(bob.drain(), vec![response::you_were_unmuted("lobby")]);

        run(&registry, &hub, &bob, "hello again").await.unwrap();
        assert_eq!(alice.drain(), vec!["Bob: hello again"]);
        assert_eq!(bob.drain(), vec!["Bob: hello again"]);
    }

    #[tokio::test]
    async fn owner_may_mute_themselves() {
        let hub = Arc::new(hub());
        let registry = Registry::new();
        let mut alice = joined(&hub, "Alice", "lobby");

        run(&registry, &hub, &alice, "/mute Alice").await.unwrap();
        assert_eq!(
            alice.drain(),
            vec![response::you_were_muted("lobby"), response::muted("Alice")]
        );
        assert!(hub.is_muted(alice.id));
    }

    #[tokio::test]
    async fn member_cannot_unmute() {
        let hub = Arc::new(hub());
        let registry = Registry::new();
        let mut alice = joined(&hub, "Alice", "lobby");
        let mut bob = joined(&hub, "Bob", "lobby");
        run(&registry, &hub, &alice, "/mute Bob").await.unwrap();
        alice.drain();
        bob.drain();

        let err = run(&registry, &hub, &bob, "/unmute Bob").await.unwrap_err();
        assert!(matches!(err, HandlerError::AuthorizationDenied));
        assert_eq!(bob.drain(), vec![response::NOT_OWNER]);
        assert!(hub.is_muted(bob.id));
    }
}
