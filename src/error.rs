//! Unified error handling for huddled.
//!
//! Handler errors are recovered inside the session that raised them: most map
//! to a reply line, the rest end that session only.

use huddle_proto::response;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::state::{ClientId, Guidance};

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("command not valid in this stage: {0:?}")]
    ProtocolViolation(Guidance),

    #[error("not the channel owner")]
    AuthorizationDenied,

    #[error("no such member: {0:?}")]
    NotFound(String),

    #[error("empty nickname")]
    EmptyNickname,

    #[error("empty channel name")]
    EmptyChannelName,

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    #[error("muted on channel {0}")]
    Muted(String),

    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<String>),

    #[error("client quit")]
    Quit,

    #[error("session is being torn down")]
    Cancelled,

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProtocolViolation(_) => "protocol_violation",
            Self::AuthorizationDenied => "authorization_denied",
            Self::NotFound(_) => "not_found",
            Self::EmptyNickname => "empty_nickname",
            Self::EmptyChannelName => "empty_channel_name",
            Self::NicknameInUse(_) => "nickname_in_use",
            Self::Muted(_) => "muted",
            Self::Send(_) => "send_error",
            Self::Quit => "quit",
            Self::Cancelled => "cancelled",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Convert to the reply line the client should see.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply
    /// (send failures, quit, cancellation, internal errors).
    pub fn to_reply(&self) -> Option<String> {
        let reply = match self {
            Self::ProtocolViolation(guidance) => guidance.text().to_string(),
            Self::AuthorizationDenied => response::NOT_OWNER.to_string(),
            Self::NotFound(_) => response::USER_NOT_FOUND.to_string(),
            Self::EmptyNickname => response::EMPTY_NICKNAME.to_string(),
            Self::EmptyChannelName => response::EMPTY_CHANNEL.to_string(),
            Self::NicknameInUse(nick) => response::nickname_in_use(nick),
            Self::Muted(channel) => response::muted_notice(channel),

            Self::Send(_) => return None,
            Self::Quit => return None,
            Self::Cancelled => return None,
            Self::Internal(_) => return None,
        };
        Some(reply)
    }

    /// Whether the session must end after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Send(_) | Self::Quit | Self::Cancelled | Self::Internal(_)
        )
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Channel Errors (hub operations)
// ============================================================================

/// Hub operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("client {0} is not registered with the hub")]
    UnknownClient(ClientId),

    #[error("not on a channel")]
    NotInChannel,

    #[error("not the owner of channel {0}")]
    NotOwner(String),

    #[error("user {0:?} is not on that channel")]
    UserNotFound(String),

    #[error("nickname {0} is already in use")]
    NicknameInUse(String),

    #[error("muted on channel {0}")]
    Muted(String),
}

impl From<ChannelError> for HandlerError {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::UnknownClient(id) => {
                HandlerError::Internal(format!("client {id} has no hub record"))
            }
            ChannelError::NotInChannel => HandlerError::ProtocolViolation(Guidance::NeedJoin),
            ChannelError::NotOwner(_) => HandlerError::AuthorizationDenied,
            ChannelError::UserNotFound(nick) => HandlerError::NotFound(nick),
            ChannelError::NicknameInUse(nick) => HandlerError::NicknameInUse(nick),
            ChannelError::Muted(channel) => HandlerError::Muted(channel),
        }
    }
}
