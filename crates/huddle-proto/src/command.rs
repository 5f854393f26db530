//! Command grammar.
//!
//! A payload whose first whitespace-delimited token exactly matches one of the
//! known command tokens becomes that command, with the trimmed remainder of the
//! payload as its argument. Everything else, including unknown slash-prefixed
//! tokens, is chat content.

/// A classified client payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/connect`
    Connect,
    /// `/nickname <name>`
    Nickname(String),
    /// `/join <channel>`
    Join(String),
    /// `/quit`
    Quit,
    /// `/ping`
    Ping,
    /// `/kick <name>`
    Kick(String),
    /// `/mute <name>`
    Mute(String),
    /// `/unmute <name>`
    Unmute(String),
    /// `/whois <name>`
    Whois(String),
    /// Anything that is not a recognized command.
    Chat(String),
}

/// Every recognized command token, in grammar order.
pub const COMMAND_TOKENS: &[&str] = &[
    "/connect",
    "/nickname",
    "/join",
    "/quit",
    "/ping",
    "/kick",
    "/mute",
    "/unmute",
    "/whois",
];

/// Handler-table key used for chat content.
pub const CHAT: &str = "chat";

impl Command {
    /// Classify a raw payload.
    pub fn parse(payload: &str) -> Self {
        let (token, rest) = payload
            .split_once(char::is_whitespace)
            .unwrap_or((payload, ""));
        let arg = || rest.trim().to_string();

        match token {
            "/connect" => Self::Connect,
            "/nickname" => Self::Nickname(arg()),
            "/join" => Self::Join(arg()),
            "/quit" => Self::Quit,
            "/ping" => Self::Ping,
            "/kick" => Self::Kick(arg()),
            "/mute" => Self::Mute(arg()),
            "/unmute" => Self::Unmute(arg()),
            "/whois" => Self::Whois(arg()),
            _ => Self::Chat(payload.to_string()),
        }
    }

    /// Stable name of the command, used as the dispatch key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connect => "/connect",
            Self::Nickname(_) => "/nickname",
            Self::Join(_) => "/join",
            Self::Quit => "/quit",
            Self::Ping => "/ping",
            Self::Kick(_) => "/kick",
            Self::Mute(_) => "/mute",
            Self::Unmute(_) => "/unmute",
            Self::Whois(_) => "/whois",
            Self::Chat(_) => CHAT,
        }
    }

    /// The argument carried by the command, or the chat text.
    pub fn arg(&self) -> Option<&str> {
        match self {
            Self::Nickname(a)
            | Self::Join(a)
            | Self::Kick(a)
            | Self::Mute(a)
            | Self::Unmute(a)
            | Self::Whois(a)
            | Self::Chat(a) => Some(a),
            Self::Connect | Self::Quit | Self::Ping => None,
        }
    }

    /// `/ping` and `/quit` are valid in every live session stage.
    pub fn is_meta(&self) -> bool {
        matches!(self, Self::Ping | Self::Quit)
    }

    /// Owner-only channel commands.
    pub fn is_moderation(&self) -> bool {
        matches!(
            self,
            Self::Kick(_) | Self::Mute(_) | Self::Unmute(_) | Self::Whois(_)
        )
    }
}

impl std::str::FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
