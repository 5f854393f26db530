//! Server reply texts.
//!
//! Fixed replies are constants; replies that carry a name are built by the
//! functions below. Clients match on the stable prefixes (for example
//! `"You were kicked"`), so the wording is part of the protocol.

/// Reply to `/ping`.
pub const PONG: &str = "pong";

/// Farewell sent before the server closes a session on `/quit`.
pub const FAREWELL: &str = "Goodbye.";

/// Reply to `/connect`.
pub const CONNECTED: &str =
    "Connected to the server. You can now register choosing a nickname with /nickname.";

/// Guidance while the session still waits for `/connect`.
pub const NEED_CONNECT: &str = "Please enter the /connect command to establish the connection.";

/// Guidance for a repeated `/connect`.
pub const ALREADY_CONNECTED: &str = "You are already connected.";

/// Guidance while the session still waits for `/nickname`.
pub const NEED_NICKNAME: &str = "Please enter the /nickname command to register.";

/// Guidance while the session is not a member of any channel.
pub const NEED_JOIN: &str = "Please join a channel with /join <channel>.";

/// Rejection of an empty `/nickname` argument.
pub const EMPTY_NICKNAME: &str = "Nickname cannot be empty.";

/// Rejection of an empty `/join` argument.
pub const EMPTY_CHANNEL: &str = "Channel name cannot be empty.";

/// Denial for moderation commands issued by anyone but the channel owner.
pub const NOT_OWNER: &str = "This command may only be used by the channel administrator";

/// Moderation target not found among the requester's channel members.
pub const USER_NOT_FOUND: &str = "User not found.";

/// Greeting sent right after accept.
pub fn welcome(placeholder: &str) -> String {
    format!("Welcome to the chat! Your nickname is {placeholder}.")
}

/// Reply to a successful `/nickname`.
pub fn nickname_set(nick: &str) -> String {
    format!("Your nickname is now {nick}. You can now join a channel with /join.")
}

/// Rejection of a nickname held by another client.
pub fn nickname_in_use(nick: &str) -> String {
    format!("Nickname {nick} is already in use.")
}

/// Reply to `/join` that created the channel.
pub fn channel_created(channel: &str) -> String {
    format!("Channel {channel} created")
}

/// Reply to `/join` of an existing channel.
pub fn channel_joined(channel: &str) -> String {
    format!("Connected to the channel: {channel}")
}

/// A chat line as delivered to channel members.
pub fn chat_line(nick: &str, text: &str) -> String {
    format!("{nick}: {text}")
}

/// Notice to a muted client whose chat was rejected.
pub fn muted_notice(channel: &str) -> String {
    format!("You are muted on the channel {channel}.")
}

/// Owner confirmation of `/kick`.
pub fn kicked(nick: &str) -> String {
    format!("User {nick} was kicked.")
}

/// Owner confirmation of `/mute`.
pub fn muted(nick: &str) -> String {
    format!("User {nick} was muted.")
}

/// Owner confirmation of `/unmute`.
pub fn unmuted(nick: &str) -> String {
    format!("User {nick} was unmuted.")
}

/// Notice delivered to a kicked client.
pub fn you_were_kicked(channel: &str) -> String {
    format!("You were kicked from the channel {channel} by an administrator.")
}

/// Notice delivered to a muted client.
pub fn you_were_muted(channel: &str) -> String {
    format!("You were muted on the channel {channel} by an administrator.")
}

/// Notice delivered to an unmuted client.
pub fn you_were_unmuted(channel: &str) -> String {
    format!("You were unmuted on the channel {channel} by an administrator.")
}

/// Reply to `/whois`.
pub fn whois(nick: &str, ip: impl std::fmt::Display) -> String {
    format!("User {nick} is on IP: {ip}")
}
