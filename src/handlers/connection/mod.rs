//! Connection and registration handlers.
//!
//! Handles /connect, /nickname, /ping and /quit.

mod connect;
mod nickname;
mod ping;
mod quit;

pub use connect::ConnectHandler;
pub use nickname::NicknameHandler;
pub use ping::PingHandler;
pub use quit::QuitHandler;
