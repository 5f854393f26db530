//! Default value functions for configuration.

use std::net::{Ipv4Addr, SocketAddr};

pub fn default_server_name() -> String {
    "huddle".to_string()
}

pub fn default_listen_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 12345))
}

pub fn default_max_frame_len() -> usize {
    huddle_proto::DEFAULT_MAX_FRAME_LEN
}

pub fn default_sendq_capacity() -> usize {
    256
}
