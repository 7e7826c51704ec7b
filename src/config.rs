//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: default 3000
//! - `BIND_ADDR`: default `0.0.0.0`
//!
//! Unparseable values fall back to the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_addr: parse_or(lookup("BIND_ADDR"), DEFAULT_BIND_ADDR),
            port: parse_or(lookup("PORT"), DEFAULT_PORT),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(%value, "ignoring unparseable config value");
            default
        }),
        None => default,
    }
}
