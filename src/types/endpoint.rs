//! External control (UDP streaming) negotiation types.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Protocol versions accepted by the activation handshake.
///
/// ```
/// use std::str::FromStr;
/// use nanoleaf_rs::ExtControlVersion;
///
/// assert_eq!(ExtControlVersion::from_str("v1"), Ok(ExtControlVersion::V1));
/// assert!(ExtControlVersion::from_str("v2").is_err());
/// assert_eq!(ExtControlVersion::V1.to_string(), "v1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
pub enum ExtControlVersion {
    #[default]
    #[strum(serialize = "v1")]
    V1,
}

/// UDP address the controller listens on for streamed frames.
///
/// Only meaningful while the token that negotiated it stays valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Endpoint {
    #[serde(rename = "streamControlIpAddr")]
    pub address: String,
    #[serde(rename = "streamControlPort")]
    pub port: u16,
}

impl Endpoint {
    pub fn new(address: &str, port: u16) -> Self {
        Endpoint {
            address: address.to_string(),
            port,
        }
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn connect_addr(&self) -> String {
        match self.address.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{}]:{}", v6, self.port),
            _ => format!("{}:{}", self.address, self.port),
        }
    }

    /// The concrete address to stream to.
    ///
    /// The controller reports an IP literal, which is used as is. Anything
    /// else is treated as a hostname and resolved, taking the first address.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        if let Ok(ip) = self.address.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }
        (self.address.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} resolved to no address", self.address),
                )
            })
    }
}

/// Wildcard local address of the same family as `target`.
pub(crate) fn bind_addr(target: &SocketAddr) -> &'static str {
    if target.is_ipv6() { "[::]:0" } else { "0.0.0.0:0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_handshake_body() {
        let ep: Endpoint =
            serde_json::from_str(r#"{"streamControlIpAddr": "192.168.1.50", "streamControlPort": 60222}"#)
                .unwrap();
        assert_eq!(ep, Endpoint::new("192.168.1.50", 60222));
        assert_eq!(ep.connect_addr(), "192.168.1.50:60222");
        let target = ep.socket_addr().unwrap();
        assert_eq!(target.to_string(), "192.168.1.50:60222");
        assert_eq!(bind_addr(&target), "0.0.0.0:0");
    }

    #[test]
    fn test_endpoint_ipv6() {
        let ep = Endpoint::new("fe80::1", 60222);
        assert_eq!(ep.connect_addr(), "[fe80::1]:60222");
        let target = ep.socket_addr().unwrap();
        assert_eq!(target.to_string(), "[fe80::1]:60222");
        assert_eq!(bind_addr(&target), "[::]:0");
    }

    #[test]
    fn test_hostname_binds_resolved_family() {
        let target = Endpoint::new("localhost", 60222).socket_addr().unwrap();
        assert!(target.ip().is_loopback());
        assert_eq!(target.port(), 60222);
        let expected = if target.is_ipv6() { "[::]:0" } else { "0.0.0.0:0" };
        assert_eq!(bind_addr(&target), expected);
    }

    #[test]
    fn test_unresolvable_hostname_fails() {
        assert!(Endpoint::new("no-such-host.invalid", 60222).socket_addr().is_err());
    }
}
