//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where to find a controller and how to talk to it.
///
/// The library never reads configuration files itself; this type derives
/// serde so callers can embed it in their own.
///
/// # Examples
///
/// ```
/// use nanoleaf_rs::ClientConfig;
///
/// let config = ClientConfig::new("192.168.1.50");
/// assert_eq!(config.base_url(), "http://192.168.1.50:16021/api/v1");
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub host: String,
    #[serde(default = "ClientConfig::default_port")]
    pub port: u16,
    /// Upper bound for each HTTP request, applied by the default transport.
    #[serde(default, with = "duration_ms")]
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub const DEFAULT_PORT: u16 = 16021;
    const API_PATH: &'static str = "api/v1";

    pub fn new(host: &str) -> Self {
        ClientConfig {
            host: host.to_string(),
            port: Self::DEFAULT_PORT,
            request_timeout: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Base URL of the REST API, without a trailing slash.
    ///
    /// IPv6 hosts are bracketed once, whether or not `host` already carries
    /// the brackets.
    pub fn base_url(&self) -> String {
        let host = self
            .host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host);
        if host.contains(':') {
            format!("http://[{}]:{}/{}", host, self.port, Self::API_PATH)
        } else {
            format!("http://{}:{}/{}", host, self.port, Self::API_PATH)
        }
    }

    fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        value
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
