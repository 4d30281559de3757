//! The controller client.

use log::debug;

use crate::auth::Auth;
use crate::config::ClientConfig;
use crate::context::Context;
use crate::effects::Effects;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};
use crate::identify::Identify;
use crate::layout::Layout;
use crate::state::State;
use crate::stream::Stream;
use crate::types::ControllerInfo;

#[cfg(feature = "http-reqwest")]
use crate::http::ReqwestTransport;

type Result<T> = std::result::Result<T, Error>;

/// A Nanoleaf controller reachable over the local network.
///
/// The client owns the current [`Context`]. Component accessors such as
/// [`Nanoleaf::state`] hand out a snapshot of it, so components created before
/// a token change keep the token they were created with.
///
/// # Example
///
/// ```ignore
/// use nanoleaf_rs::Nanoleaf;
///
/// let mut nanoleaf = Nanoleaf::new("http://192.168.1.50:16021/api/v1");
/// nanoleaf.set_token("0123456789abcdef");
/// nanoleaf.state().set_on(true).await?;
/// ```
#[derive(Debug)]
pub struct Nanoleaf<T> {
    ctx: Context<T>,
}

#[cfg(feature = "http-reqwest")]
impl Nanoleaf<ReqwestTransport> {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://192.168.1.50:16021/api/v1`).
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = match config.request_timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new(),
        };
        Ok(Self::with_transport(&config.base_url(), transport))
    }
}

impl<T: HttpTransport> Nanoleaf<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Nanoleaf {
            ctx: Context::new(base_url, transport),
        }
    }

    /// Use a custom transport with a [`ClientConfig`]. The config's timeout is
    /// left to the transport.
    pub fn from_config_with_transport(config: &ClientConfig, transport: T) -> Self {
        Self::with_transport(&config.base_url(), transport)
    }

    pub fn context(&self) -> &Context<T> {
        &self.ctx
    }

    pub fn token(&self) -> Option<&str> {
        self.ctx.token()
    }

    /// Install a previously issued token.
    pub fn set_token(&mut self, token: &str) {
        self.ctx = self.ctx.with_token(token);
    }

    pub fn clear_token(&mut self) {
        self.ctx = self.ctx.without_token();
    }

    /// True once a token is set. Says nothing about whether the controller
    /// still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.ctx.token().is_some()
    }

    /// Pair with the controller and keep the issued token.
    pub async fn authenticate(&mut self) -> Result<String> {
        let (token, ctx) = self.auth().authenticate().await?;
        self.ctx = ctx;
        Ok(token)
    }

    /// Revoke the current token on the controller and forget it.
    pub async fn unauthenticate(&mut self) -> Result<()> {
        self.ctx = self.auth().unauthenticate().await?;
        Ok(())
    }

    /// Everything the controller reports about itself.
    pub async fn controller_info(&self) -> Result<ControllerInfo> {
        let url = self.ctx.authorized_url("")?;
        let response = self.ctx.transport().send(HttpRequest::get(url)).await?;
        http::expect_status(&response, &[200])?;
        let info: ControllerInfo = http::parse_json(&response)?;
        debug!("controller {} ({}) fw {}", info.name, info.model, info.firmware_version);
        Ok(info)
    }

    pub fn auth(&self) -> Auth<T> {
        Auth::new(self.ctx.clone())
    }

    pub fn state(&self) -> State<T> {
        State::new(self.ctx.clone())
    }

    pub fn effects(&self) -> Effects<T> {
        Effects::new(self.ctx.clone())
    }

    pub fn layout(&self) -> Layout<T> {
        Layout::new(self.ctx.clone())
    }

    pub fn identify(&self) -> Identify<T> {
        Identify::new(self.ctx.clone())
    }

    /// A fresh, unconnected streaming session.
    pub fn stream(&self) -> Stream<T> {
        Stream::new(self.ctx.clone())
    }
}
