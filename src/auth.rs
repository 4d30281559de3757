//! Token issuance and revocation.

use log::debug;
use serde::Deserialize;

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Deserialize)]
struct NewUserResponse {
    auth_token: String,
}

/// Pairing operations.
///
/// These return a new [`Context`] instead of mutating anything; the
/// [`Nanoleaf`](crate::Nanoleaf) client installs it and hands it on.
#[derive(Debug, Clone)]
pub struct Auth<T> {
    ctx: Context<T>,
}

impl<T: HttpTransport> Auth<T> {
    pub fn new(ctx: Context<T>) -> Self {
        Auth { ctx }
    }

    /// Request a new token. The controller must be in pairing mode.
    ///
    /// Returns the issued token and a context carrying it.
    pub async fn authenticate(&self) -> Result<(String, Context<T>)> {
        let response = self
            .ctx
            .transport()
            .send(HttpRequest::post(self.ctx.url("new")))
            .await?;

        if response.status == 403 {
            return Err(Error::AuthNotReady);
        }
        http::expect_status(&response, &[200])?;
        let issued: NewUserResponse = http::parse_json(&response)?;

        debug!("obtained auth token from {}", self.ctx.base_url());
        let ctx = self.ctx.with_token(&issued.auth_token);
        Ok((issued.auth_token, ctx))
    }

    /// Revoke the current token. Returns a context without it.
    pub async fn unauthenticate(&self) -> Result<Context<T>> {
        let url = self.ctx.authorized_url("")?;
        let response = self.ctx.transport().send(HttpRequest::delete(url)).await?;
        http::expect_status(&response, &[204])?;

        debug!("auth token revoked");
        Ok(self.ctx.without_token())
    }
}
