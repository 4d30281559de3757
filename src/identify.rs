//! Identify: flash the panels so the user can spot the controller.

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};

#[derive(Debug, Clone)]
pub struct Identify<T> {
    ctx: Context<T>,
}

impl<T: HttpTransport> Identify<T> {
    pub fn new(ctx: Context<T>) -> Self {
        Identify { ctx }
    }

    /// Flash the panels briefly.
    pub async fn flash(&self) -> Result<(), Error> {
        let url = self.ctx.authorized_url("identify")?;
        let response = self.ctx.transport().send(HttpRequest::put(url, None)).await?;
        // older firmware answers 200, newer 204
        http::expect_status(&response, &[200, 204])
    }
}
