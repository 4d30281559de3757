//! Panel layout and global orientation.

use serde_json::json;

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};
use crate::types::{PanelLayout, RangedValue};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Layout<T> {
    ctx: Context<T>,
}

impl<T: HttpTransport> Layout<T> {
    pub fn new(ctx: Context<T>) -> Self {
        Layout { ctx }
    }

    /// Panel positions. Use [`PanelLayout::stream_panel_ids`] to address
    /// panels in a [`StreamEffect`](crate::StreamEffect).
    pub async fn layout(&self) -> Result<PanelLayout> {
        let url = self.ctx.authorized_url("panelLayout/layout")?;
        let response = self.ctx.transport().send(HttpRequest::get(url)).await?;
        http::expect_status(&response, &[200])?;
        http::parse_json(&response)
    }

    pub async fn global_orientation(&self) -> Result<RangedValue> {
        let url = self.ctx.authorized_url("panelLayout/globalOrientation")?;
        let response = self.ctx.transport().send(HttpRequest::get(url)).await?;
        http::expect_status(&response, &[200])?;
        http::parse_json(&response)
    }

    /// Rotate the whole layout, in degrees.
    pub async fn set_global_orientation(&self, value: i32) -> Result<()> {
        let url = self.ctx.authorized_url("panelLayout/globalOrientation")?;
        let body = json!({"globalOrientation": {"value": value}});
        let response = self
            .ctx
            .transport()
            .send(HttpRequest::put(url, Some(body)))
            .await?;
        http::expect_status(&response, &[204])
    }
}
