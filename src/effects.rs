//! Stored effects: listing, selection and temporary display.

use serde_json::{Value, json};

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpResponse, HttpTransport};
use crate::stream;
use crate::types::{EffectData, StreamEffect};

type Result<T> = std::result::Result<T, Error>;

/// Effects stored on the controller.
#[derive(Debug, Clone)]
pub struct Effects<T> {
    ctx: Context<T>,
}

impl<T: HttpTransport> Effects<T> {
    pub fn new(ctx: Context<T>) -> Self {
        Effects { ctx }
    }

    /// Names of all stored effects.
    pub async fn list(&self) -> Result<Vec<String>> {
        let response = self.get("effects/effectsList").await?;
        http::parse_json(&response)
    }

    /// Name of the effect currently playing.
    pub async fn selected(&self) -> Result<String> {
        let response = self.get("effects/select").await?;
        http::parse_json(&response)
    }

    pub async fn select(&self, name: &str) -> Result<()> {
        let response = self.put(json!({"select": name})).await?;
        if response.status == 404 {
            return Err(Error::EffectNotFound(name.to_string()));
        }
        http::expect_status(&response, &[204])
    }

    /// Full definition of the stored effect `name`.
    pub async fn effect_data(&self, name: &str) -> Result<EffectData> {
        let body = json!({"write": {"command": "request", "animName": name}});
        let response = self.put(body).await?;
        if response.status == 404 {
            return Err(Error::EffectNotFound(name.to_string()));
        }
        http::expect_status(&response, &[200])?;
        http::parse_json(&response)
    }

    /// Send an arbitrary effects write and expect an empty success.
    ///
    /// The body is passed through untouched; what it does depends entirely on
    /// the command it carries.
    pub async fn write_raw(&self, body: Value) -> Result<()> {
        let response = self.put(body).await?;
        http::expect_status(&response, &[204])
    }

    /// Display a custom effect from its `animData` string without storing it.
    pub async fn display_temporary(&self, anim_data: &str, looping: bool) -> Result<()> {
        self.write_raw(json!({
            "write": {
                "command": "display",
                "animType": "custom",
                "animData": anim_data,
                "loop": looping,
            }
        }))
        .await
    }

    /// Display `effect` through the REST API instead of the UDP stream.
    pub async fn display_stream_effect(&self, effect: &StreamEffect, looping: bool) -> Result<()> {
        self.display_temporary(&stream::encode_anim_data(effect), looping)
            .await
    }

    async fn get(&self, path: &str) -> Result<HttpResponse> {
        let url = self.ctx.authorized_url(path)?;
        let response = self.ctx.transport().send(HttpRequest::get(url)).await?;
        http::expect_status(&response, &[200])?;
        Ok(response)
    }

    async fn put(&self, body: Value) -> Result<HttpResponse> {
        let url = self.ctx.authorized_url("effects")?;
        self.ctx
            .transport()
            .send(HttpRequest::put(url, Some(body)))
            .await
    }
}
