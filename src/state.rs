//! Power, brightness and color state.

use serde::Serialize;
use serde_json::{Value, json};

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};
use crate::types::{Adjustment, ColorMode, OnOff, RangedValue};

type Result<T> = std::result::Result<T, Error>;

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
struct BrightnessWrite {
    value: i32,
    duration: Option<u32>,
}

/// Read and change the panels' global state.
#[derive(Debug, Clone)]
pub struct State<T> {
    ctx: Context<T>,
}

impl<T: HttpTransport> State<T> {
    pub fn new(ctx: Context<T>) -> Self {
        State { ctx }
    }

    pub async fn is_on(&self) -> Result<bool> {
        let on: OnOff = self.get("on").await?;
        Ok(on.value)
    }

    pub async fn set_on(&self, on: bool) -> Result<()> {
        self.put(json!({"on": {"value": on}})).await
    }

    pub async fn brightness(&self) -> Result<RangedValue> {
        self.get("brightness").await
    }

    /// Set brightness, optionally fading over `duration` seconds.
    pub async fn set_brightness(&self, value: i32, duration: Option<u32>) -> Result<()> {
        let body = BrightnessWrite { value, duration };
        self.put(json!({"brightness": body})).await
    }

    pub async fn hue(&self) -> Result<RangedValue> {
        self.get("hue").await
    }

    pub async fn set_hue(&self, adjustment: Adjustment) -> Result<()> {
        self.put(json!({"hue": adjustment})).await
    }

    pub async fn saturation(&self) -> Result<RangedValue> {
        self.get("sat").await
    }

    pub async fn set_saturation(&self, adjustment: Adjustment) -> Result<()> {
        self.put(json!({"sat": adjustment})).await
    }

    pub async fn color_temperature(&self) -> Result<RangedValue> {
        self.get("ct").await
    }

    pub async fn set_color_temperature(&self, adjustment: Adjustment) -> Result<()> {
        self.put(json!({"ct": adjustment})).await
    }

    pub async fn color_mode(&self) -> Result<ColorMode> {
        self.get("colorMode").await
    }

    async fn get<D: serde::de::DeserializeOwned>(&self, attribute: &str) -> Result<D> {
        let url = self.ctx.authorized_url(&format!("state/{attribute}"))?;
        let response = self.ctx.transport().send(HttpRequest::get(url)).await?;
        http::expect_status(&response, &[200])?;
        http::parse_json(&response)
    }

    async fn put(&self, body: Value) -> Result<()> {
        let url = self.ctx.authorized_url("state")?;
        let response = self
            .ctx
            .transport()
            .send(HttpRequest::put(url, Some(body)))
            .await?;
        http::expect_status(&response, &[204])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::http::mock::MockTransport;

    fn state(transport: MockTransport) -> State<MockTransport> {
        State::new(Context::new("http://h/api/v1", transport).with_token("tok"))
    }

    #[tokio::test]
    async fn test_is_on_reads_value() {
        let s = state(
            MockTransport::new()
                .respond(200, r#"{"value": false}"#)
                .respond(200, r#"{"value": true}"#),
        );
        assert!(!s.is_on().await.unwrap());
        assert!(s.is_on().await.unwrap());
        assert_eq!(s.ctx.transport().requests()[0].url, "http://h/api/v1/tok/state/on");
    }

    #[tokio::test]
    async fn test_set_brightness_body() {
        let s = state(MockTransport::new().respond(204, "").respond(204, ""));
        s.set_brightness(40, Some(5)).await.unwrap();
        s.set_brightness(60, None).await.unwrap();

        let requests = s.ctx.transport().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://h/api/v1/tok/state");
        assert_eq!(
            requests[0].body,
            Some(json!({"brightness": {"value": 40, "duration": 5}}))
        );
        assert_eq!(requests[1].body, Some(json!({"brightness": {"value": 60}})));
    }

    #[tokio::test]
    async fn test_adjustments() {
        let s = state(MockTransport::new().respond(204, "").respond(204, "").respond(204, ""));
        s.set_hue(Adjustment::Increment(10)).await.unwrap();
        s.set_saturation(Adjustment::Value(50)).await.unwrap();
        s.set_color_temperature(Adjustment::Value(2700)).await.unwrap();

        let bodies: Vec<Value> = s
            .ctx
            .transport()
            .requests()
            .into_iter()
            .filter_map(|r| r.body)
            .collect();
        assert_eq!(
            bodies,
            vec![
                json!({"hue": {"increment": 10}}),
                json!({"sat": {"value": 50}}),
                json!({"ct": {"value": 2700}}),
            ]
        );
    }

    #[tokio::test]
    async fn test_ranged_reads_and_errors() {
        let s = state(
            MockTransport::new()
                .respond(200, r#"{"value": 180, "max": 360, "min": 0}"#)
                .respond(200, r#""hs""#)
                .respond(401, "")
                .respond(204, ""),
        );
        assert_eq!(
            s.hue().await.unwrap(),
            RangedValue {
                value: 180,
                min: 0,
                max: 360
            }
        );
        assert_eq!(s.color_mode().await.unwrap(), ColorMode::HueSaturation);
        assert_eq!(s.saturation().await, Err(Error::Unauthorized));
        assert_eq!(
            s.brightness().await,
            Err(Error::UnexpectedResponse { status: 204 })
        );
    }

    #[tokio::test]
    async fn test_requires_token() {
        let s = State::new(Context::new("http://h/api/v1", MockTransport::new()));
        assert_eq!(s.set_on(true).await, Err(Error::NotAuthenticated));
        assert!(s.ctx.transport().requests().is_empty());
    }
}
