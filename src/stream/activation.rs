//! Activation handshake: ask the controller to open its streaming listener.

use std::str::FromStr;

use log::debug;
use serde_json::json;

use crate::context::Context;
use crate::errors::Error;
use crate::http::{self, HttpRequest, HttpTransport};
use crate::types::{Endpoint, ExtControlVersion};

type Result<T> = std::result::Result<T, Error>;

/// Switch the controller into external control mode and return the UDP
/// endpoint it will read frames from.
///
/// `version` is checked before anything is sent: only `"v1"` is accepted.
/// Each call renegotiates, so the endpoint may change between calls.
pub async fn activate<T: HttpTransport>(ctx: &Context<T>, version: &str) -> Result<Endpoint> {
    let version = ExtControlVersion::from_str(version)
        .map_err(|_| Error::UnsupportedVersion(version.to_string()))?;
    activate_version(ctx, version).await
}

/// Typed variant of [`activate`].
pub async fn activate_version<T: HttpTransport>(
    ctx: &Context<T>,
    version: ExtControlVersion,
) -> Result<Endpoint> {
    let url = ctx.authorized_url("effects")?;
    let body = json!({
        "write": {
            "command": "display",
            "animType": "extControl",
            "extControlVersion": version.to_string(),
        }
    });

    let response = ctx.transport().send(HttpRequest::put(url, Some(body))).await?;
    http::expect_status(&response, &[200])?;
    let endpoint: Endpoint = http::parse_json(&response)?;

    debug!(
        "extControl {} active, streaming to {}",
        version,
        endpoint.connect_addr()
    );
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::http::mock::MockTransport;

    fn authed(transport: MockTransport) -> Context<MockTransport> {
        Context::new("http://10.0.0.2:16021/api/v1", transport).with_token("tok")
    }

    #[tokio::test]
    async fn test_activate_parses_endpoint() {
        let ctx = authed(MockTransport::new().respond(
            200,
            r#"{"streamControlIpAddr": "10.0.0.2", "streamControlPort": 60222, "streamControlProtocol": "udp"}"#,
        ));

        let endpoint = activate(&ctx, "v1").await.unwrap();
        assert_eq!(endpoint, Endpoint::new("10.0.0.2", 60222));

        let requests = ctx.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://10.0.0.2:16021/api/v1/tok/effects");
        assert_eq!(
            requests[0].body,
            Some(json!({"write": {"command": "display", "animType": "extControl", "extControlVersion": "v1"}}))
        );
    }

    #[tokio::test]
    async fn test_unsupported_version_sends_nothing() {
        let ctx = authed(MockTransport::new());
        let err = activate(&ctx, "v2").await.unwrap_err();
        assert_eq!(err, Error::UnsupportedVersion("v2".to_string()));
        assert!(ctx.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let ctx = authed(MockTransport::new().respond(401, ""));
        assert_eq!(activate(&ctx, "v1").await, Err(Error::Unauthorized));

        let ctx = authed(MockTransport::new().respond(500, "boom"));
        assert_eq!(
            activate(&ctx, "v1").await,
            Err(Error::UnexpectedResponse { status: 500 })
        );

        let ctx = authed(MockTransport::new().respond(200, "{not json"));
        assert!(matches!(activate(&ctx, "v1").await, Err(Error::JsonLoad(_))));
    }

    #[tokio::test]
    async fn test_activate_without_token() {
        let ctx = Context::new("http://10.0.0.2:16021/api/v1", MockTransport::new());
        assert_eq!(activate(&ctx, "v1").await, Err(Error::NotAuthenticated));
        assert!(ctx.transport().requests().is_empty());
    }
}
