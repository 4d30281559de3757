//! `reqwest` transport implementation.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::errors::Error;

/// Default transport, backed by a shared `reqwest::Client`.
///
/// `reqwest` drives its I/O on tokio, so this transport needs a tokio
/// reactor even when the UDP side runs on another runtime.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests fail once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http("BUILD", "", e))?;
        Ok(ReqwestTransport { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let http_err = |e: reqwest::Error| Error::http(&request.method.to_string(), &request.url, e);

        let mut builder = self.client.request(method, &request.url);
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(Error::JsonDump)?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = builder.send().await.map_err(http_err)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(http_err)?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one HTTP/1.1 request, answer with `status_line` and `body`, and
    /// hand back the raw request text.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = sock.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase();
                    let len = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .map_or(0, |v| v.trim().parse::<usize>().unwrap());
                    if raw.len() >= end + 4 + len {
                        break;
                    }
                }
            }
            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            String::from_utf8(raw).unwrap()
        });
        (base, handle)
    }

    #[tokio::test]
    async fn test_put_sends_json_body_and_returns_status() {
        let (base, server) = serve_once("401 Unauthorized", "").await;
        let body = json!({"write": {"command": "display", "animType": "extControl"}});

        let response = ReqwestTransport::new()
            .send(HttpRequest::put(format!("{base}/api/v1/tok/effects"), Some(body.clone())))
            .await
            .unwrap();
        assert_eq!(response.status, 401);
        assert!(response.body.is_empty());

        let raw = server.await.unwrap();
        let (head, sent) = raw.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("PUT /api/v1/tok/effects HTTP/1.1\r\n"), "{head}");
        assert!(
            head.lines()
                .any(|l| l.eq_ignore_ascii_case("content-type: application/json")),
            "{head}"
        );
        assert_eq!(serde_json::from_str::<serde_json::Value>(sent).unwrap(), body);
    }

    #[tokio::test]
    async fn test_get_reads_response_body() {
        let (base, server) = serve_once("200 OK", r#"{"value": 42}"#).await;

        let response = ReqwestTransport::with_timeout(Duration::from_secs(5))
            .unwrap()
            .send(HttpRequest::get(format!("{base}/api/v1/tok/state/brightness")))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"value": 42}"#);

        let raw = server.await.unwrap();
        assert!(raw.starts_with("GET /api/v1/tok/state/brightness HTTP/1.1\r\n"));
        assert!(!raw.to_ascii_lowercase().contains("content-type:"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = ReqwestTransport::new()
            .send(HttpRequest::delete(format!("http://{addr}/api/v1/tok")))
            .await;
        assert!(matches!(result, Err(Error::Http { .. })), "{result:?}");
    }
}
