//! HTTP transport seam used by every REST operation.
//!
//! The controller's REST API is plain JSON over HTTP. Requests are described by
//! [`HttpRequest`] and handed to an [`HttpTransport`], so the HTTP client can be
//! swapped (or mocked) without touching the operations built on top of it.

use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::Error;

#[cfg(feature = "http-reqwest")]
mod reqwest_impl;

#[cfg(feature = "http-reqwest")]
pub use reqwest_impl::ReqwestTransport;

type Result<T> = std::result::Result<T, Error>;

/// HTTP methods used by the controller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A request to the controller. The body, when present, is sent as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        HttpRequest {
            method: Method::Get,
            url,
            body: None,
        }
    }

    pub fn post(url: String) -> Self {
        HttpRequest {
            method: Method::Post,
            url,
            body: None,
        }
    }

    pub fn put(url: String, body: Option<Value>) -> Self {
        HttpRequest {
            method: Method::Put,
            url,
            body,
        }
    }

    pub fn delete(url: String) -> Self {
        HttpRequest {
            method: Method::Delete,
            url,
            body: None,
        }
    }
}

/// A raw response: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }
}

/// Trait for sending HTTP requests to the controller.
///
/// Any status code counts as a successful round-trip; implementations only
/// return [`Error::Http`] when no response could be obtained. Timeouts are the
/// transport's business: nothing above this trait bounds a request.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Map a response status onto the crate's error taxonomy.
///
/// Statuses listed in `accepted` pass through; 401 becomes
/// [`Error::Unauthorized`]; everything else is [`Error::UnexpectedResponse`].
pub(crate) fn expect_status(response: &HttpResponse, accepted: &[u16]) -> Result<()> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    match response.status {
        401 => Err(Error::Unauthorized),
        status => Err(Error::UnexpectedResponse { status }),
    }
}

pub(crate) fn parse_json<D: DeserializeOwned>(response: &HttpResponse) -> Result<D> {
    serde_json::from_slice(&response.body).map_err(Error::JsonLoad)
}
