//! Explicit session context shared by the REST components and the stream.

use std::sync::Arc;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Base URL, auth token and transport handle for one controller.
///
/// A context is never mutated after construction. Token rotation builds a new
/// value with [`Context::with_token`] and hands it to whoever needs it, so a
/// component always sees one consistent token for its whole lifetime.
#[derive(Debug)]
pub struct Context<T> {
    base_url: String,
    token: Option<String>,
    transport: Arc<T>,
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Context {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> Context<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Context {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            transport: Arc::new(transport),
        }
    }

    /// A copy of this context carrying `token`. The transport is shared.
    pub fn with_token(&self, token: &str) -> Self {
        Context {
            token: Some(token.to_string()),
            ..self.clone()
        }
    }

    /// A copy of this context with no token.
    pub fn without_token(&self) -> Self {
        Context {
            token: None,
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of an unauthenticated API path, e.g. `new` for token issuance.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// URL of `path` below the token segment.
    ///
    /// Fails with [`Error::NotAuthenticated`] before any I/O when no token is set.
    pub(crate) fn authorized_url(&self, path: &str) -> Result<String> {
        let token = self.token.as_deref().ok_or(Error::NotAuthenticated)?;
        if path.is_empty() {
            Ok(format!("{}/{}", self.base_url, token))
        } else {
            Ok(format!("{}/{}/{}", self.base_url, token, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_url_requires_token() {
        let ctx = Context::new("http://10.0.0.2:16021/api/v1/", ());
        assert_eq!(ctx.authorized_url("state"), Err(Error::NotAuthenticated));
        assert_eq!(ctx.url("new"), "http://10.0.0.2:16021/api/v1/new");
    }

    #[test]
    fn test_with_token_leaves_source_untouched() {
        let ctx = Context::new("http://host/api/v1", ());
        let authed = ctx.with_token("abc");
        assert!(ctx.token().is_none());
        assert_eq!(
            authed.authorized_url("effects").unwrap(),
            "http://host/api/v1/abc/effects"
        );
        assert_eq!(authed.authorized_url("").unwrap(), "http://host/api/v1/abc");
        assert!(authed.without_token().token().is_none());
    }
}
