/// All error types that can occur when talking to a Nanoleaf controller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a request body to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// The controller answered with a body that is not the expected JSON.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The HTTP transport failed before a response was received.
    #[error("http {method} {url} failed: {err}")]
    Http {
        method: String,
        url: String,
        err: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A UDP socket operation on the streaming channel failed.
    #[error("socket {action} error: {err:?}")]
    Socket { action: String, err: std::io::Error },

    /// The request was rejected because the token is missing or revoked.
    #[error("unauthorized; authenticate before sending requests")]
    Unauthorized,

    /// The controller is not in pairing mode and refuses to issue a token.
    #[error("controller does not accept new authentications; hold the power button to enable pairing")]
    AuthNotReady,

    /// An operation needing a token was attempted before authenticating.
    #[error("no auth token set")]
    NotAuthenticated,

    /// The controller answered with a status code the operation does not expect.
    #[error("unexpected response from controller: HTTP {status}")]
    UnexpectedResponse { status: u16 },

    /// The named effect does not exist on the controller.
    #[error("effect not found: {0}")]
    EffectNotFound(String),

    /// The requested external control protocol version is not supported.
    #[error("unsupported extControl version {0:?}; only \"v1\" is accepted")]
    UnsupportedVersion(String),

    /// A value does not fit into its single-byte wire field.
    #[error("{field} value {value} is outside 0-255")]
    ValueOutOfRange { field: &'static str, value: i64 },

    /// A stream effect addresses more panels than the wire format can count.
    #[error("stream effect has {0} panels; at most 255 can be encoded")]
    TooManyPanels(usize),

    /// A panel effect carries more frames than the wire format can count.
    #[error("panel {panel_id} has {count} frames; at most 255 can be encoded")]
    TooManyFrames { panel_id: u8, count: usize },

    /// `connect` was called before a streaming endpoint was negotiated.
    #[error("streaming endpoint not negotiated; call activate first")]
    NotActivated,

    /// The streaming session has no open socket.
    #[error("streaming session is not connected")]
    NotConnected,

    /// `connect` was called on a session that already holds a socket.
    #[error("streaming session is already connected")]
    AlreadyConnected,

    /// The streaming session was disconnected and cannot be reused.
    #[error("streaming session is closed")]
    SessionClosed,
}

impl Error {
    /// Create a new socket error
    pub fn socket(action: &str, err: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new HTTP transport error
    pub fn http<E>(method: &str, url: &str, err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Http {
            method: method.to_string(),
            url: url.to_string(),
            err: err.into(),
        }
    }

    /// Create a new out-of-range error for a single-byte field
    pub fn out_of_range(field: &'static str, value: i64) -> Self {
        Error::ValueOutOfRange { field, value }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
