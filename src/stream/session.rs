//! Streaming session: one UDP socket pointed at a negotiated endpoint.

use std::mem;

use log::{debug, trace};

use crate::context::Context;
use crate::errors::Error;
use crate::http::HttpTransport;
use crate::runtime::{AsyncUdpSocket, UdpSocket};
use crate::stream::{activation, codec};
use crate::types::{Endpoint, StreamEffect, bind_addr};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
enum SessionState {
    Unconnected,
    Connected(UdpSocket),
    Closed,
}

/// Real-time panel control over UDP.
///
/// A session starts unconnected. [`Stream::activate`] negotiates the endpoint,
/// [`Stream::connect`] opens the socket, and [`Stream::disconnect`] closes it
/// for good: a closed session rejects every further call, so a new one has to
/// be created instead.
///
/// Writes are fire-and-forget datagrams with no delivery confirmation, and
/// nothing is retried. The session takes `&mut self` for state changes and
/// leaves ordering of concurrent writes to the caller.
///
/// # Example
///
/// ```ignore
/// let mut stream = nanoleaf.stream();
/// stream.activate("v1").await?;
/// stream.connect().await?;
/// stream.write_effect(&StreamEffect::solid([12, 34], Frame::new(255, 0, 0, 1))).await?;
/// stream.disconnect()?;
/// ```
#[derive(Debug)]
pub struct Stream<T> {
    ctx: Context<T>,
    endpoint: Option<Endpoint>,
    state: SessionState,
}

impl<T: HttpTransport> Stream<T> {
    /// Run the activation handshake and remember the endpoint for `connect`.
    ///
    /// On failure the previously negotiated endpoint, if any, is kept. An
    /// already open socket keeps sending to the endpoint it was opened with.
    pub async fn activate(&mut self, version: &str) -> Result<Endpoint> {
        if matches!(self.state, SessionState::Closed) {
            return Err(Error::SessionClosed);
        }
        let endpoint = activation::activate(&self.ctx, version).await?;
        self.endpoint = Some(endpoint.clone());
        Ok(endpoint)
    }
}

impl<T> Stream<T> {
    pub fn new(ctx: Context<T>) -> Self {
        Stream {
            ctx,
            endpoint: None,
            state: SessionState::Unconnected,
        }
    }

    pub fn context(&self) -> &Context<T> {
        &self.ctx
    }

    /// The endpoint negotiated by the last successful [`Stream::activate`].
    pub fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, SessionState::Connected(_))
    }

    /// Open a UDP socket towards the negotiated endpoint.
    ///
    /// No packet is exchanged; "connected" only means the local socket has a
    /// fixed destination.
    pub async fn connect(&mut self) -> Result<()> {
        match self.state {
            SessionState::Unconnected => {}
            SessionState::Connected(_) => return Err(Error::AlreadyConnected),
            SessionState::Closed => return Err(Error::SessionClosed),
        }
        let endpoint = self.endpoint.as_ref().ok_or(Error::NotActivated)?;

        let target = endpoint
            .socket_addr()
            .map_err(|e| Error::socket("resolve", e))?;
        let socket = UdpSocket::bind(bind_addr(&target))
            .await
            .map_err(|e| Error::socket("bind", e))?;
        socket
            .connect(&target.to_string())
            .await
            .map_err(|e| Error::socket("connect", e))?;

        debug!("stream connected to {}", target);
        self.state = SessionState::Connected(socket);
        Ok(())
    }

    /// Send `effect` as one datagram.
    ///
    /// An effect without panel effects carries no instruction and is skipped
    /// without touching the socket. A failed send leaves the session
    /// connected.
    pub async fn write_effect(&self, effect: &StreamEffect) -> Result<()> {
        let socket = match &self.state {
            SessionState::Connected(socket) => socket,
            SessionState::Unconnected => return Err(Error::NotConnected),
            SessionState::Closed => return Err(Error::SessionClosed),
        };
        if effect.is_empty() {
            return Ok(());
        }

        let buf = codec::encode(effect)?;
        socket.send(&buf).await.map_err(|e| Error::socket("send", e))?;
        trace!("sent {} panel(s) in {} bytes", effect.panels.len(), buf.len());
        Ok(())
    }

    /// Close the socket. The session cannot be used afterwards.
    pub fn disconnect(&mut self) -> Result<()> {
        match mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Connected(socket) => {
                drop(socket);
                debug!("stream disconnected");
                Ok(())
            }
            SessionState::Unconnected => {
                self.state = SessionState::Unconnected;
                Err(Error::NotConnected)
            }
            SessionState::Closed => Err(Error::SessionClosed),
        }
    }
}
