//! Tokio runtime implementation.

use std::io;

use tokio::net::UdpSocket as TokioUdpSocket;

use super::AsyncUdpSocket;

/// Tokio-based UDP socket.
#[derive(Debug)]
pub struct UdpSocket(TokioUdpSocket);

impl AsyncUdpSocket for UdpSocket {
    async fn bind(addr: &str) -> io::Result<Self> {
        TokioUdpSocket::bind(addr).await.map(UdpSocket)
    }

    async fn connect(&self, addr: &str) -> io::Result<()> {
        self.0.connect(addr).await
    }

    async fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.0.send(buf).await
    }
}
