//! async-std runtime implementation.

use std::io;

use async_std::net::UdpSocket as AsyncStdUdpSocket;

use super::AsyncUdpSocket;

/// async-std-based UDP socket.
#[derive(Debug)]
pub struct UdpSocket(AsyncStdUdpSocket);

impl AsyncUdpSocket for UdpSocket {
    async fn bind(addr: &str) -> io::Result<Self> {
        AsyncStdUdpSocket::bind(addr).await.map(UdpSocket)
    }

    async fn connect(&self, addr: &str) -> io::Result<()> {
        self.0.connect(addr).await
    }

    async fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.0.send(buf).await
    }
}
