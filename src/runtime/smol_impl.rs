//! smol runtime implementation.

use std::io;

use async_io::Async;

use super::AsyncUdpSocket;

/// smol-based UDP socket using async-io.
#[derive(Debug)]
pub struct UdpSocket(Async<std::net::UdpSocket>);

impl AsyncUdpSocket for UdpSocket {
    async fn bind(addr: &str) -> io::Result<Self> {
        let socket = std::net::UdpSocket::bind(addr)?;
        Async::new(socket).map(UdpSocket)
    }

    async fn connect(&self, addr: &str) -> io::Result<()> {
        self.0.get_ref().connect(addr)
    }

    async fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.0.send(buf).await
    }
}
