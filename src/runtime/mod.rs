//! Runtime-agnostic async abstractions.
//!
//! The streaming channel only needs a connected UDP socket, so this module
//! exposes a small socket trait with one implementation per async runtime.
//!
//! # Feature Flags
//!
//! Enable one of the following features to select your runtime:
//!
//! - `runtime-tokio` (default) - Use the tokio runtime
//! - `runtime-async-std` - Use the async-std runtime
//! - `runtime-smol` - Use the smol runtime (through `async-io`)
//!
//! # Example
//!
//! ```toml
//! [dependencies]
//! # Using async-std
//! nanoleaf-rs = { version = "0.1", default-features = false, features = ["runtime-async-std"] }
//!
//! # Using smol
//! nanoleaf-rs = { version = "0.1", default-features = false, features = ["runtime-smol"] }
//! ```

use std::future::Future;
use std::io;

#[cfg(feature = "runtime-tokio")]
mod tokio_impl;

#[cfg(feature = "runtime-async-std")]
mod async_std_impl;

#[cfg(feature = "runtime-smol")]
mod smol_impl;

// Re-export the active runtime's socket
#[cfg(feature = "runtime-tokio")]
pub use tokio_impl::UdpSocket;

#[cfg(feature = "runtime-async-std")]
pub use async_std_impl::UdpSocket;

#[cfg(feature = "runtime-smol")]
pub use smol_impl::UdpSocket;

/// Trait for async UDP socket operations.
///
/// This trait abstracts over different async runtime's UDP socket implementations,
/// allowing the streaming session to be runtime-agnostic.
pub trait AsyncUdpSocket: Send + Sync + Sized {
    /// Bind to the specified local address.
    fn bind(addr: &str) -> impl Future<Output = io::Result<Self>> + Send;

    /// Fix the destination of every subsequent `send`.
    fn connect(&self, addr: &str) -> impl Future<Output = io::Result<()>> + Send;

    /// Send one datagram to the connected address.
    fn send(&self, buf: &[u8]) -> impl Future<Output = io::Result<usize>> + Send;
}

// Compile-time check to ensure exactly one runtime is selected
#[cfg(not(any(
    feature = "runtime-tokio",
    feature = "runtime-async-std",
    feature = "runtime-smol"
)))]
compile_error!(
    "One of \"runtime-tokio\", \"runtime-async-std\", or \"runtime-smol\" features must be enabled"
);

#[cfg(all(feature = "runtime-tokio", feature = "runtime-async-std"))]
compile_error!("Features \"runtime-tokio\" and \"runtime-async-std\" are mutually exclusive");

#[cfg(all(feature = "runtime-tokio", feature = "runtime-smol"))]
compile_error!("Features \"runtime-tokio\" and \"runtime-smol\" are mutually exclusive");

#[cfg(all(feature = "runtime-async-std", feature = "runtime-smol"))]
compile_error!("Features \"runtime-async-std\" and \"runtime-smol\" are mutually exclusive");
