//! Low-latency UDP streaming ("external control").
//!
//! Streaming is a three step affair: [`activate`] asks the controller over HTTP
//! for a UDP endpoint, a [`Stream`] opens a socket to it, and every
//! [`StreamEffect`](crate::StreamEffect) written is turned into one datagram by
//! [`encode`].

mod activation;
mod codec;
mod session;

pub use activation::{activate, activate_version};
pub use codec::{encode, encode_anim_data, encoded_len};
pub use session::Stream;
