//! # nanoleaf_rs
//!
//! An async Rust library for controlling Nanoleaf light panels over the local
//! network.
//!
//! The REST API (port 16021) covers pairing, power, brightness, hue,
//! saturation, color temperature, effects, layout and identification. For
//! real-time effects the controller can also be switched into *external
//! control* mode, where per-panel frames are streamed over UDP.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nanoleaf_rs::{ClientConfig, Frame, Nanoleaf, StreamEffect};
//!
//! async fn paint_red() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut nanoleaf = Nanoleaf::from_config(&ClientConfig::new("192.168.1.50"))?;
//!     nanoleaf.set_token("0123456789abcdef");
//!
//!     let ids = nanoleaf.layout().layout().await?.stream_panel_ids();
//!
//!     let mut stream = nanoleaf.stream();
//!     stream.activate("v1").await?;
//!     stream.connect().await?;
//!     stream.write_effect(&StreamEffect::solid(ids, Frame::new(255, 0, 0, 1))).await?;
//!     stream.disconnect()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pairing**: obtain and revoke tokens with [`Nanoleaf::authenticate`]
//! - **State**: power, brightness, hue, saturation and color temperature via [`State`]
//! - **Effects**: list, select and inspect stored effects via [`Effects`]
//! - **Layout**: panel positions and global orientation via [`Layout`]
//! - **Streaming**: per-frame panel colors over UDP via [`Stream`]
//!
//! ## Runtime Selection
//!
//! The UDP side is runtime-agnostic. Select a runtime with feature flags:
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime
//!
//! HTTP goes through the [`HttpTransport`] trait. The default
//! [`ReqwestTransport`] (feature `http-reqwest`, on by default) needs a tokio
//! reactor; plug in another transport for other runtimes.

mod auth;
mod client;
mod config;
mod context;
mod effects;
mod errors;
pub mod http;
mod identify;
mod layout;
pub mod runtime;
mod state;
pub mod stream;
mod types;

// Re-export public API
pub use auth::Auth;
pub use client::Nanoleaf;
pub use config::ClientConfig;
pub use context::Context;
pub use effects::Effects;
pub use errors::Error;
pub use http::HttpTransport;
#[cfg(feature = "http-reqwest")]
pub use http::ReqwestTransport;
pub use identify::Identify;
pub use layout::Layout;
pub use state::State;
pub use stream::Stream;
pub use types::{
    Adjustment, Color, ColorMode, ControllerInfo, EffectData, EffectsInfo, Endpoint,
    ExtControlVersion, Frame, OnOff, PanelEffect, PanelLayout, PanelLayoutInfo, PanelPosition,
    RangedValue, RhythmInfo, StateInfo, StreamEffect,
};
