//! Value types exchanged with the controller.

mod color;
mod controller;
mod effect;
mod endpoint;
mod frame;
mod layout;
mod range;

pub use color::Color;
pub use controller::{
    ColorMode, ControllerInfo, EffectsInfo, OnOff, PanelLayoutInfo, RhythmInfo, StateInfo,
};
pub use effect::EffectData;
pub(crate) use endpoint::bind_addr;
pub use endpoint::{Endpoint, ExtControlVersion};
pub use frame::{Frame, PanelEffect, StreamEffect};
pub use layout::{PanelLayout, PanelPosition};
pub use range::{Adjustment, RangedValue};
