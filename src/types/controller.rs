//! Controller information returned by the root API path.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum_macros::EnumString;

use crate::types::{PanelLayout, RangedValue};

/// Which setting currently drives the panel colors.
#[derive(Debug, Clone, PartialEq, Eq, EnumString, DeserializeFromStr, SerializeDisplay)]
pub enum ColorMode {
    #[strum(serialize = "hs")]
    HueSaturation,
    #[strum(serialize = "ct")]
    ColorTemperature,
    #[strum(serialize = "effect")]
    Effect,
    #[strum(default)]
    Other(String),
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::HueSaturation => f.write_str("hs"),
            ColorMode::ColorTemperature => f.write_str("ct"),
            ColorMode::Effect => f.write_str("effect"),
            ColorMode::Other(mode) => f.write_str(mode),
        }
    }
}

#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OnOff {
    pub value: bool,
}

/// Live state section of [`ControllerInfo`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StateInfo {
    pub on: OnOff,
    pub brightness: RangedValue,
    pub hue: RangedValue,
    pub sat: RangedValue,
    pub ct: RangedValue,
    #[serde(rename = "colorMode")]
    pub color_mode: ColorMode,
}

#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EffectsInfo {
    #[serde(rename = "select", default)]
    pub selected: Option<String>,
    #[serde(rename = "effectsList", default)]
    pub list: Vec<String>,
}

#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PanelLayoutInfo {
    #[serde(default)]
    pub layout: PanelLayout,
    #[serde(rename = "globalOrientation", default)]
    pub global_orientation: RangedValue,
}

/// Rhythm module status. The controller spells the keys `rhythm*`.
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RhythmInfo {
    #[serde(rename = "rhythmConnected", default)]
    pub connected: bool,
    #[serde(rename = "rhythmActive", default)]
    pub active: Option<bool>,
    #[serde(rename = "rhythmId", default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub hardware_version: Option<String>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default)]
    pub aux_available: Option<bool>,
    #[serde(rename = "rhythmMode", default)]
    pub mode: Option<u32>,
}

/// Everything the controller reports about itself in one request.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControllerInfo {
    pub name: String,
    #[serde(rename = "serialNo")]
    pub serial: String,
    pub manufacturer: String,
    pub firmware_version: String,
    pub model: String,
    pub state: StateInfo,
    #[serde(default)]
    pub effects: EffectsInfo,
    #[serde(default)]
    pub panel_layout: PanelLayoutInfo,
    #[serde(default)]
    pub rhythm: Option<RhythmInfo>,
}
