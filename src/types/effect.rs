//! Stored effect descriptions.

use serde::{Deserialize, Serialize};

/// Definition of an effect stored on the controller.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EffectData {
    #[serde(rename = "animName")]
    pub name: String,
    #[serde(rename = "animType")]
    pub anim_type: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(rename = "animData", default)]
    pub data: Option<String>,
    #[serde(rename = "loop", default)]
    pub looping: bool,
}
