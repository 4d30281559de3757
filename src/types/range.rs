//! Bounded values reported by the controller.

use serde::{Deserialize, Serialize};

/// A value together with the range the controller accepts for it.
///
/// Brightness, hue, saturation, color temperature and global orientation are
/// all reported in this shape.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RangedValue {
    pub value: i32,
    #[serde(default)]
    pub min: i32,
    #[serde(default)]
    pub max: i32,
}

impl RangedValue {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// How to change a ranged state value: set it outright or move it relatively.
///
/// Serializes to `{"value": n}` or `{"increment": n}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    Value(i32),
    Increment(i32),
}
