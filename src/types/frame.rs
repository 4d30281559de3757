//! Stream effect data model: frames, panel effects and whole stream effects.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::Color;

/// One color target for a single panel, reached over `transition` device ticks.
///
/// Every field maps to one byte on the wire, so out-of-range values cannot be
/// represented. Use [`Frame::checked`] when starting from wider integers.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub transition: u8,
}

impl Frame {
    pub fn new(red: u8, green: u8, blue: u8, transition: u8) -> Self {
        Frame {
            red,
            green,
            blue,
            transition,
        }
    }

    pub fn from_color(color: &Color, transition: u8) -> Self {
        Frame::new(color.red, color.green, color.blue, transition)
    }

    /// Build a frame from wider integers, rejecting anything outside 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanoleaf_rs::Frame;
    ///
    /// assert!(Frame::checked(255, 0, 10, 4).is_ok());
    /// assert!(Frame::checked(256, 0, 10, 4).is_err());
    /// assert!(Frame::checked(0, -1, 10, 4).is_err());
    /// ```
    pub fn checked(red: i64, green: i64, blue: i64, transition: i64) -> Result<Self, Error> {
        Ok(Frame {
            red: to_byte("red", red)?,
            green: to_byte("green", green)?,
            blue: to_byte("blue", blue)?,
            transition: to_byte("transition", transition)?,
        })
    }

    pub fn color(&self) -> Color {
        Color::rgb(self.red, self.green, self.blue)
    }
}

/// An ordered frame sequence for one panel.
///
/// Frames are played by the device in the order given. A panel effect without
/// frames still counts towards the panel total but changes nothing.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PanelEffect {
    pub id: u8,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl PanelEffect {
    pub fn new(id: u8) -> Self {
        PanelEffect {
            id,
            frames: Vec::new(),
        }
    }

    /// Like [`PanelEffect::new`], but for panel IDs held in a wider integer.
    pub fn checked(id: i64) -> Result<Self, Error> {
        Ok(PanelEffect::new(to_byte("panel id", id)?))
    }

    /// Append a frame.
    pub fn frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }
}

/// A set of panel effects sent together as one datagram.
///
/// Panels are addressed by ID, so order only affects encoding. Duplicate IDs
/// are encoded as given.
///
/// # Examples
///
/// ```
/// use nanoleaf_rs::{Frame, PanelEffect, StreamEffect};
///
/// let effect = StreamEffect::new()
///     .panel(PanelEffect::new(5).frame(Frame::new(10, 20, 30, 4)))
///     .panel(PanelEffect::new(7));
/// assert_eq!(effect.panels.len(), 2);
/// assert!(!effect.is_empty());
/// ```
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StreamEffect {
    #[serde(default)]
    pub panels: Vec<PanelEffect>,
}

impl StreamEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a panel effect.
    pub fn panel(mut self, panel: PanelEffect) -> Self {
        self.panels.push(panel);
        self
    }

    /// Set every listed panel to the same single frame.
    pub fn solid<I>(panel_ids: I, frame: Frame) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        StreamEffect {
            panels: panel_ids
                .into_iter()
                .map(|id| PanelEffect::new(id).frame(frame))
                .collect(),
        }
    }

    /// True when there are no panel effects, i.e. nothing worth sending.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

fn to_byte(field: &'static str, value: i64) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| Error::out_of_range(field, value))
}
