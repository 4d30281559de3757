//! RGB colors for panel frames.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse from comma-separated string (e.g., "255,128,0").
    ///
    /// ```
    /// use std::str::FromStr;
    /// use nanoleaf_rs::Color;
    ///
    /// assert_eq!(Color::from_str("255,128,0"), Ok(Color::rgb(255, 128, 0)));
    /// assert!(Color::from_str("256,0,0").is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, String> {
        let parts = s
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| format!("invalid color component: {e}"))?;
        match parts[..] {
            [red, green, blue] => Ok(Self::rgb(red, green, blue)),
            _ => Err("Expected format: r,g,b".into()),
        }
    }
}
