//! Panel layout types.

use serde::{Deserialize, Serialize};

/// Position of one panel in the layout coordinate system.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PanelPosition {
    #[serde(rename = "panelId")]
    pub id: u16,
    pub x: i32,
    pub y: i32,
    /// Orientation in degrees.
    #[serde(rename = "o", default)]
    pub orientation: i32,
    #[serde(rename = "shapeType", default)]
    pub shape_type: Option<u16>,
}

/// Physical arrangement of the panels attached to a controller.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PanelLayout {
    #[serde(rename = "numPanels")]
    pub num_panels: u16,
    #[serde(rename = "sideLength", default)]
    pub side_length: u16,
    #[serde(rename = "positionData", default)]
    pub positions: Vec<PanelPosition>,
}

impl PanelLayout {
    /// IDs of the panels that fit the single-byte streaming address space.
    ///
    /// Controller-only entries (panel ID 0) are included as reported.
    pub fn stream_panel_ids(&self) -> Vec<u8> {
        self.positions
            .iter()
            .filter_map(|p| u8::try_from(p.id).ok())
            .collect()
    }
}
