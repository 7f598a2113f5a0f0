use super::cell::{ColorRole, GlyphType};
use serde::Serialize;

/// Categorical attributes of one cell, in row-major order within the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub glyph: GlyphType,
    pub state: u8,
    pub role: ColorRole,
}

/// Read-only view of the scene handed to the export collaborator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub cols: u32,
    pub rows: u32,
    pub origin_col: u32,
    pub origin_row: u32,
    pub cells: Vec<CellSnapshot>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
