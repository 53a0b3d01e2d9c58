use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::error::Result;

/// Atlases and named frames that the external loader has already decoded.
/// Only geometry is described here; pixels never reach this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub atlases: Vec<AtlasDescriptor>,
    /// Named frame lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// One texture atlas laid out as a uniform grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    /// Cell size in world units.
    pub cell_width: f64,
    pub cell_height: f64,
}

/// A named frame within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
    /// Number of cells this frame spans per side (default: 1).
    #[serde(default = "default_span")]
    pub span: u32,
}

fn default_span() -> u32 {
    1
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
