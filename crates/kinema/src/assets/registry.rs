use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteFrame};

/// Name → frame handle lookup built from an [`AssetManifest`].
///
/// Stands in for the asset loader: a name that cannot be resolved comes
/// back as `None` instead of an error, and nothing downstream inspects why.
pub struct SpriteRegistry {
    frames: HashMap<String, SpriteFrame>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
        }
    }

    /// Resolve every manifest entry. Entries pointing at a missing atlas are
    /// skipped with a warning.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut frames = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            let Some(atlas) = manifest.atlases.get(desc.atlas as usize) else {
                log::warn!("sprite '{}' references missing atlas {}", name, desc.atlas);
                continue;
            };
            let span = desc.span as f64;
            frames.insert(
                name.clone(),
                SpriteFrame::new(
                    AtlasId(desc.atlas),
                    desc.col,
                    desc.row,
                    atlas.cell_width * span,
                    atlas.cell_height * span,
                ),
            );
        }
        Self { frames }
    }

    pub fn insert(&mut self, name: impl Into<String>, frame: SpriteFrame) {
        self.frames.insert(name.into(), frame);
    }

    pub fn get(&self, name: &str) -> Option<SpriteFrame> {
        self.frames.get(name).copied()
    }

    /// Resolve an ordered frame sequence. Keeps one slot per name so callers
    /// can see which frames failed to load.
    pub fn sheet<S: AsRef<str>>(&self, names: &[S]) -> Vec<Option<SpriteFrame>> {
        names
            .iter()
            .map(|name| {
                let frame = self.get(name.as_ref());
                if frame.is_none() {
                    log::debug!("sprite '{}' not found", name.as_ref());
                }
                frame
            })
            .collect()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
