/// Identifies which texture atlas a frame belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// Opaque handle to one already-loaded animation frame.
///
/// Decoding and frame selection happen outside this crate; the motion core
/// only reads the pixel size, and only from the first frame of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    /// Which atlas this frame lives in.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
    /// Frame width in world units.
    pub width: f64,
    /// Frame height in world units.
    pub height: f64,
}

impl SpriteFrame {
    pub fn new(atlas: AtlasId, col: u32, row: u32, width: f64, height: f64) -> Self {
        Self { atlas, col, row, width, height }
    }
}
