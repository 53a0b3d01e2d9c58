use glam::DVec2;

use crate::api::error::{MotionError, Result};
use crate::api::types::EntityId;
use crate::components::sprite::SpriteFrame;
use crate::core::collision;
use crate::core::motion::MotionState;

/// A simulated object: fixed rectangular extents plus its own motion state.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Invisible entities never collide.
    pub visible: bool,
    /// Driving mode, vectors and limits.
    pub motion: MotionState,
    /// Animation frames (empty for shape-only entities).
    frames: Vec<SpriteFrame>,
    /// Top-left corner in world space. Only `tick` moves it.
    pos: DVec2,
    /// Width and height used for collision.
    size: DVec2,
}

impl Entity {
    /// Shape-only entity of the given size, at rest at the origin.
    pub fn shape(id: EntityId, width: f64, height: f64) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            motion: MotionState::at_rest(),
            frames: Vec::new(),
            pos: DVec2::ZERO,
            size: DVec2::new(width, height),
        }
    }

    /// Animated entity sized after its first frame.
    pub fn animated(id: EntityId, frames: Vec<SpriteFrame>) -> Result<Self> {
        let first = frames.first().ok_or(MotionError::EmptySpriteSheet)?;
        let mut entity = Self::shape(id, first.width, first.height);
        entity.frames = frames;
        Ok(entity)
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Initial placement of the top-left corner.
    pub fn with_pos(mut self, pos: DVec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_motion(mut self, motion: MotionState) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // -- Accessors --

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn frames(&self) -> &[SpriteFrame] {
        &self.frames
    }

    // -- Per-frame operations --

    /// Advance motion by `dt` and move. Returns the new position.
    pub fn tick(&mut self, dt: f64) -> DVec2 {
        self.pos += self.motion.advance(dt);
        self.pos
    }

    /// Overlap test against an optional other entity; `None` never collides.
    pub fn detect_collision(&self, other: Option<&Entity>) -> bool {
        other.is_some_and(|other| collision::overlaps(self, other))
    }
}
