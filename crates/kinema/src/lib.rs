pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod assets;

// Re-export key types at crate root for convenience
pub use crate::api::config::{load_scene, EntityDesc, MotionDesc, SimConfig};
pub use crate::api::error::{MotionError, Result};
pub use crate::api::types::{CollisionPair, EntityId};
pub use crate::components::entity::Entity;
pub use crate::components::sprite::{AtlasId, SpriteFrame};
pub use crate::core::collision::{overlaps, Aabb};
pub use crate::core::motion::{DriveMode, MotionState};
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use crate::core::vector::Vector2D;
pub use crate::assets::manifest::AssetManifest;
pub use crate::assets::registry::SpriteRegistry;
pub use crate::systems::motion::{collect_collisions, step_motion, tick_motion};
