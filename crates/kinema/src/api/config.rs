//! JSON-loadable descriptors for entities and the tick loop.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::error::Result;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::motion::MotionState;
use crate::core::scene::Scene;

/// Settings for driving ticks from variable frame times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed tick length handed to `Entity::tick` (default: 1/60).
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f64,
    /// Most ticks run for a single frame (default: 10).
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: default_fixed_dt(),
            max_steps: default_max_steps(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_fixed_dt() -> f64 {
    1.0 / 60.0
}

fn default_max_steps() -> u32 {
    10
}

fn default_visible() -> bool {
    true
}

/// Initial driving mode and its parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MotionDesc {
    /// Not moving.
    #[default]
    AtRest,
    ConstantVelocity {
        velocity: [f64; 2],
        #[serde(default)]
        friction: [f64; 2],
    },
    ConstantAcceleration {
        acceleration: [f64; 2],
        #[serde(default)]
        friction: [f64; 2],
        terminal_speed: f64,
    },
    ForceDriven {
        force: [f64; 2],
        force_limit: f64,
        mass: f64,
        #[serde(default)]
        friction: [f64; 2],
        terminal_speed: f64,
    },
}

impl MotionDesc {
    /// Build the motion state; force-driven descriptors are validated
    /// against their limit.
    pub fn build(&self) -> Result<MotionState> {
        let state = match *self {
            MotionDesc::AtRest => MotionState::at_rest(),
            MotionDesc::ConstantVelocity { velocity, friction } => {
                MotionState::constant_velocity(DVec2::from(velocity), DVec2::from(friction))
            }
            MotionDesc::ConstantAcceleration { acceleration, friction, terminal_speed } => {
                MotionState::constant_acceleration(
                    DVec2::from(acceleration),
                    DVec2::from(friction),
                    terminal_speed,
                )
            }
            MotionDesc::ForceDriven { force, force_limit, mass, friction, terminal_speed } => {
                MotionState::force_driven(
                    DVec2::from(force),
                    force_limit,
                    mass,
                    DVec2::from(friction),
                    terminal_speed,
                )?
            }
        };
        Ok(state)
    }
}

/// A shape-only entity as written in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDesc {
    pub id: EntityId,
    #[serde(default)]
    pub tag: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub pos: [f64; 2],
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub motion: MotionDesc,
}

impl EntityDesc {
    pub fn build(&self) -> Result<Entity> {
        Ok(Entity::shape(self.id, self.width, self.height)
            .with_tag(self.tag.clone())
            .with_pos(DVec2::from(self.pos))
            .with_visible(self.visible)
            .with_motion(self.motion.build()?))
    }
}

/// Parse a JSON array of entity descriptors into a scene. Fails on the first
/// descriptor that does not build.
pub fn load_scene(json: &str) -> Result<Scene> {
    let descs: Vec<EntityDesc> = serde_json::from_str(json)?;
    let mut scene = Scene::with_capacity(descs.len());
    for desc in &descs {
        scene.spawn(desc.build()?);
    }
    log::debug!("loaded scene with {} entities", scene.len());
    Ok(scene)
}
