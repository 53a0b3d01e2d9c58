//! Scene-wide motion helpers driven once per frame.

use crate::api::types::CollisionPair;
use crate::core::collision::overlaps;
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;

/// Tick every entity once with `dt`.
pub fn tick_motion(scene: &mut Scene, dt: f64) {
    for entity in scene.iter_mut() {
        entity.tick(dt);
    }
}

/// Test every pair and push the overlapping ones into `out`.
pub fn collect_collisions(scene: &Scene, out: &mut Vec<CollisionPair>) {
    for (a, b) in scene.pairs() {
        if overlaps(a, b) {
            out.push(CollisionPair {
                entity_a: a.id,
                entity_b: b.id,
            });
        }
    }
}

/// Feed a variable frame time through `timestep` and run the resulting fixed
/// ticks. Returns how many ticks ran.
pub fn step_motion(scene: &mut Scene, timestep: &mut FixedTimestep, frame_dt: f64) -> u32 {
    let steps = timestep.accumulate(frame_dt);
    for _ in 0..steps {
        tick_motion(scene, timestep.dt());
    }
    if steps > 0 {
        log::trace!("ran {} motion ticks for frame dt {}", steps, frame_dt);
    }
    steps
}
