//! Mode-driven motion integrator.
//!
//! Each entity owns one [`MotionState`]. Once per tick it runs explicit Euler
//! integration under exactly one [`DriveMode`]:
//!
//! - `ConstantVelocity`: velocity is fixed, only position moves.
//! - `ConstantAcceleration`: acceleration is fixed, velocity integrates it.
//! - `ForceDriven`: a driving force minus friction gives the acceleration.
//!
//! Modes only change through the explicit setters, never by inference.

use glam::DVec2;

use crate::api::error::{MotionError, Result};
use crate::core::vector::Vector2D;

/// Which quantity determines motion for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMode {
    #[default]
    ConstantVelocity,
    ConstantAcceleration,
    ForceDriven,
}

/// Per-entity kinematic state.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    mode: DriveMode,
    mass: f64,
    force_limit: f64,
    friction_limit: f64,
    terminal_speed: f64,
    orientation: f64,
    force: Vector2D,
    acceleration: Vector2D,
    velocity: Vector2D,
    friction: Vector2D,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl MotionState {
    /// Motionless state: constant zero velocity.
    pub fn at_rest() -> Self {
        Self {
            mode: DriveMode::ConstantVelocity,
            mass: 0.0,
            force_limit: 0.0,
            friction_limit: 0.0,
            terminal_speed: 0.0,
            orientation: 0.0,
            force: Vector2D::zero(),
            acceleration: Vector2D::zero(),
            velocity: Vector2D::zero(),
            friction: Vector2D::zero(),
        }
    }

    /// Move at a fixed `velocity`. Terminal speed becomes its norm.
    pub fn constant_velocity(velocity: DVec2, friction: DVec2) -> Self {
        let mut state = Self::at_rest();
        state.velocity.set_magnitudes(velocity.x, velocity.y);
        state.terminal_speed = Vector2D::calculate_norm(velocity.x, velocity.y);
        state.apply_friction_coefficients(friction.x, friction.y);
        state
    }

    /// Accelerate at a fixed rate, capped at `terminal_speed`.
    pub fn constant_acceleration(acceleration: DVec2, friction: DVec2, terminal_speed: f64) -> Self {
        let mut state = Self::at_rest();
        state.mode = DriveMode::ConstantAcceleration;
        state.acceleration.set_magnitudes(acceleration.x, acceleration.y);
        state.terminal_speed = terminal_speed;
        state.apply_friction_coefficients(friction.x, friction.y);
        state
    }

    /// Push with `force` on a body of `mass`. Fails when the force norm is
    /// larger than `|force_limit|`.
    pub fn force_driven(
        force: DVec2,
        force_limit: f64,
        mass: f64,
        friction: DVec2,
        terminal_speed: f64,
    ) -> Result<Self> {
        let limit = force_limit.abs();
        check_force(force.x, force.y, limit)?;
        let mut state = Self::at_rest();
        state.mode = DriveMode::ForceDriven;
        state.force.set_magnitudes(force.x, force.y);
        state.force_limit = limit;
        state.mass = mass;
        state.terminal_speed = terminal_speed;
        state.apply_friction_coefficients(friction.x, friction.y);
        Ok(state)
    }

    // -- Accessors --

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn force_limit(&self) -> f64 {
        self.force_limit
    }

    pub fn friction_limit(&self) -> f64 {
        self.friction_limit
    }

    pub fn terminal_speed(&self) -> f64 {
        self.terminal_speed
    }

    /// Shared reference angle for force, acceleration and velocity.
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn force(&self) -> &Vector2D {
        &self.force
    }

    pub fn acceleration(&self) -> &Vector2D {
        &self.acceleration
    }

    pub fn velocity(&self) -> &Vector2D {
        &self.velocity
    }

    pub fn friction(&self) -> &Vector2D {
        &self.friction
    }

    // -- Mode transitions --

    /// Switch to constant velocity `(vx, vy)`. Terminal speed follows the new
    /// norm; acceleration and force are cleared.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.velocity.set_magnitudes(vx, vy);
        self.terminal_speed = Vector2D::calculate_norm(vx, vy);
        self.acceleration.set_magnitudes(0.0, 0.0);
        self.force.set_magnitudes(0.0, 0.0);
        self.switch_mode(DriveMode::ConstantVelocity);
    }

    /// Switch to constant acceleration. `(ax, ay)` is rotated by the current
    /// orientation per axis (`ax·cos θ`, `ay·sin θ`) and written into the
    /// driving force. The acceleration the integrator reads is left as is.
    pub fn set_acceleration(&mut self, ax: f64, ay: f64) {
        let x = Vector2D::rotate_x(ax, self.orientation);
        let y = Vector2D::rotate_y(ay, self.orientation);
        self.force.set_magnitudes(x, y);
        self.switch_mode(DriveMode::ConstantAcceleration);
    }

    /// Add `magnitude` along the current orientation to the driving force.
    /// Rejected without any change if the result exceeds the force limit.
    pub fn add_force(&mut self, magnitude: f64) -> Result<()> {
        let x = self.force.x() + Vector2D::rotate_x(magnitude, self.orientation);
        let y = self.force.y() + Vector2D::rotate_y(magnitude, self.orientation);
        check_force(x, y, self.force_limit)?;
        self.force.set_magnitudes(x, y);
        self.switch_mode(DriveMode::ForceDriven);
        Ok(())
    }

    /// Replace the driving force with `(fx, fy)` rotated by the orientation and
    /// adopt `|limit|` as the new force limit. Atomic: on rejection neither the
    /// force nor the limit changes.
    pub fn set_force(&mut self, fx: f64, fy: f64, limit: f64) -> Result<()> {
        let x = fx * self.orientation.cos();
        let y = fy * self.orientation.sin();
        let limit = limit.abs();
        check_force(x, y, limit)?;
        self.force.set_magnitudes(x, y);
        self.force_limit = limit;
        self.switch_mode(DriveMode::ForceDriven);
        Ok(())
    }

    // -- Parameters --

    /// Store `|limit|` and clamp each force axis that is above it.
    pub fn set_force_limit(&mut self, limit: f64) {
        self.force_limit = limit.abs();
        if self.force.x() > self.force_limit {
            self.force.set_x(self.force_limit);
        }
        if self.force.y() > self.force_limit {
            self.force.set_y(self.force_limit);
        }
    }

    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    /// Per-axis friction coefficients, stored as absolute values.
    pub fn set_friction(&mut self, fx: f64, fy: f64) {
        self.apply_friction_coefficients(fx, fy);
    }

    pub fn set_terminal_speed(&mut self, terminal_speed: f64) {
        self.terminal_speed = terminal_speed;
    }

    // -- Steering --

    /// Turn by `delta`. Returns the new orientation.
    pub fn rotate(&mut self, delta: f64) -> f64 {
        self.orientation += delta;
        self.align_to_orientation();
        self.orientation
    }

    /// Point at an absolute `angle`.
    pub fn set_orientation(&mut self, angle: f64) {
        self.orientation = angle;
        self.align_to_orientation();
    }

    /// Bounce: negate the selected axes of the driving vector and velocity.
    pub fn recoil(&mut self, flip_x: bool, flip_y: bool) {
        let driver = match self.mode {
            DriveMode::ForceDriven => Some(&mut self.force),
            DriveMode::ConstantAcceleration => Some(&mut self.acceleration),
            DriveMode::ConstantVelocity => None,
        };
        if let Some(v) = driver {
            flip(v, flip_x, flip_y);
        }
        flip(&mut self.velocity, flip_x, flip_y);
    }

    // -- Integration --

    /// Advance one tick of `dt` and return the displacement to add to the
    /// owner's position (the post-update velocity).
    pub fn advance(&mut self, dt: f64) -> DVec2 {
        if self.mode == DriveMode::ForceDriven {
            self.apply_friction();
            self.acceleration
                .set_magnitudes(self.force.x() / self.mass, self.force.y() / self.mass);
        }

        if self.mode != DriveMode::ConstantVelocity {
            self.velocity.set_magnitudes(
                self.velocity.x() + self.acceleration.x() * dt,
                self.velocity.y() + self.acceleration.y() * dt,
            );
            let norm = self.velocity.norm();
            if norm > self.terminal_speed {
                self.velocity.scalar_prod(self.terminal_speed / norm);
            }
        }

        log::trace!(
            "advance {:?} dt={} force={} accel={} vel={}",
            self.mode, dt, self.force, self.acceleration, self.velocity
        );
        self.velocity.as_dvec2()
    }

    /// Friction opposes the sign of each velocity axis, scaled by the
    /// acceleration on that axis.
    fn apply_friction(&mut self) {
        let fx = (self.mass * self.acceleration.x() * self.friction.x()).abs();
        let fy = (self.mass * self.acceleration.y() * self.friction.y()).abs();
        let vx = self.velocity.x();
        let vy = self.velocity.y();
        if vx > 0.0 {
            self.force.set_x(self.force.x() - fx);
        } else if vx < 0.0 {
            self.force.set_x(self.force.x() + fx);
        }
        if vy > 0.0 {
            self.force.set_y(self.force.y() - fy);
        } else if vy < 0.0 {
            self.force.set_y(self.force.y() + fy);
        }
    }

    fn align_to_orientation(&mut self) {
        let angle = self.orientation;
        match self.mode {
            DriveMode::ForceDriven => {
                self.force.set_angle(angle);
                self.acceleration.set_angle(angle);
            }
            DriveMode::ConstantAcceleration => self.acceleration.set_angle(angle),
            DriveMode::ConstantVelocity => {}
        }
        self.velocity.set_angle(angle);
    }

    fn apply_friction_coefficients(&mut self, fx: f64, fy: f64) {
        self.friction.set_magnitudes(fx.abs(), fy.abs());
        self.friction_limit = Vector2D::calculate_norm(fx, fy);
    }

    fn switch_mode(&mut self, mode: DriveMode) {
        if self.mode != mode {
            log::debug!("drive mode {:?} -> {:?}", self.mode, mode);
            if mode == DriveMode::ForceDriven && self.mass <= 0.0 {
                log::warn!("force-driven motion with non-positive mass {}", self.mass);
            }
        }
        self.mode = mode;
    }
}

fn check_force(x: f64, y: f64, limit: f64) -> Result<()> {
    let norm = Vector2D::calculate_norm(x, y);
    if norm > limit {
        log::warn!("rejected force ({x}, {y}): norm {norm} > limit {limit}");
        return Err(MotionError::ForceLimitExceeded { norm, limit });
    }
    Ok(())
}

fn flip(v: &mut Vector2D, flip_x: bool, flip_y: bool) {
    if flip_x {
        v.set_x(-v.x());
    }
    if flip_y {
        v.set_y(-v.y());
    }
}
