//! Planar vector with an attached direction angle.
//!
//! The angle is an annotation the caller keeps in step with the components.
//! Only the angle setters recompute `x`/`y`; raw component writes, in-place
//! sums and scaling leave the stored angle exactly as it was.

use std::fmt;

use glam::DVec2;

/// A 2D quantity (force, acceleration, velocity, friction) with Cartesian
/// components and the angle it was last pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    x: f64,
    y: f64,
    angle: f64,
}

impl Vector2D {
    /// Build a vector from per-axis magnitudes pre-rotated by `angle`:
    /// stores `x·cos(angle)` and `y·sin(angle)`.
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x: Self::rotate_x(x, angle),
            y: Self::rotate_y(y, angle),
            angle,
        }
    }

    /// The zero vector with a zero angle.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Component along the x axis.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Component along the y axis.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The stored direction annotation (not re-derived from `x`/`y`).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    // -- Angle-based setters --

    /// Point the vector at `angle`, keeping its current norm.
    pub fn set_angle(&mut self, angle: f64) {
        let norm = self.norm();
        self.x = Self::rotate_x(norm, angle);
        self.y = Self::rotate_y(norm, angle);
        self.angle = angle;
    }

    /// Turn the vector by `delta` relative to its stored angle.
    pub fn add_angle(&mut self, delta: f64) {
        self.set_angle(self.angle + delta);
    }

    // -- Raw setters (angle untouched) --

    /// Overwrite the x component. The stored angle is not updated.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Overwrite the y component. The stored angle is not updated.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Overwrite both components. The stored angle is not updated.
    pub fn set_magnitudes(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    // -- Arithmetic --

    /// In-place parallelogram sum.
    pub fn sum(&mut self, other: &Vector2D) {
        self.sum_xy(other.x, other.y);
    }

    /// In-place sum with raw deltas.
    pub fn sum_xy(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// In-place uniform scale.
    pub fn scalar_prod(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
    }

    /// Dot product with `other`.
    pub fn dot_prod(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the components.
    pub fn norm(&self) -> f64 {
        Self::calculate_norm(self.x, self.y)
    }

    /// Components as a glam vector, angle dropped.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    // -- Pure helpers --

    /// New vector holding `a + b`. The angle is derived with `atan(y/x)`, so
    /// it folds the left half-plane onto the right one and is NaN or ±π/2
    /// when the summed `x` is zero.
    pub fn summed(a: &Vector2D, b: &Vector2D) -> Vector2D {
        let x = a.x + b.x;
        let y = a.y + b.y;
        Vector2D::new(x, y, Self::angle_of(x, y))
    }

    /// Dot product of `a` and `b`.
    pub fn dot(a: &Vector2D, b: &Vector2D) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// Euclidean length of `(x, y)`.
    pub fn calculate_norm(x: f64, y: f64) -> f64 {
        (x * x + y * y).sqrt()
    }

    /// Project `x` onto the x axis of a direction: `x·cos(angle)`.
    pub fn rotate_x(x: f64, angle: f64) -> f64 {
        x * angle.cos()
    }

    /// Project `y` onto the y axis of a direction: `y·sin(angle)`.
    pub fn rotate_y(y: f64, angle: f64) -> f64 {
        y * angle.sin()
    }

    /// Quadrant-unaware direction of `(x, y)`.
    pub fn angle_of(x: f64, y: f64) -> f64 {
        (y / x).atan()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.as_dvec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn raw(x: f64, y: f64) -> Vector2D {
        let mut v = Vector2D::zero();
        v.set_magnitudes(x, y);
        v
    }

    #[test]
    fn norm_of_three_four() {
        assert_eq!(raw(3.0, 4.0).norm(), 5.0);
        assert_eq!(Vector2D::zero().norm(), 0.0);
    }

    #[test]
    fn new_pre_rotates_magnitudes() {
        let v = Vector2D::new(2.0, 2.0, FRAC_PI_4);
        let expected = 2.0 * FRAC_PI_4.cos();
        assert!((v.x() - expected).abs() < EPS);
        assert!((v.y() - 2.0 * FRAC_PI_4.sin()).abs() < EPS);
        assert_eq!(v.angle(), FRAC_PI_4);

        // Angle zero keeps x and wipes y.
        let flat = Vector2D::new(3.0, 7.0, 0.0);
        assert_eq!(flat.x(), 3.0);
        assert_eq!(flat.y(), 0.0);
    }

    #[test]
    fn set_angle_keeps_norm() {
        let mut v = raw(3.0, 4.0);
        v.set_angle(FRAC_PI_2);
        assert!(v.x().abs() < EPS);
        assert!((v.y() - 5.0).abs() < EPS);
        assert!((v.norm() - 5.0).abs() < EPS);
        assert_eq!(v.angle(), FRAC_PI_2);
    }

    #[test]
    fn add_angle_is_relative() {
        let mut v = raw(1.0, 0.0);
        v.set_angle(FRAC_PI_4);
        v.add_angle(FRAC_PI_4);
        assert!((v.angle() - FRAC_PI_2).abs() < EPS);
        assert!(v.x().abs() < EPS);
        assert!((v.y() - 1.0).abs() < EPS);
    }

    #[test]
    fn raw_updates_leave_angle_stale() {
        let mut v = raw(1.0, 0.0);
        v.set_angle(PI);
        v.set_magnitudes(0.0, 3.0);
        assert_eq!(v.angle(), PI);
        v.set_x(2.0);
        v.sum_xy(1.0, 1.0);
        v.scalar_prod(2.0);
        assert_eq!(v.angle(), PI);
        assert_eq!((v.x(), v.y()), (6.0, 8.0));
    }

    #[test]
    fn sum_and_dot() {
        let mut a = raw(1.0, 2.0);
        let b = raw(3.0, -1.0);
        assert_eq!(a.dot_prod(&b), 1.0);
        assert_eq!(Vector2D::dot(&a, &b), 1.0);
        a.sum(&b);
        assert_eq!((a.x(), a.y()), (4.0, 1.0));
    }

    #[test]
    fn summed_uses_quadrant_unaware_angle() {
        let a = raw(-1.0, 0.0);
        let b = raw(0.0, -1.0);
        let s = Vector2D::summed(&a, &b);
        // (-1, -1) points into the third quadrant, atan(y/x) reports π/4.
        assert!((s.angle() - FRAC_PI_4).abs() < EPS);
        // Magnitudes are then re-rotated by that angle on construction.
        assert!((s.x() - (-1.0 * FRAC_PI_4.cos())).abs() < EPS);
        assert!((s.y() - (-1.0 * FRAC_PI_4.sin())).abs() < EPS);
    }

    #[test]
    fn angle_of_vertical_is_degenerate() {
        assert!((Vector2D::angle_of(0.0, 1.0) - FRAC_PI_2).abs() < EPS);
        assert!(Vector2D::angle_of(0.0, 0.0).is_nan());
    }

    #[test]
    fn display_and_dvec2() {
        let v = raw(1.5, -2.0);
        assert_eq!(v.to_string(), "(1.5,-2)");
        assert_eq!(DVec2::from(v), DVec2::new(1.5, -2.0));
    }
}
