//! Circular massed body: motion integration, impact queries, and
//! momentum-conserving collision resolution along the line of centers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::point2::Point2;
use crate::util::vec2::Vec2;

/// Collision resolution errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollisionError {
    #[error("coefficient of restitution must be within [0.0, 1.0], got {0}")]
    RestitutionOutOfRange(f64),
}

/// A moving circular body with mass.
///
/// Radius and mass are fixed at construction. Position and velocity change
/// only through [`Body::advance`], [`Body::shift`] and [`Body::collide_with`],
/// plus the boundary clamp the ship applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    center: Point2,
    velocity: Vec2,
    radius: f64,
    mass: f64,
}

impl Body {
    pub fn new(center: Point2, velocity: Vec2, radius: f64, mass: f64) -> Self {
        Self {
            center,
            velocity,
            radius,
            mass,
        }
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Integrate one step of motion: center += velocity
    pub fn advance(&mut self) {
        self.center = self.center + self.velocity;
    }

    /// Apply a velocity change: velocity += force
    pub fn shift(&mut self, force: Vec2) {
        self.velocity += force;
    }

    /// Reposition the center without touching velocity.
    ///
    /// Reserved for boundary clamping; general movement goes through
    /// [`Body::advance`].
    pub(crate) fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Zero out the velocity on both axes
    pub(crate) fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Euclidean distance from this body's center to a point
    pub fn distance_to(&self, point: Point2) -> f64 {
        self.center.distance(point)
    }

    /// Whether a point lies on or inside this body's circle
    pub fn impacts_point(&self, point: Point2) -> bool {
        self.distance_to(point) <= self.radius
    }

    /// Gap between this body and another.
    ///
    /// Zero for the same body (identity, not value equality) and for
    /// overlapping or touching circles; otherwise the non-negative distance
    /// between their edges.
    pub fn distance(&self, other: &Body) -> f64 {
        if std::ptr::eq(self, other) {
            return 0.0;
        }

        let between_centers = self.center.distance(other.center);
        let radii = self.radius + other.radius;

        if between_centers < radii {
            0.0
        } else {
            between_centers - radii
        }
    }

    /// Whether this body touches or overlaps another.
    ///
    /// A body never impacts itself.
    pub fn impacts(&self, other: &Body) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.distance(other) <= 0.0
    }

    /// Momentum carried by this body
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// Kinetic energy carried by this body
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_sq()
    }

    /// Resolve a collision between this body and `target`.
    ///
    /// Exchanges momentum along the line of centers only; tangential
    /// velocity components are untouched. `restitution` of 1 is perfectly
    /// elastic, 0 perfectly inelastic. Values outside [0, 1] are rejected
    /// before either velocity is mutated.
    ///
    /// Precondition: the two centers are distinct. Coincident centers make
    /// the impact direction degenerate (see [`Vec2::unit`]).
    pub fn collide_with(
        &mut self,
        target: &mut Body,
        restitution: f64,
    ) -> Result<(), CollisionError> {
        if !(0.0..=1.0).contains(&restitution) {
            return Err(CollisionError::RestitutionOutOfRange(restitution));
        }

        let direction = self.center.impact_direction(target.center);

        let our_impact_velocity = self.velocity.vector_project(direction);
        let their_impact_velocity = target.velocity.vector_project(direction);
        let delta_velocity = their_impact_velocity - our_impact_velocity;

        let reduced_mass = self.mass * target.mass / (self.mass + target.mass);
        let impulse = delta_velocity * (reduced_mass * (1.0 + restitution));

        self.shift(impulse / self.mass);
        target.shift(-(impulse / target.mass));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn body_at(x: f64, y: f64, velocity: Vec2, radius: f64, mass: f64) -> Body {
        Body::new(Point2::new(x, y), velocity, radius, mass)
    }

    #[test]
    fn test_advance_changes_center_only() {
        let mut body = body_at(1.0, 2.0, Vec2::new(0.5, -0.5), 1.0, 10.0);
        body.advance();
        assert_eq!(body.center(), Point2::new(1.5, 1.5));
        assert_eq!(body.velocity(), Vec2::new(0.5, -0.5));
    }

    #[test]
    fn test_shift_changes_velocity_only() {
        let mut body = body_at(1.0, 2.0, Vec2::new(1.0, 0.0), 1.0, 10.0);
        body.shift(Vec2::new(0.0, 2.0));
        assert_eq!(body.velocity(), Vec2::new(1.0, 2.0));
        assert_eq!(body.center(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_distance_to_point() {
        let body = body_at(0.0, 0.0, Vec2::ZERO, 1.0, 1.0);
        assert!(approx_eq(body.distance_to(Point2::new(3.0, 4.0)), 5.0));
    }

    #[test]
    fn test_impacts_point() {
        let body = body_at(0.0, 0.0, Vec2::ZERO, 2.0, 1.0);
        assert!(body.impacts_point(Point2::new(2.0, 0.0)));
        assert!(body.impacts_point(Point2::new(1.0, 1.0)));
        assert!(!body.impacts_point(Point2::new(2.1, 0.0)));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let body = body_at(5.0, 5.0, Vec2::ZERO, 1.0, 1.0);
        assert_eq!(body.distance(&body), 0.0);
    }

    #[test]
    fn test_body_never_impacts_itself() {
        let body = body_at(5.0, 5.0, Vec2::ZERO, 1.0, 1.0);
        assert!(!body.impacts(&body));
    }

    #[test]
    fn test_distance_between_separated_bodies_is_edge_gap() {
        let a = body_at(0.0, 0.0, Vec2::ZERO, 1.0, 1.0);
        let b = body_at(10.0, 0.0, Vec2::ZERO, 2.0, 1.0);
        assert!(approx_eq(a.distance(&b), 7.0));
        assert!(!a.impacts(&b));
    }

    #[test]
    fn test_distance_between_overlapping_bodies_is_zero() {
        let a = body_at(0.0, 0.0, Vec2::ZERO, 2.0, 1.0);
        let b = body_at(3.0, 0.0, Vec2::ZERO, 2.0, 1.0);
        assert_eq!(a.distance(&b), 0.0);
        assert!(a.impacts(&b));
    }

    #[test]
    fn test_identical_value_bodies_are_distinct_objects() {
        // Value equality is not identity: two equal bodies at the same spot
        // still impact each other.
        let a = body_at(1.0, 1.0, Vec2::ZERO, 1.0, 1.0);
        let b = a;
        assert!(a.impacts(&b));
    }

    #[test]
    fn test_elastic_collision_swaps_velocities_for_equal_masses() {
        let mut a = body_at(0.0, 0.0, Vec2::new(2.0, 0.0), 1.0, 5.0);
        let mut b = body_at(1.5, 0.0, Vec2::new(-1.0, 0.0), 1.0, 5.0);

        a.collide_with(&mut b, 1.0).unwrap();

        assert!(a.velocity().approx_eq(Vec2::new(-1.0, 0.0), EPSILON));
        assert!(b.velocity().approx_eq(Vec2::new(2.0, 0.0), EPSILON));
    }

    #[test]
    fn test_elastic_collision_conserves_momentum_and_energy() {
        let mut a = body_at(0.0, 0.0, Vec2::new(3.0, 0.0), 1.0, 2.0);
        let mut b = body_at(1.8, 0.0, Vec2::new(-1.0, 0.0), 1.0, 6.0);

        let momentum_before = a.momentum() + b.momentum();
        let energy_before = a.kinetic_energy() + b.kinetic_energy();

        a.collide_with(&mut b, 1.0).unwrap();

        let momentum_after = a.momentum() + b.momentum();
        let energy_after = a.kinetic_energy() + b.kinetic_energy();

        assert!(momentum_before.approx_eq(momentum_after, EPSILON));
        assert!(approx_eq(energy_before, energy_after));
    }

    #[test]
    fn test_inelastic_collision_equalizes_impact_axis_velocity() {
        let mut a = body_at(0.0, 0.0, Vec2::new(4.0, 0.0), 1.0, 3.0);
        let mut b = body_at(1.0, 0.0, Vec2::new(-2.0, 0.0), 1.0, 1.0);

        a.collide_with(&mut b, 0.0).unwrap();

        // Both bodies end with the common center-of-mass velocity along x
        let expected = (3.0 * 4.0 + 1.0 * -2.0) / 4.0;
        assert!(approx_eq(a.velocity().x, expected));
        assert!(approx_eq(b.velocity().x, expected));
    }

    #[test]
    fn test_inelastic_collision_conserves_momentum() {
        let mut a = body_at(0.0, 0.0, Vec2::new(1.0, 0.0), 1.0, 10.0);
        let mut b = body_at(2.0, 0.0, Vec2::new(0.0, 0.0), 1.0, 5.0);

        let momentum_before = a.momentum() + b.momentum();
        a.collide_with(&mut b, 0.0).unwrap();
        let momentum_after = a.momentum() + b.momentum();

        assert!(momentum_before.approx_eq(momentum_after, EPSILON));
    }

    #[test]
    fn test_collision_leaves_tangential_velocity_untouched() {
        // Impact axis is x; y components must pass through unchanged
        let mut a = body_at(0.0, 0.0, Vec2::new(2.0, 3.0), 1.0, 1.0);
        let mut b = body_at(1.0, 0.0, Vec2::new(-2.0, -5.0), 1.0, 1.0);

        a.collide_with(&mut b, 1.0).unwrap();

        assert!(approx_eq(a.velocity().y, 3.0));
        assert!(approx_eq(b.velocity().y, -5.0));
    }

    #[test]
    fn test_restitution_below_range_is_rejected() {
        let mut a = body_at(0.0, 0.0, Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = body_at(1.0, 0.0, Vec2::new(-1.0, 0.0), 1.0, 1.0);

        let err = a.collide_with(&mut b, -0.1).unwrap_err();

        assert_eq!(err, CollisionError::RestitutionOutOfRange(-0.1));
        assert_eq!(a.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_restitution_above_range_is_rejected() {
        let mut a = body_at(0.0, 0.0, Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = body_at(1.0, 0.0, Vec2::new(-1.0, 0.0), 1.0, 1.0);

        let err = a.collide_with(&mut b, 1.1).unwrap_err();

        assert_eq!(err, CollisionError::RestitutionOutOfRange(1.1));
        assert_eq!(a.velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_restitution_bounds_are_inclusive() {
        let mut a = body_at(0.0, 0.0, Vec2::new(1.0, 0.0), 1.0, 1.0);
        let mut b = body_at(1.0, 0.0, Vec2::new(-1.0, 0.0), 1.0, 1.0);

        assert!(a.collide_with(&mut b, 0.0).is_ok());
        assert!(a.collide_with(&mut b, 1.0).is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let body = body_at(1.0, 2.0, Vec2::new(0.1, 0.2), 1.5, 12.0);
        let encoded = serde_json::to_string(&body).unwrap();
        let decoded: Body = serde_json::from_str(&encoded).unwrap();
        assert_eq!(body, decoded);
    }
}
