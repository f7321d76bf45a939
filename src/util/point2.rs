use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::util::vec2::Vec2;

/// 2D point in playfield space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from the origin to this point
    #[inline]
    pub fn to_vector(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Impact vector toward another point.
    ///
    /// Note: this is the coordinate-wise absolute difference, not a directed
    /// difference. Sign information is discarded, so the vector always lies
    /// in the first quadrant. Collision resolution depends on exactly this
    /// convention; see `impact_vector_discards_direction_signs`.
    pub fn impact_vector(&self, other: Point2) -> Vec2 {
        Vec2::new((other.x - self.x).abs(), (other.y - self.y).abs())
    }

    /// Unit vector along the impact vector.
    ///
    /// Precondition: the two points are distinct, otherwise the zero impact
    /// vector normalizes to NaN.
    pub fn impact_direction(&self, other: Point2) -> Vec2 {
        self.impact_vector(other).unit()
    }

    /// Unit vector perpendicular to the impact vector
    pub fn contact_vector(&self, other: Point2) -> Vec2 {
        self.impact_vector(other).normal()
    }

    /// Direction of the contact vector; already unit length
    pub fn contact_direction(&self, other: Point2) -> Vec2 {
        self.contact_vector(other)
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Vec2> for Point2 {
    type Output = Self;
    fn add(self, rhs: Vec2) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Point2> for Vec2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        rhs + self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_add_point() {
        let p = Point2::new(1.0, 2.0) + Point2::new(3.0, 4.0);
        assert_eq!(p, Point2::new(4.0, 6.0));
    }

    #[test]
    fn test_add_vector_both_orders() {
        let p = Point2::new(1.0, 2.0);
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(p + v, Point2::new(4.0, 6.0));
        assert_eq!(v + p, Point2::new(4.0, 6.0));
    }

    #[test]
    fn test_to_vector() {
        let v = Point2::new(-1.0, 2.0).to_vector();
        assert_eq!(v, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!(approx_eq(a.distance(b), 5.0));
        assert!(approx_eq(b.distance(a), 5.0));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point2::new(1.5, -2.5);
        assert!(approx_eq(p.distance(p), 0.0));
    }

    #[test]
    fn impact_vector_discards_direction_signs() {
        // Pins the absolute-difference convention: the impact vector toward a
        // point below and to the left still has positive components.
        let a = Point2::new(5.0, 5.0);
        let b = Point2::new(2.0, 1.0);
        assert_eq!(a.impact_vector(b), Vec2::new(3.0, 4.0));
        assert_eq!(b.impact_vector(a), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_impact_direction_is_unit() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        let d = a.impact_direction(b);
        assert!(approx_eq(d.magnitude(), 1.0));
        assert!(approx_eq(d.x, 0.6));
        assert!(approx_eq(d.y, 0.8));
    }

    #[test]
    fn test_contact_vector_is_unit_and_perpendicular() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        let contact = a.contact_vector(b);
        assert!(approx_eq(contact.magnitude(), 1.0));
        assert!(approx_eq(contact.dot(a.impact_vector(b)), 0.0));
    }

    #[test]
    fn test_contact_direction_equals_contact_vector() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(a.contact_direction(b), a.contact_vector(b));
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Point2::new(7.0, -3.0);
        let encoded = serde_json::to_string(&p).unwrap();
        let decoded: Point2 = serde_json::from_str(&encoded).unwrap();
        assert_eq!(p, decoded);
    }
}
