//! Geometric primitives: Point and Offset

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// An absolute position in the coordinate space of raw pointer events.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// A 2D displacement.
///
/// Deltas between pointer samples, accumulated drag distances and projected
/// updates are all offsets; positions are [`Point`]s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    /// Magnitude of the displacement.
    pub fn distance(&self) -> f32 {
        self.distance_squared().sqrt()
    }

    /// Squared magnitude, for threshold checks that don't need the root.
    pub fn distance_squared(&self) -> f32 {
        self.dx * self.dx + self.dy * self.dy
    }

    pub fn abs_dx(&self) -> f32 {
        self.dx.abs()
    }

    pub fn abs_dy(&self) -> f32 {
        self.dy.abs()
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl SubAssign for Offset {
    fn sub_assign(&mut self, rhs: Offset) {
        self.dx -= rhs.dx;
        self.dy -= rhs.dy;
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.dx, -self.dy)
    }
}

impl Mul<f32> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f32) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Div<f32> for Offset {
    type Output = Offset;

    fn div(self, rhs: f32) -> Offset {
        Offset::new(self.dx / rhs, self.dy / rhs)
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Offset> for Point {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_offset() {
        let a = Point::new(10.0, 4.0);
        let b = Point::new(7.0, 8.0);
        assert_eq!(a - b, Offset::new(3.0, -4.0));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn offset_distance() {
        let offset = Offset::new(3.0, -4.0);
        assert_eq!(offset.distance(), 5.0);
        assert_eq!(offset.distance_squared(), 25.0);
        assert_eq!(offset.abs_dx(), 3.0);
        assert_eq!(offset.abs_dy(), 4.0);
    }

    #[test]
    fn offset_accumulates() {
        let mut pending = Offset::ZERO;
        assert!(pending.is_zero());
        pending += Offset::new(1.5, 0.0);
        pending += Offset::new(0.0, -2.0);
        assert_eq!(pending, Offset::new(1.5, -2.0));
        assert_eq!(-pending * 2.0, Offset::new(-3.0, 4.0));
    }
}
