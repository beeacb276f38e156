//! Two dimensional pointer velocity.

use crate::Offset;
use std::ops::{Add, Neg, Sub};

/// Speed and direction of a pointer, in logical pixels per second.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub pixels_per_second: Offset,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity {
        pixels_per_second: Offset::ZERO,
    };

    pub const fn new(pixels_per_second: Offset) -> Self {
        Self { pixels_per_second }
    }

    pub fn speed(&self) -> f32 {
        self.pixels_per_second.distance()
    }

    pub fn is_zero(&self) -> bool {
        self.pixels_per_second.is_zero()
    }

    /// Scales the velocity so its magnitude lies in `[min_value, max_value]`,
    /// keeping the direction.
    ///
    /// The zero velocity has no direction and is returned unchanged.
    pub fn clamp_magnitude(&self, min_value: f32, max_value: f32) -> Velocity {
        debug_assert!(min_value >= 0.0, "min_value must be non-negative");
        debug_assert!(
            max_value >= min_value,
            "max_value {max_value} below min_value {min_value}"
        );

        let value_squared = self.pixels_per_second.distance_squared();
        if value_squared == 0.0 {
            return Velocity::ZERO;
        }
        if value_squared > max_value * max_value {
            let scale = max_value / value_squared.sqrt();
            return Velocity::new(self.pixels_per_second * scale);
        }
        if value_squared < min_value * min_value {
            let scale = min_value / value_squared.sqrt();
            return Velocity::new(self.pixels_per_second * scale);
        }
        *self
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity::new(self.pixels_per_second + rhs.pixels_per_second)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity::new(self.pixels_per_second - rhs.pixels_per_second)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity::new(-self.pixels_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn clamp_scales_down_keeping_direction() {
        let velocity = Velocity::new(Offset::new(6_000.0, 8_000.0));
        let clamped = velocity.clamp_magnitude(50.0, 5_000.0);
        assert!(approx(clamped.speed(), 5_000.0), "got {}", clamped.speed());
        assert!(approx(clamped.pixels_per_second.dx, 3_000.0));
        assert!(approx(clamped.pixels_per_second.dy, 4_000.0));
    }

    #[test]
    fn clamp_scales_up_to_minimum() {
        let velocity = Velocity::new(Offset::new(0.0, -10.0));
        let clamped = velocity.clamp_magnitude(50.0, 8_000.0);
        assert_eq!(clamped, Velocity::new(Offset::new(0.0, -50.0)));
    }

    #[test]
    fn clamp_leaves_in_range_and_zero_untouched() {
        let velocity = Velocity::new(Offset::new(300.0, 400.0));
        assert_eq!(velocity.clamp_magnitude(50.0, 8_000.0), velocity);
        assert_eq!(Velocity::ZERO.clamp_magnitude(50.0, 8_000.0), Velocity::ZERO);
    }
}
