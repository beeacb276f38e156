//! Per-recognizer configuration for drag gestures.

use crate::gesture_constants::{
    MAX_FLING_VELOCITY, MIN_FLING_DISTANCE, MIN_FLING_VELOCITY, PAN_SLOP,
    PRECISE_POINTER_HIT_SLOP, PRECISE_POINTER_PAN_SLOP, TOUCH_SLOP,
};
use crate::nodes::input::types::{PointerButtons, PointerType};
use dragkit_geometry::Dp;

/// Thresholds and filters for one drag recognizer.
///
/// Fling thresholds are optional overrides; the resolved accessors fall back
/// to the platform constants in [`crate::gesture_constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    pub touch_slop: f32,
    pub pan_slop: f32,
    pub min_fling_distance: Option<f32>,
    pub min_fling_velocity: Option<f32>,
    pub max_fling_velocity: Option<f32>,
    /// Pointers whose buttons don't intersect this set are ignored.
    pub allowed_buttons: PointerButtons,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            pan_slop: PAN_SLOP,
            min_fling_distance: None,
            min_fling_velocity: None,
            max_fling_velocity: None,
            allowed_buttons: PointerButtons::PRIMARY,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the slops scaled for a display density.
    pub fn for_density(density: f32) -> Self {
        Self {
            touch_slop: Dp(TOUCH_SLOP).to_px(density),
            pan_slop: Dp(PAN_SLOP).to_px(density),
            ..Self::default()
        }
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_pan_slop(mut self, pan_slop: f32) -> Self {
        self.pan_slop = pan_slop;
        self
    }

    pub fn with_min_fling_distance(mut self, distance: f32) -> Self {
        self.min_fling_distance = Some(distance);
        self
    }

    pub fn with_min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = Some(velocity);
        self
    }

    pub fn with_max_fling_velocity(mut self, velocity: f32) -> Self {
        self.max_fling_velocity = Some(velocity);
        self
    }

    pub fn with_allowed_buttons(mut self, buttons: PointerButtons) -> Self {
        self.allowed_buttons = buttons;
        self
    }

    pub fn resolved_min_fling_distance(&self) -> f32 {
        self.min_fling_distance.unwrap_or(MIN_FLING_DISTANCE)
    }

    pub fn resolved_min_fling_velocity(&self) -> f32 {
        self.min_fling_velocity.unwrap_or(MIN_FLING_VELOCITY)
    }

    pub fn resolved_max_fling_velocity(&self) -> f32 {
        self.max_fling_velocity.unwrap_or(MAX_FLING_VELOCITY)
    }

    /// Slop thresholds for a sequence started by a pointer of `kind`.
    pub fn slop_for(&self, kind: PointerType) -> DragSlop {
        if kind.is_precise() {
            DragSlop {
                touch_slop: PRECISE_POINTER_HIT_SLOP,
                pan_slop: PRECISE_POINTER_PAN_SLOP,
            }
        } else {
            DragSlop {
                touch_slop: self.touch_slop,
                pan_slop: self.pan_slop,
            }
        }
    }
}

/// Slop thresholds resolved for the current gesture sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSlop {
    pub touch_slop: f32,
    pub pan_slop: f32,
}

impl Default for DragSlop {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            pan_slop: PAN_SLOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fling_thresholds_fall_back_to_constants() {
        let config = DragConfig::default();
        assert_eq!(config.resolved_min_fling_distance(), MIN_FLING_DISTANCE);
        assert_eq!(config.resolved_min_fling_velocity(), MIN_FLING_VELOCITY);
        assert_eq!(config.resolved_max_fling_velocity(), MAX_FLING_VELOCITY);

        let config = config
            .with_min_fling_velocity(10.0)
            .with_max_fling_velocity(100.0)
            .with_min_fling_distance(2.0);
        assert_eq!(config.resolved_min_fling_distance(), 2.0);
        assert_eq!(config.resolved_min_fling_velocity(), 10.0);
        assert_eq!(config.resolved_max_fling_velocity(), 100.0);
    }

    #[test]
    fn precise_pointers_use_small_slop() {
        let config = DragConfig::default().with_touch_slop(12.0);
        assert_eq!(config.slop_for(PointerType::Touch).touch_slop, 12.0);
        assert_eq!(
            config.slop_for(PointerType::Mouse),
            DragSlop {
                touch_slop: PRECISE_POINTER_HIT_SLOP,
                pan_slop: PRECISE_POINTER_PAN_SLOP,
            }
        );
    }

    #[test]
    fn density_scales_slop() {
        let config = DragConfig::for_density(2.0);
        assert_eq!(config.touch_slop, TOUCH_SLOP * 2.0);
        assert_eq!(config.pan_slop, PAN_SLOP * 2.0);
        assert_eq!(config.min_fling_velocity, None);
    }
}
