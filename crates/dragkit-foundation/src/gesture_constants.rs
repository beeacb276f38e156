//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These are the defaults a [`DragConfig`](crate::config::DragConfig) falls
//! back to when a threshold is not overridden.
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch screens,
//! scale them with [`DragConfig::for_density`](crate::config::DragConfig::for_density).

/// Distance a touch must travel along an axis before a vertical or horizontal
/// drag may claim the gesture.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Distance a touch must travel in any direction before a pan may claim the
/// gesture. Larger than [`TOUCH_SLOP`] so axis-locked drags win ties.
pub const PAN_SLOP: f32 = TOUCH_SLOP * 2.0;

/// Axis slop for precise pointers such as a mouse.
pub const PRECISE_POINTER_HIT_SLOP: f32 = 1.0;

/// Pan slop for precise pointers such as a mouse.
pub const PRECISE_POINTER_PAN_SLOP: f32 = PRECISE_POINTER_HIT_SLOP * 2.0;

/// Minimum distance travelled in the estimation window for a release to count
/// as a fling.
pub const MIN_FLING_DISTANCE: f32 = TOUCH_SLOP;

/// Minimum release speed, in logical pixels per second, for a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
