//! Axis policies that specialize the drag recognizer.
//!
//! A policy is a zero-sized type whose associated functions decide how a raw
//! 2D motion is read: which component is reported, when enough motion has
//! accumulated to claim the gesture, and whether a release counts as a fling.

use crate::config::DragSlop;
use crate::velocity_tracker::VelocityEstimate;
use dragkit_geometry::Offset;

pub trait DragAxis: 'static {
    /// Used in log output.
    const NAME: &'static str;

    /// Keeps the part of `delta` this recognizer reports.
    fn project(delta: Offset) -> Offset;

    /// Single-axis component of `vector`, or `None` when the policy has no
    /// primary axis.
    fn primary_value(vector: Offset) -> Option<f32>;

    /// Whether motion accumulated before acceptance is enough to claim the
    /// gesture.
    fn has_sufficient_pending_drag(pending: Offset, slop: &DragSlop) -> bool;

    fn is_fling(estimate: &VelocityEstimate, min_velocity: f32, min_distance: f32) -> bool;
}

/// Reports only vertical motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerticalAxis;

impl DragAxis for VerticalAxis {
    const NAME: &'static str = "vertical drag";

    fn project(delta: Offset) -> Offset {
        Offset::new(0.0, delta.dy)
    }

    fn primary_value(vector: Offset) -> Option<f32> {
        Some(vector.dy)
    }

    fn has_sufficient_pending_drag(pending: Offset, slop: &DragSlop) -> bool {
        pending.abs_dy() > slop.touch_slop
    }

    fn is_fling(estimate: &VelocityEstimate, min_velocity: f32, min_distance: f32) -> bool {
        estimate.pixels_per_second.abs_dy() > min_velocity
            && estimate.offset.abs_dy() > min_distance
    }
}

/// Reports only horizontal motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HorizontalAxis;

impl DragAxis for HorizontalAxis {
    const NAME: &'static str = "horizontal drag";

    fn project(delta: Offset) -> Offset {
        Offset::new(delta.dx, 0.0)
    }

    fn primary_value(vector: Offset) -> Option<f32> {
        Some(vector.dx)
    }

    fn has_sufficient_pending_drag(pending: Offset, slop: &DragSlop) -> bool {
        pending.abs_dx() > slop.touch_slop
    }

    fn is_fling(estimate: &VelocityEstimate, min_velocity: f32, min_distance: f32) -> bool {
        estimate.pixels_per_second.abs_dx() > min_velocity
            && estimate.offset.abs_dx() > min_distance
    }
}

/// Free-form motion in any direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanAxis;

impl DragAxis for PanAxis {
    const NAME: &'static str = "pan";

    fn project(delta: Offset) -> Offset {
        delta
    }

    fn primary_value(_vector: Offset) -> Option<f32> {
        None
    }

    fn has_sufficient_pending_drag(pending: Offset, slop: &DragSlop) -> bool {
        pending.distance() > slop.pan_slop
    }

    fn is_fling(estimate: &VelocityEstimate, min_velocity: f32, min_distance: f32) -> bool {
        estimate.pixels_per_second.distance_squared() > min_velocity * min_velocity
            && estimate.offset.distance_squared() > min_distance * min_distance
    }
}
