//! The seam between the event dispatcher and individual recognizers.

use crate::nodes::input::arena::{GestureArenaHandle, MemberId};
use crate::nodes::input::types::{PointerDown, PointerId, PointerInput};

/// A recognizer that competes in the gesture arena.
///
/// The dispatcher offers every down event through [`add_pointer`], routes the
/// rest of a pointer's events to recognizers that report
/// [`is_tracking`] for it, and delivers arena decisions through
/// [`accept_gesture`] / [`reject_gesture`] once the current handler returns.
///
/// [`add_pointer`]: GestureRecognizer::add_pointer
/// [`is_tracking`]: GestureRecognizer::is_tracking
/// [`accept_gesture`]: GestureRecognizer::accept_gesture
/// [`reject_gesture`]: GestureRecognizer::reject_gesture
pub trait GestureRecognizer {
    fn member_id(&self) -> MemberId;

    fn debug_description(&self) -> &'static str;

    /// Offers a new pointer. Returns whether the recognizer started tracking it.
    fn add_pointer(&mut self, event: &PointerDown, arena: &mut dyn GestureArenaHandle) -> bool;

    fn is_tracking(&self, pointer: PointerId) -> bool;

    /// Handles a non-down event for a tracked pointer.
    fn handle_event(&mut self, event: &PointerInput, arena: &mut dyn GestureArenaHandle);

    fn accept_gesture(&mut self, pointer: PointerId);

    fn reject_gesture(&mut self, pointer: PointerId, arena: &mut dyn GestureArenaHandle);

    /// Drops all per-sequence state and leaves every arena this recognizer
    /// joined.
    fn dispose(&mut self, arena: &mut dyn GestureArenaHandle);
}
