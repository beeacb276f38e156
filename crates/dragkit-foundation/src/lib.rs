//! Pointer input and drag gesture recognition for dragkit
//!
//! Recognizers for vertical drags, horizontal drags and pans compete for
//! pointers in a gesture arena; the [`GestureBinding`] feeds them raw events
//! and delivers the arena's verdicts.

pub mod config;
pub mod gesture_constants;
pub mod nodes;
pub mod velocity_tracker;

#[cfg(test)]
mod tests;

pub use config::{DragConfig, DragSlop};
pub use nodes::input::gestures::{
    DragAxis, DragCallbacks, DragDownDetails, DragEndDetails, DragGestureRecognizer, DragPhase,
    DragStartDetails, DragUpdateDetails, GestureRecognizer, HorizontalAxis,
    HorizontalDragGestureRecognizer, PanAxis, PanGestureRecognizer, VerticalAxis,
    VerticalDragGestureRecognizer,
};
pub use nodes::input::{
    ArenaDecision, DispatchError, GestureArena, GestureArenaHandle, GestureBinding,
    GestureDisposition, MemberId, PointerButton, PointerButtons, PointerCancel, PointerDown,
    PointerEventKind, PointerId, PointerInput, PointerMove, PointerType, PointerUp, Uptime,
    UptimeClock,
};
pub use velocity_tracker::{VelocityEstimate, VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::config::DragConfig;
    pub use crate::nodes::input::prelude::*;
    pub use dragkit_geometry::prelude::*;
}
