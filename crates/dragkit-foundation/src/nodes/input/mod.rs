pub mod arena;
pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use arena::{ArenaDecision, GestureArena, GestureArenaHandle, GestureDisposition, MemberId};
pub use dispatcher::{DispatchError, GestureBinding, UptimeClock};
pub use types::{
    HistoricalSample, PointerButton, PointerButtons, PointerCancel, PointerDown,
    PointerEventKind, PointerId, PointerInput, PointerMove, PointerType, PointerUp, Uptime,
};

pub mod prelude {
    pub use super::arena::{GestureArena, GestureArenaHandle, GestureDisposition, MemberId};
    pub use super::dispatcher::{DispatchError, GestureBinding, UptimeClock};
    pub use super::gestures::{
        DragCallbacks, DragEndDetails, DragGestureRecognizer, DragPhase, DragUpdateDetails,
        GestureRecognizer, HorizontalDragGestureRecognizer, PanGestureRecognizer,
        VerticalDragGestureRecognizer,
    };
    pub use super::types::{
        PointerButton, PointerButtons, PointerCancel, PointerDown, PointerId, PointerInput,
        PointerMove, PointerType, PointerUp,
    };
}
