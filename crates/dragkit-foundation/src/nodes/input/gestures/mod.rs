pub mod axis;
pub mod details;
pub mod drag;
pub mod recognizer;

pub use axis::{DragAxis, HorizontalAxis, PanAxis, VerticalAxis};
pub use details::{
    DragCallbacks, DragDownDetails, DragEndDetails, DragStartDetails, DragUpdateDetails,
};
pub use drag::{
    DragGestureRecognizer, DragPhase, HorizontalDragGestureRecognizer, PanGestureRecognizer,
    VerticalDragGestureRecognizer,
};
pub use recognizer::GestureRecognizer;
