//! Testing utilities and harness for dragkit

pub mod arena;
pub mod recorder;
pub mod robot;

pub use arena::{ArenaCall, RecordingArena};
pub use recorder::{DragRecorder, RecordedDragEvent};
pub use robot::{GestureRobot, RobotClock};

pub mod prelude {
    pub use crate::arena::*;
    pub use crate::recorder::*;
    pub use crate::robot::*;
}
