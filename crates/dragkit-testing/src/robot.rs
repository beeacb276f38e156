//! Robot-style pointer driver for gesture tests.
//!
//! [`GestureRobot`] owns a [`GestureBinding`] and synthesizes well-formed
//! pointer sequences against it: it remembers where each pointer is, computes
//! move deltas, and stamps events from a clock the test controls.
//!
//! # Example
//!
//! ```
//! use dragkit_foundation::VerticalDragGestureRecognizer;
//! use dragkit_geometry::{Offset, Point};
//! use dragkit_testing::{DragRecorder, GestureRobot};
//!
//! let recorder = DragRecorder::new();
//! let mut robot = GestureRobot::new();
//! robot.add_recognizer(Box::new(
//!     VerticalDragGestureRecognizer::default().with_callbacks(recorder.callbacks()),
//! ));
//!
//! let finger = robot.touch_down(Point::new(10.0, 10.0)).unwrap();
//! robot.drag(finger, Offset::new(0.0, 120.0), 6).unwrap();
//! robot.release(finger).unwrap();
//!
//! assert_eq!(recorder.count_starts(), 1);
//! ```

use dragkit_foundation::{
    DispatchError, GestureBinding, GestureRecognizer, MemberId, PointerCancel, PointerDown,
    PointerId, PointerMove, PointerType, PointerUp, Uptime, UptimeClock,
};
use dragkit_geometry::{Offset, Point};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Default spacing between synthesized moves, one 60Hz frame.
pub const FRAME_MS: Uptime = 16;

/// Where event timestamps come from.
#[derive(Clone, Copy, Debug)]
pub enum RobotClock {
    /// Time only moves when the robot advances it.
    Virtual { now: Uptime },
    /// Wall-clock uptime; advancing sleeps the thread.
    Realtime(UptimeClock),
}

impl RobotClock {
    fn now(&self) -> Uptime {
        match self {
            RobotClock::Virtual { now } => *now,
            RobotClock::Realtime(clock) => clock.now(),
        }
    }

    fn advance(&mut self, millis: Uptime) {
        match self {
            RobotClock::Virtual { now } => *now += millis,
            RobotClock::Realtime(_) => std::thread::sleep(Duration::from_millis(millis)),
        }
    }
}

pub struct GestureRobot {
    binding: GestureBinding,
    clock: RobotClock,
    positions: FxHashMap<PointerId, Point>,
    next_pointer: PointerId,
    frame_ms: Uptime,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    /// Robot on a virtual clock starting at zero.
    pub fn new() -> Self {
        Self::with_clock(RobotClock::Virtual { now: 0 })
    }

    pub fn realtime() -> Self {
        Self::with_clock(RobotClock::Realtime(UptimeClock::new()))
    }

    pub fn with_clock(clock: RobotClock) -> Self {
        Self {
            binding: GestureBinding::new(),
            clock,
            positions: FxHashMap::default(),
            next_pointer: 1,
            frame_ms: FRAME_MS,
        }
    }

    /// Changes the time between steps of [`GestureRobot::drag`].
    pub fn with_frame_interval(mut self, frame_ms: Uptime) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    pub fn add_recognizer(&mut self, recognizer: Box<dyn GestureRecognizer>) -> MemberId {
        self.binding.add_recognizer(recognizer)
    }

    pub fn binding(&self) -> &GestureBinding {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut GestureBinding {
        &mut self.binding
    }

    pub fn now(&self) -> Uptime {
        self.clock.now()
    }

    pub fn advance_time(&mut self, millis: Uptime) {
        self.clock.advance(millis);
    }

    pub fn position(&self, pointer: PointerId) -> Option<Point> {
        self.positions.get(&pointer).copied()
    }

    pub fn touch_down(&mut self, position: Point) -> Result<PointerId, DispatchError> {
        self.pointer_down(position, PointerType::Touch)
    }

    pub fn mouse_down(&mut self, position: Point) -> Result<PointerId, DispatchError> {
        self.pointer_down(position, PointerType::Mouse)
    }

    /// Puts down a fresh pointer with the primary button pressed.
    pub fn pointer_down(
        &mut self,
        position: Point,
        type_: PointerType,
    ) -> Result<PointerId, DispatchError> {
        let pointer = self.next_pointer;
        self.next_pointer += 1;
        let event = PointerDown::new(pointer, self.now(), position).with_type(type_);
        self.send_down(event)?;
        Ok(pointer)
    }

    /// Dispatches a hand-built down event, e.g. with non-primary buttons.
    pub fn send_down(&mut self, event: PointerDown) -> Result<(), DispatchError> {
        let (pointer, position) = (event.id, event.position);
        self.binding.dispatch(event)?;
        self.next_pointer = self.next_pointer.max(pointer + 1);
        self.positions.insert(pointer, position);
        Ok(())
    }

    pub fn move_to(&mut self, pointer: PointerId, position: Point) -> Result<(), DispatchError> {
        let previous = self.position(pointer).unwrap_or(position);
        let event = PointerMove::new(pointer, self.now(), position, position - previous);
        self.binding.dispatch(event)?;
        self.positions.insert(pointer, position);
        Ok(())
    }

    pub fn move_by(&mut self, pointer: PointerId, delta: Offset) -> Result<(), DispatchError> {
        let from = self.position(pointer).unwrap_or(Point::ZERO);
        self.move_to(pointer, from + delta)
    }

    /// Moves `pointer` by `delta` in `steps` equal moves, one frame apart.
    pub fn drag(
        &mut self,
        pointer: PointerId,
        delta: Offset,
        steps: u32,
    ) -> Result<(), DispatchError> {
        let steps = steps.max(1);
        let from = self.position(pointer).unwrap_or(Point::ZERO);
        log::trace!("robot: dragging pointer {pointer} by {delta:?} in {steps} steps");
        for step in 1..=steps {
            self.advance_time(self.frame_ms);
            let fraction = step as f32 / steps as f32;
            self.move_to(pointer, from + delta * fraction)?;
        }
        Ok(())
    }

    /// Lifts `pointer` at its last known position.
    pub fn release(&mut self, pointer: PointerId) -> Result<(), DispatchError> {
        let position = self.position(pointer).unwrap_or(Point::ZERO);
        self.binding.dispatch(PointerUp {
            id: pointer,
            uptime: self.now(),
            position,
        })?;
        self.positions.remove(&pointer);
        Ok(())
    }

    pub fn cancel(&mut self, pointer: PointerId) -> Result<(), DispatchError> {
        self.binding.dispatch(PointerCancel {
            id: pointer,
            uptime: self.now(),
        })?;
        self.positions.remove(&pointer);
        Ok(())
    }

    /// Full touch gesture: down at `from`, stepped drag by `delta`, release.
    pub fn swipe(
        &mut self,
        from: Point,
        delta: Offset,
        steps: u32,
    ) -> Result<PointerId, DispatchError> {
        let pointer = self.touch_down(from)?;
        self.drag(pointer, delta, steps)?;
        self.release(pointer)?;
        Ok(pointer)
    }
}
