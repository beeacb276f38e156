//! Pointer event dispatcher.
//!
//! [`GestureBinding`] is the event loop side of gesture recognition: platform
//! integrations feed it raw pointer events in order, and it offers them to the
//! registered recognizers, drives the arena (close after a down, sweep after a
//! lift) and delivers the arena's decisions once each handler has returned.

use crate::nodes::input::arena::{GestureArena, GestureDisposition, MemberId};
use crate::nodes::input::gestures::GestureRecognizer;
use crate::nodes::input::types::{PointerEventKind, PointerId, PointerInput, Uptime};
use rustc_hash::FxHashSet;
use web_time::Instant;

/// Raw input that violates pointer ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A down arrived for a pointer that is already down.
    DuplicateDown { pointer: PointerId },
    /// A move, lift or cancel arrived for a pointer that never went down.
    UnknownPointer {
        pointer: PointerId,
        kind: PointerEventKind,
    },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::DuplicateDown { pointer } => {
                write!(f, "pointer {pointer} went down twice")
            }
            DispatchError::UnknownPointer { pointer, kind } => {
                write!(f, "{kind:?} event for pointer {pointer} that is not down")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Routes pointer events to recognizers and arbitrates between them.
#[derive(Default)]
pub struct GestureBinding {
    arena: GestureArena,
    recognizers: Vec<Box<dyn GestureRecognizer>>,
    down_pointers: FxHashSet<PointerId>,
}

impl GestureBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recognizer; it will be offered every subsequent down.
    pub fn add_recognizer(&mut self, recognizer: Box<dyn GestureRecognizer>) -> MemberId {
        let member = recognizer.member_id();
        log::debug!(
            "binding: registered {} as {member:?}",
            recognizer.debug_description()
        );
        self.recognizers.push(recognizer);
        member
    }

    /// Unregisters and disposes a recognizer.
    pub fn remove_recognizer(&mut self, member: MemberId) -> bool {
        let Some(index) = self.recognizers.iter().position(|r| r.member_id() == member) else {
            return false;
        };
        let mut recognizer = self.recognizers.remove(index);
        recognizer.dispose(&mut self.arena);
        self.flush_decisions();
        true
    }

    pub fn recognizer_count(&self) -> usize {
        self.recognizers.len()
    }

    pub fn arena(&self) -> &GestureArena {
        &self.arena
    }

    pub fn is_pointer_down(&self, pointer: PointerId) -> bool {
        self.down_pointers.contains(&pointer)
    }

    /// Dispatches one raw event and settles every arena decision it causes.
    pub fn dispatch(&mut self, event: impl Into<PointerInput>) -> Result<(), DispatchError> {
        let event = event.into();
        let pointer = event.pointer();
        log::trace!("binding: {:?} for pointer {pointer}", event.kind());

        match &event {
            PointerInput::Down(down) => {
                if !self.down_pointers.insert(pointer) {
                    return Err(DispatchError::DuplicateDown { pointer });
                }
                for recognizer in &mut self.recognizers {
                    recognizer.add_pointer(down, &mut self.arena);
                }
                self.arena.close(pointer);
            }
            _ => {
                let known = if event.is_terminal() {
                    self.down_pointers.remove(&pointer)
                } else {
                    self.down_pointers.contains(&pointer)
                };
                if !known {
                    return Err(DispatchError::UnknownPointer {
                        pointer,
                        kind: event.kind(),
                    });
                }

                for recognizer in &mut self.recognizers {
                    if recognizer.is_tracking(pointer) {
                        recognizer.handle_event(&event, &mut self.arena);
                    }
                }
                if event.is_terminal() {
                    self.arena.sweep(pointer);
                }
            }
        }

        self.flush_decisions();
        Ok(())
    }

    /// Disposes every recognizer and forgets all pointers.
    pub fn dispose(&mut self) {
        for recognizer in &mut self.recognizers {
            recognizer.dispose(&mut self.arena);
        }
        self.arena.clear();
        self.down_pointers.clear();
    }

    fn flush_decisions(&mut self) {
        while let Some(decision) = self.arena.pop_decision() {
            let Some(recognizer) = self
                .recognizers
                .iter_mut()
                .find(|r| r.member_id() == decision.member)
            else {
                continue;
            };
            match decision.disposition {
                GestureDisposition::Accepted => recognizer.accept_gesture(decision.pointer),
                GestureDisposition::Rejected => {
                    recognizer.reject_gesture(decision.pointer, &mut self.arena)
                }
            }
        }
    }
}

/// Monotonic millisecond clock for platforms that don't stamp their events.
#[derive(Clone, Copy, Debug)]
pub struct UptimeClock {
    epoch: Instant,
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn now(&self) -> Uptime {
        self.epoch.elapsed().as_millis() as Uptime
    }
}
