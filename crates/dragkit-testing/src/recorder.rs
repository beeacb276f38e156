//! Captures the notifications a drag recognizer emits.

use dragkit_foundation::{
    DragCallbacks, DragDownDetails, DragEndDetails, DragStartDetails, DragUpdateDetails,
};
use dragkit_geometry::Offset;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum RecordedDragEvent {
    Down(DragDownDetails),
    Start(DragStartDetails),
    Update(DragUpdateDetails),
    End(DragEndDetails),
    Cancel,
}

/// Shared log of drag notifications.
///
/// Clones share the same log, so one clone can be moved into a recognizer's
/// callbacks while the test keeps another for assertions.
#[derive(Clone, Default)]
pub struct DragRecorder {
    events: Rc<RefCell<Vec<RecordedDragEvent>>>,
}

impl DragRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this recorder.
    pub fn callbacks(&self) -> DragCallbacks {
        let down = self.clone();
        let start = self.clone();
        let update = self.clone();
        let end = self.clone();
        let cancel = self.clone();
        DragCallbacks::new()
            .on_down(move |details| down.push(RecordedDragEvent::Down(details)))
            .on_start(move |details| start.push(RecordedDragEvent::Start(details)))
            .on_update(move |details| update.push(RecordedDragEvent::Update(details)))
            .on_end(move |details| end.push(RecordedDragEvent::End(details)))
            .on_cancel(move || cancel.push(RecordedDragEvent::Cancel))
    }

    fn push(&self, event: RecordedDragEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<RecordedDragEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<RecordedDragEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn count_downs(&self) -> usize {
        self.count(|event| matches!(event, RecordedDragEvent::Down(_)))
    }

    pub fn count_starts(&self) -> usize {
        self.count(|event| matches!(event, RecordedDragEvent::Start(_)))
    }

    pub fn count_cancels(&self) -> usize {
        self.count(|event| matches!(event, RecordedDragEvent::Cancel))
    }

    pub fn updates(&self) -> Vec<DragUpdateDetails> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RecordedDragEvent::Update(details) => Some(*details),
                _ => None,
            })
            .collect()
    }

    /// Sum of every reported update delta.
    pub fn total_delta(&self) -> Offset {
        self.updates()
            .iter()
            .fold(Offset::ZERO, |total, update| total + update.delta)
    }

    pub fn last_end(&self) -> Option<DragEndDetails> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            RecordedDragEvent::End(details) => Some(*details),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&RecordedDragEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(*event)).count()
    }
}

impl std::fmt::Debug for DragRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.events.borrow().iter()).finish()
    }
}
