mod binding_tests;

use crate::nodes::input::arena::{GestureArenaHandle, GestureDisposition, MemberId};
use crate::nodes::input::gestures::{
    DragCallbacks, DragDownDetails, DragEndDetails, DragStartDetails, DragUpdateDetails,
};
use crate::nodes::input::types::PointerId;
use dragkit_geometry::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// Arena stand-in that only records what recognizers ask of it.
#[derive(Default)]
pub(crate) struct FakeArena {
    pub added: Vec<(PointerId, MemberId)>,
    pub resolved: Vec<(PointerId, MemberId, GestureDisposition)>,
}

impl GestureArenaHandle for FakeArena {
    fn add(&mut self, pointer: PointerId, member: MemberId) {
        self.added.push((pointer, member));
    }

    fn resolve(&mut self, pointer: PointerId, member: MemberId, disposition: GestureDisposition) {
        self.resolved.push((pointer, member, disposition));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Notification {
    Down(DragDownDetails),
    Start(DragStartDetails),
    Update(DragUpdateDetails),
    End(DragEndDetails),
    Cancel,
}

pub(crate) type NotificationLog = Rc<RefCell<Vec<Notification>>>;

/// Callbacks that append every notification to a shared log.
pub(crate) fn recording_callbacks() -> (DragCallbacks, NotificationLog) {
    let log: NotificationLog = Rc::new(RefCell::new(Vec::new()));
    let callbacks = DragCallbacks::new()
        .on_down({
            let log = log.clone();
            move |details| log.borrow_mut().push(Notification::Down(details))
        })
        .on_start({
            let log = log.clone();
            move |details| log.borrow_mut().push(Notification::Start(details))
        })
        .on_update({
            let log = log.clone();
            move |details| log.borrow_mut().push(Notification::Update(details))
        })
        .on_end({
            let log = log.clone();
            move |details| log.borrow_mut().push(Notification::End(details))
        })
        .on_cancel({
            let log = log.clone();
            move || log.borrow_mut().push(Notification::Cancel)
        });
    (callbacks, log)
}

pub(crate) fn take(log: &NotificationLog) -> Vec<Notification> {
    std::mem::take(&mut *log.borrow_mut())
}

pub(crate) fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

pub(crate) fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}
