use super::{pt, recording_callbacks, take, Notification, NotificationLog};
use crate::nodes::input::arena::MemberId;
use crate::nodes::input::dispatcher::GestureBinding;
use crate::nodes::input::gestures::{
    DragDownDetails, DragStartDetails, DragUpdateDetails, HorizontalDragGestureRecognizer,
    VerticalDragGestureRecognizer,
};
use crate::nodes::input::types::{PointerDown, PointerMove, PointerUp};
use dragkit_geometry::{Offset, Point};

struct Competition {
    binding: GestureBinding,
    vertical: MemberId,
    horizontal: MemberId,
    vertical_log: NotificationLog,
    horizontal_log: NotificationLog,
}

fn competition() -> Competition {
    let mut binding = GestureBinding::new();
    let (callbacks, vertical_log) = recording_callbacks();
    let vertical = binding.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::default().with_callbacks(callbacks),
    ));
    let (callbacks, horizontal_log) = recording_callbacks();
    let horizontal = binding.add_recognizer(Box::new(
        HorizontalDragGestureRecognizer::default().with_callbacks(callbacks),
    ));
    Competition {
        binding,
        vertical,
        horizontal,
        vertical_log,
        horizontal_log,
    }
}

fn move_event(pointer: u64, uptime: u64, from: Point, to: Point) -> PointerMove {
    PointerMove::new(pointer, uptime, to, to - from)
}

fn up_event(pointer: u64, uptime: u64, position: Point) -> PointerUp {
    PointerUp {
        id: pointer,
        uptime,
        position,
    }
}

#[test]
fn vertical_motion_wins_over_horizontal_recognizer() {
    let mut c = competition();

    c.binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    assert_eq!(c.binding.arena().members(1), &[c.vertical, c.horizontal]);

    c.binding
        .dispatch(move_event(1, 10, pt(0.0, 0.0), pt(0.0, 9.0)))
        .unwrap();
    assert!(c.binding.arena().is_empty());

    let vertical = take(&c.vertical_log);
    assert_eq!(vertical.len(), 3);
    assert_eq!(
        vertical[1],
        Notification::Start(DragStartDetails {
            global_position: pt(0.0, 0.0)
        })
    );
    assert_eq!(
        vertical[2],
        Notification::Update(DragUpdateDetails {
            delta: Offset::new(0.0, 9.0),
            primary_delta: Some(9.0),
            global_position: pt(0.0, 9.0),
        })
    );
    assert_eq!(take(&c.horizontal_log).last(), Some(&Notification::Cancel));

    // Later motion only reaches the winner.
    c.binding
        .dispatch(move_event(1, 20, pt(0.0, 9.0), pt(30.0, 12.0)))
        .unwrap();
    assert!(take(&c.horizontal_log).is_empty());
    assert_eq!(
        take(&c.vertical_log),
        vec![Notification::Update(DragUpdateDetails {
            delta: Offset::new(0.0, 3.0),
            primary_delta: Some(3.0),
            global_position: pt(30.0, 12.0),
        })]
    );
}

#[test]
fn lift_without_motion_cancels_every_competitor() {
    let mut c = competition();

    c.binding.dispatch(PointerDown::new(1, 0, pt(5.0, 5.0))).unwrap();
    c.binding.dispatch(up_event(1, 40, pt(5.0, 5.0))).unwrap();

    assert_eq!(take(&c.vertical_log).last(), Some(&Notification::Cancel));
    assert_eq!(take(&c.horizontal_log).last(), Some(&Notification::Cancel));
    assert!(c.binding.arena().is_empty());
    assert!(!c.binding.arena().has_pending_decisions());
}

#[test]
fn lone_recognizer_starts_on_contact() {
    let mut binding = GestureBinding::new();
    let (callbacks, log) = recording_callbacks();
    binding.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::default().with_callbacks(callbacks),
    ));

    binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    assert!(matches!(
        take(&log).as_slice(),
        [Notification::Down(_), Notification::Start(_)]
    ));

    binding
        .dispatch(move_event(1, 10, pt(0.0, 0.0), pt(0.0, 2.0)))
        .unwrap();
    assert!(matches!(take(&log).as_slice(), [Notification::Update(_)]));
}

#[test]
fn removing_a_competitor_hands_the_pointer_to_the_survivor() {
    let mut c = competition();

    c.binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    assert!(c.binding.remove_recognizer(c.vertical));
    assert!(!c.binding.remove_recognizer(c.vertical));
    assert_eq!(c.binding.recognizer_count(), 1);

    assert!(matches!(
        take(&c.horizontal_log).as_slice(),
        [Notification::Down(_), Notification::Start(_)]
    ));
}

#[test]
fn drag_ends_when_the_last_pointer_lifts() {
    let mut binding = GestureBinding::new();
    let (callbacks, log) = recording_callbacks();
    binding.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::default().with_callbacks(callbacks),
    ));

    binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    binding.dispatch(PointerDown::new(2, 5, pt(40.0, 0.0))).unwrap();
    binding.dispatch(up_event(1, 10, pt(0.0, 0.0))).unwrap();
    assert!(
        !take(&log).iter().any(|n| matches!(n, Notification::End(_))),
        "a pointer is still down"
    );

    binding.dispatch(up_event(2, 15, pt(40.0, 0.0))).unwrap();
    assert!(matches!(take(&log).as_slice(), [Notification::End(_)]));
    assert!(binding.arena().is_empty());
}

#[test]
fn dispose_forgets_pointers() {
    let mut c = competition();
    c.binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();

    c.binding.dispose();
    assert!(!c.binding.is_pointer_down(1));
    assert!(c.binding.arena().is_empty());
    assert!(c
        .binding
        .dispatch(move_event(1, 10, pt(0.0, 0.0), pt(0.0, 20.0)))
        .is_err());
    c.binding.dispatch(PointerDown::new(1, 20, pt(0.0, 0.0))).unwrap();
}

#[test]
fn dispose_during_an_active_drag_reports_nothing() {
    let mut binding = GestureBinding::new();
    let (callbacks, log) = recording_callbacks();
    binding.add_recognizer(Box::new(
        VerticalDragGestureRecognizer::default().with_callbacks(callbacks),
    ));

    binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    binding
        .dispatch(move_event(1, 10, pt(0.0, 0.0), pt(0.0, 30.0)))
        .unwrap();
    take(&log);

    binding.dispose();
    assert!(take(&log).is_empty(), "no end or cancel after dispose");
    assert!(!binding.is_pointer_down(1));
    assert!(binding.arena().is_empty());

    binding.dispatch(PointerDown::new(1, 100, pt(10.0, 10.0))).unwrap();
    let fresh = take(&log);
    assert!(matches!(
        fresh.as_slice(),
        [Notification::Down(_), Notification::Start(_)]
    ));
    assert_eq!(
        fresh[0],
        Notification::Down(DragDownDetails {
            global_position: pt(10.0, 10.0)
        })
    );
}

#[test]
fn handoff_after_off_axis_motion_starts_without_an_update() {
    let mut c = competition();

    c.binding.dispatch(PointerDown::new(1, 0, pt(0.0, 0.0))).unwrap();
    c.binding
        .dispatch(move_event(1, 10, pt(0.0, 0.0), pt(3.0, 0.0)))
        .unwrap();
    assert!(c.binding.remove_recognizer(c.horizontal));

    assert!(matches!(
        take(&c.vertical_log).as_slice(),
        [Notification::Down(_), Notification::Start(_)]
    ));
}
