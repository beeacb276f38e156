//! Drag gesture recognizer.
//!
//! One recognizer implementation serves vertical drags, horizontal drags and
//! free-form pans; the [`DragAxis`] policy decides how motion is projected,
//! when enough of it has accumulated to claim the gesture, and what counts as
//! a fling on release.
//!
//! A sequence runs from the first contact to the last tracked pointer going
//! away:
//!
//! - `Idle -> Possible` on the first contact (emits `down`).
//! - While `Possible`, motion accumulates in a pending offset. Once the policy
//!   says it is enough, the recognizer claims every arena it joined.
//! - `Possible -> Active` when the arena accepts (emits `start`, then an
//!   `update` replaying the pending motion if there was any).
//! - `Active`: every move is reported as an `update`.
//! - Last pointer gone: `end` from `Active`, `cancel` from `Possible`.

use crate::config::{DragConfig, DragSlop};
use crate::nodes::input::arena::{GestureArenaHandle, GestureDisposition, MemberId};
use crate::nodes::input::gestures::axis::{DragAxis, HorizontalAxis, PanAxis, VerticalAxis};
use crate::nodes::input::gestures::details::{
    DragCallbacks, DragDownDetails, DragEndDetails, DragStartDetails, DragUpdateDetails,
};
use crate::nodes::input::gestures::recognizer::GestureRecognizer;
use crate::nodes::input::types::{PointerDown, PointerId, PointerInput};
use crate::velocity_tracker::VelocityTracker;
use dragkit_geometry::{Offset, Point, Velocity};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No pointer tracked.
    Idle,
    /// Pointers down, gesture not claimed yet.
    Possible,
    /// This recognizer won the arena; moves are reported live.
    Active,
}

pub type VerticalDragGestureRecognizer = DragGestureRecognizer<VerticalAxis>;
pub type HorizontalDragGestureRecognizer = DragGestureRecognizer<HorizontalAxis>;
pub type PanGestureRecognizer = DragGestureRecognizer<PanAxis>;

pub struct DragGestureRecognizer<A: DragAxis> {
    member: MemberId,
    config: DragConfig,
    callbacks: DragCallbacks,
    phase: DragPhase,
    initial_position: Point,
    last_position: Point,
    pending_offset: Offset,
    slop: DragSlop,
    tracked_pointers: SmallVec<[PointerId; 2]>,
    /// Pointers whose arenas we joined and have not resolved yet.
    arena_entries: SmallVec<[PointerId; 2]>,
    velocity_trackers: FxHashMap<PointerId, VelocityTracker>,
    _axis: PhantomData<A>,
}

impl<A: DragAxis> DragGestureRecognizer<A> {
    pub fn new(config: DragConfig) -> Self {
        Self {
            member: MemberId::next(),
            config,
            callbacks: DragCallbacks::default(),
            phase: DragPhase::Idle,
            initial_position: Point::ZERO,
            last_position: Point::ZERO,
            pending_offset: Offset::ZERO,
            slop: DragSlop::default(),
            tracked_pointers: SmallVec::new(),
            arena_entries: SmallVec::new(),
            velocity_trackers: FxHashMap::default(),
            _axis: PhantomData,
        }
    }

    pub fn with_callbacks(mut self, callbacks: DragCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn callbacks_mut(&mut self) -> &mut DragCallbacks {
        &mut self.callbacks
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Position of the first contact of the current sequence.
    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    /// Motion accumulated while `Possible`; zero in every other phase.
    pub fn pending_offset(&self) -> Offset {
        self.pending_offset
    }

    pub fn tracked_pointer_count(&self) -> usize {
        self.tracked_pointers.len()
    }

    pub fn velocity_tracker_count(&self) -> usize {
        self.velocity_trackers.len()
    }

    fn is_pointer_allowed(&self, event: &PointerDown) -> bool {
        event.buttons.intersects(self.config.allowed_buttons)
    }

    fn start_tracking_pointer(&mut self, pointer: PointerId, arena: &mut dyn GestureArenaHandle) {
        debug_assert!(
            !self.tracked_pointers.contains(&pointer),
            "{}: pointer {pointer} is already tracked",
            A::NAME
        );
        self.tracked_pointers.push(pointer);
        if !self.arena_entries.contains(&pointer) {
            self.arena_entries.push(pointer);
            arena.add(pointer, self.member);
        }
    }

    fn stop_tracking_pointer(&mut self, pointer: PointerId, arena: &mut dyn GestureArenaHandle) {
        let Some(index) = self.tracked_pointers.iter().position(|p| *p == pointer) else {
            return;
        };
        self.tracked_pointers.remove(index);
        if self.tracked_pointers.is_empty() {
            self.did_stop_tracking_last_pointer(pointer, arena);
        }
    }

    /// Claims or concedes every arena this recognizer is still part of.
    fn resolve(&mut self, arena: &mut dyn GestureArenaHandle, disposition: GestureDisposition) {
        for pointer in self.arena_entries.drain(..) {
            arena.resolve(pointer, self.member, disposition);
        }
    }

    fn did_stop_tracking_last_pointer(
        &mut self,
        pointer: PointerId,
        arena: &mut dyn GestureArenaHandle,
    ) {
        match self.phase {
            DragPhase::Possible => {
                self.resolve(arena, GestureDisposition::Rejected);
                self.phase = DragPhase::Idle;
                self.pending_offset = Offset::ZERO;
                log::debug!("{}: cancelled before acceptance", A::NAME);
                self.callbacks.cancel();
            }
            DragPhase::Active => {
                self.phase = DragPhase::Idle;
                let details = self.end_details(pointer);
                log::debug!(
                    "{}: ended with velocity {:?}",
                    A::NAME,
                    details.velocity.pixels_per_second
                );
                self.callbacks.end(details);
            }
            DragPhase::Idle => {}
        }
        self.velocity_trackers.clear();
        self.arena_entries.clear();
    }

    fn end_details(&self, pointer: PointerId) -> DragEndDetails {
        let min_velocity = self.config.resolved_min_fling_velocity();
        let max_velocity = self.config.resolved_max_fling_velocity();
        let min_distance = self.config.resolved_min_fling_distance();

        let estimate = self
            .velocity_trackers
            .get(&pointer)
            .and_then(VelocityTracker::estimate);
        match estimate {
            Some(estimate) if A::is_fling(&estimate, min_velocity, min_distance) => {
                let velocity = estimate
                    .velocity()
                    .clamp_magnitude(min_velocity, max_velocity);
                DragEndDetails {
                    velocity,
                    primary_velocity: A::primary_value(velocity.pixels_per_second),
                }
            }
            _ => DragEndDetails {
                velocity: Velocity::ZERO,
                primary_velocity: A::primary_value(Offset::ZERO),
            },
        }
    }

    fn emit_update(&mut self, delta: Offset, global_position: Point) {
        self.callbacks.update(DragUpdateDetails {
            delta: A::project(delta),
            primary_delta: A::primary_value(delta),
            global_position,
        });
    }
}

impl<A: DragAxis> Default for DragGestureRecognizer<A> {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl<A: DragAxis> GestureRecognizer for DragGestureRecognizer<A> {
    fn member_id(&self) -> MemberId {
        self.member
    }

    fn debug_description(&self) -> &'static str {
        A::NAME
    }

    fn add_pointer(&mut self, event: &PointerDown, arena: &mut dyn GestureArenaHandle) -> bool {
        if !self.is_pointer_allowed(event) {
            log::trace!("{}: ignoring pointer {} ({:?})", A::NAME, event.id, event.buttons);
            return false;
        }

        self.start_tracking_pointer(event.id, arena);
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(event.uptime, event.position);
        self.velocity_trackers.insert(event.id, tracker);

        match self.phase {
            DragPhase::Idle => {
                self.phase = DragPhase::Possible;
                self.initial_position = event.position;
                self.last_position = event.position;
                self.pending_offset = Offset::ZERO;
                self.slop = self.config.slop_for(event.type_);
                log::debug!("{}: possible at {:?}", A::NAME, event.position);
                self.callbacks.down(DragDownDetails {
                    global_position: self.initial_position,
                });
            }
            DragPhase::Active => {
                // A pointer joining a won gesture is ours as well.
                self.resolve(arena, GestureDisposition::Accepted);
            }
            DragPhase::Possible => {}
        }
        true
    }

    fn is_tracking(&self, pointer: PointerId) -> bool {
        self.tracked_pointers.contains(&pointer)
    }

    fn handle_event(&mut self, event: &PointerInput, arena: &mut dyn GestureArenaHandle) {
        let pointer = event.pointer();
        assert!(
            self.is_tracking(pointer),
            "{}: received {:?} for untracked pointer {pointer}",
            A::NAME,
            event.kind()
        );

        match event {
            PointerInput::Move(event) => {
                if let Some(tracker) = self.velocity_trackers.get_mut(&pointer) {
                    for sample in &event.historical {
                        tracker.add_sample(sample.uptime, sample.position);
                    }
                    tracker.add_sample(event.uptime, event.position);
                }
                self.last_position = event.position;

                match self.phase {
                    DragPhase::Active => self.emit_update(event.delta, event.position),
                    DragPhase::Possible => {
                        self.pending_offset += event.delta;
                        if A::has_sufficient_pending_drag(self.pending_offset, &self.slop) {
                            log::trace!(
                                "{}: pending {:?} passed slop, claiming",
                                A::NAME,
                                self.pending_offset
                            );
                            self.resolve(arena, GestureDisposition::Accepted);
                        }
                    }
                    DragPhase::Idle => {}
                }
            }
            PointerInput::Up(event) => {
                // A lift after a pause leaves a gap the tracker reads as a stop.
                if let Some(tracker) = self.velocity_trackers.get_mut(&pointer) {
                    tracker.add_sample(event.uptime, event.position);
                }
            }
            PointerInput::Down(_) | PointerInput::Cancel(_) => {}
        }

        if event.is_terminal() {
            self.stop_tracking_pointer(pointer, arena);
        }
    }

    fn accept_gesture(&mut self, pointer: PointerId) {
        self.arena_entries.retain(|entry| *entry != pointer);
        match self.phase {
            DragPhase::Possible => {
                self.phase = DragPhase::Active;
                let committed = self.pending_offset;
                self.pending_offset = Offset::ZERO;
                log::debug!("{}: accepted via pointer {pointer}", A::NAME);

                self.callbacks.start(DragStartDetails {
                    global_position: self.initial_position,
                });
                if !A::project(committed).is_zero() {
                    self.emit_update(committed, self.last_position);
                }
            }
            DragPhase::Active => {}
            DragPhase::Idle => {
                log::trace!("{}: stale acceptance for pointer {pointer}", A::NAME);
            }
        }
    }

    fn reject_gesture(&mut self, pointer: PointerId, arena: &mut dyn GestureArenaHandle) {
        self.arena_entries.retain(|entry| *entry != pointer);
        self.velocity_trackers.remove(&pointer);
        self.stop_tracking_pointer(pointer, arena);
    }

    fn dispose(&mut self, arena: &mut dyn GestureArenaHandle) {
        self.resolve(arena, GestureDisposition::Rejected);
        self.tracked_pointers.clear();
        self.velocity_trackers.clear();
        self.pending_offset = Offset::ZERO;
        self.phase = DragPhase::Idle;
    }
}
