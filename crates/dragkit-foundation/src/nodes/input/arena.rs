//! Gesture arena: per-pointer arbitration between competing recognizers.
//!
//! Every recognizer interested in a pointer joins that pointer's arena. The
//! arena closes once the down event has been offered to everyone, and from
//! then on exactly one member wins: the first to claim the gesture, the last
//! one standing, or (when the pointer lifts) the first member still present.
//!
//! Decisions are queued rather than delivered inline so a recognizer that
//! resolves its own entry from inside an event handler is never re-entered.
//! The dispatcher drains the queue once the handler has returned.

use crate::nodes::input::types::PointerId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MEMBER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an arena member (one per recognizer instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    /// Allocates a process-unique member id.
    pub fn next() -> Self {
        Self(NEXT_MEMBER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureDisposition {
    Accepted,
    Rejected,
}

/// Outcome for one member of one pointer's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaDecision {
    pub pointer: PointerId,
    pub member: MemberId,
    pub disposition: GestureDisposition,
}

/// What a recognizer may ask of the arbitration authority.
pub trait GestureArenaHandle {
    /// Joins the arena for `pointer` as a candidate.
    fn add(&mut self, pointer: PointerId, member: MemberId);

    /// Claims (`Accepted`) or concedes (`Rejected`) the gesture for `pointer`.
    fn resolve(&mut self, pointer: PointerId, member: MemberId, disposition: GestureDisposition);
}

struct ArenaState {
    members: SmallVec<[MemberId; 4]>,
    is_open: bool,
    eager_winner: Option<MemberId>,
}

impl ArenaState {
    fn new() -> Self {
        Self {
            members: SmallVec::new(),
            is_open: true,
            eager_winner: None,
        }
    }
}

/// Reference arbitration authority with one arena per pointer.
#[derive(Default)]
pub struct GestureArena {
    arenas: FxHashMap<PointerId, ArenaState>,
    decisions: VecDeque<ArenaDecision>,
}

impl GestureArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops new members from joining and resolves the arena if possible.
    ///
    /// Called once the down event for `pointer` has been offered to every
    /// recognizer.
    pub fn close(&mut self, pointer: PointerId) {
        let Some(state) = self.arenas.get_mut(&pointer) else {
            return;
        };
        state.is_open = false;
        log::trace!("arena {pointer}: closed with {} members", state.members.len());
        self.try_to_resolve(pointer);
    }

    /// Forces a resolution when the pointer lifts: the first remaining member
    /// wins, the rest lose.
    pub fn sweep(&mut self, pointer: PointerId) {
        let Some(state) = self.arenas.remove(&pointer) else {
            return;
        };
        debug_assert!(!state.is_open, "arena {pointer} swept while open");

        let mut members = state.members.into_iter();
        if let Some(winner) = members.next() {
            log::debug!("arena {pointer}: swept in favor of {winner:?}");
            self.queue(pointer, winner, GestureDisposition::Accepted);
            for loser in members {
                self.queue(pointer, loser, GestureDisposition::Rejected);
            }
        }
    }

    /// Removes the next queued decision.
    pub fn pop_decision(&mut self) -> Option<ArenaDecision> {
        self.decisions.pop_front()
    }

    pub fn has_pending_decisions(&self) -> bool {
        !self.decisions.is_empty()
    }

    /// Whether an unresolved arena exists for `pointer`.
    pub fn contains(&self, pointer: PointerId) -> bool {
        self.arenas.contains_key(&pointer)
    }

    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    pub fn members(&self, pointer: PointerId) -> &[MemberId] {
        match self.arenas.get(&pointer) {
            Some(state) => state.members.as_slice(),
            None => &[],
        }
    }

    /// Drops every arena and pending decision.
    pub fn clear(&mut self) {
        self.arenas.clear();
        self.decisions.clear();
    }

    fn queue(&mut self, pointer: PointerId, member: MemberId, disposition: GestureDisposition) {
        self.decisions.push_back(ArenaDecision {
            pointer,
            member,
            disposition,
        });
    }

    fn try_to_resolve(&mut self, pointer: PointerId) {
        let Some(state) = self.arenas.get(&pointer) else {
            return;
        };
        match (state.members.len(), state.eager_winner) {
            (0, _) => {
                self.arenas.remove(&pointer);
            }
            (1, _) => {
                let winner = state.members[0];
                self.arenas.remove(&pointer);
                log::debug!("arena {pointer}: {winner:?} is the last member standing");
                self.queue(pointer, winner, GestureDisposition::Accepted);
            }
            (_, Some(eager_winner)) => self.resolve_in_favor_of(pointer, eager_winner),
            _ => {}
        }
    }

    fn resolve_in_favor_of(&mut self, pointer: PointerId, winner: MemberId) {
        let Some(state) = self.arenas.remove(&pointer) else {
            return;
        };
        log::debug!("arena {pointer}: resolved in favor of {winner:?}");
        for member in state.members.into_iter().filter(|member| *member != winner) {
            self.queue(pointer, member, GestureDisposition::Rejected);
        }
        self.queue(pointer, winner, GestureDisposition::Accepted);
    }
}

impl GestureArenaHandle for GestureArena {
    fn add(&mut self, pointer: PointerId, member: MemberId) {
        let state = self.arenas.entry(pointer).or_insert_with(ArenaState::new);
        if !state.is_open {
            // Too late to compete for this pointer.
            log::trace!("arena {pointer}: {member:?} joined after close, rejecting");
            self.queue(pointer, member, GestureDisposition::Rejected);
            return;
        }
        if !state.members.contains(&member) {
            state.members.push(member);
        }
    }

    fn resolve(&mut self, pointer: PointerId, member: MemberId, disposition: GestureDisposition) {
        let Some(state) = self.arenas.get_mut(&pointer) else {
            log::trace!("arena {pointer}: ignoring {disposition:?} from {member:?}, already resolved");
            return;
        };
        let Some(index) = state.members.iter().position(|m| *m == member) else {
            log::trace!("arena {pointer}: ignoring {disposition:?} from non-member {member:?}");
            return;
        };

        match disposition {
            GestureDisposition::Rejected => {
                state.members.remove(index);
                if state.eager_winner == Some(member) {
                    state.eager_winner = None;
                }
                let is_open = state.is_open;
                self.queue(pointer, member, GestureDisposition::Rejected);
                if !is_open {
                    self.try_to_resolve(pointer);
                }
            }
            GestureDisposition::Accepted => {
                if state.is_open {
                    if state.eager_winner.is_none() {
                        state.eager_winner = Some(member);
                    }
                } else {
                    self.resolve_in_favor_of(pointer, member);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(arena: &mut GestureArena) -> Vec<ArenaDecision> {
        std::iter::from_fn(|| arena.pop_decision()).collect()
    }

    fn decision(
        pointer: PointerId,
        member: MemberId,
        disposition: GestureDisposition,
    ) -> ArenaDecision {
        ArenaDecision {
            pointer,
            member,
            disposition,
        }
    }

    #[test]
    fn lone_member_wins_on_close() {
        let mut arena = GestureArena::new();
        let member = MemberId::next();
        arena.add(1, member);
        assert!(drain(&mut arena).is_empty(), "open arena must not resolve");

        arena.close(1);
        assert_eq!(
            drain(&mut arena),
            vec![decision(1, member, GestureDisposition::Accepted)]
        );
        assert!(!arena.contains(1));
    }

    #[test]
    fn claim_after_close_rejects_everyone_else() {
        let mut arena = GestureArena::new();
        let (a, b, c) = (MemberId::next(), MemberId::next(), MemberId::next());
        arena.add(7, a);
        arena.add(7, b);
        arena.add(7, c);
        arena.close(7);
        assert_eq!(arena.members(7), &[a, b, c]);

        arena.resolve(7, b, GestureDisposition::Accepted);
        assert_eq!(
            drain(&mut arena),
            vec![
                decision(7, a, GestureDisposition::Rejected),
                decision(7, c, GestureDisposition::Rejected),
                decision(7, b, GestureDisposition::Accepted),
            ]
        );
        assert!(arena.is_empty());
    }

    #[test]
    fn eager_claim_wins_when_arena_closes() {
        let mut arena = GestureArena::new();
        let (a, b) = (MemberId::next(), MemberId::next());
        arena.add(2, a);
        arena.add(2, b);
        arena.resolve(2, b, GestureDisposition::Accepted);
        assert!(!arena.has_pending_decisions());

        arena.close(2);
        assert_eq!(
            drain(&mut arena),
            vec![
                decision(2, a, GestureDisposition::Rejected),
                decision(2, b, GestureDisposition::Accepted),
            ]
        );
    }

    #[test]
    fn rejection_leaves_last_member_standing() {
        let mut arena = GestureArena::new();
        let (a, b) = (MemberId::next(), MemberId::next());
        arena.add(3, a);
        arena.add(3, b);
        arena.close(3);

        arena.resolve(3, a, GestureDisposition::Rejected);
        assert_eq!(
            drain(&mut arena),
            vec![
                decision(3, a, GestureDisposition::Rejected),
                decision(3, b, GestureDisposition::Accepted),
            ]
        );
    }

    #[test]
    fn sweep_picks_first_member() {
        let mut arena = GestureArena::new();
        let (a, b) = (MemberId::next(), MemberId::next());
        arena.add(4, a);
        arena.add(4, b);
        arena.close(4);
        arena.sweep(4);
        assert_eq!(
            drain(&mut arena),
            vec![
                decision(4, a, GestureDisposition::Accepted),
                decision(4, b, GestureDisposition::Rejected),
            ]
        );
    }

    #[test]
    fn resolutions_after_the_fact_are_ignored() {
        let mut arena = GestureArena::new();
        let (a, b) = (MemberId::next(), MemberId::next());
        arena.add(5, a);
        arena.close(5);
        drain(&mut arena);

        arena.resolve(5, a, GestureDisposition::Rejected);
        arena.resolve(5, b, GestureDisposition::Accepted);
        arena.sweep(5);
        assert!(drain(&mut arena).is_empty());
    }

    #[test]
    fn late_joiner_is_rejected() {
        let mut arena = GestureArena::new();
        let (a, b, late) = (MemberId::next(), MemberId::next(), MemberId::next());
        arena.add(6, a);
        arena.add(6, b);
        arena.close(6);

        arena.add(6, late);
        assert_eq!(
            drain(&mut arena),
            vec![decision(6, late, GestureDisposition::Rejected)]
        );
        assert_eq!(arena.members(6), &[a, b]);
    }
}
