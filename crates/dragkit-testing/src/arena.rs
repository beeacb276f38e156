//! An arena that arbitrates nothing and remembers everything.
//!
//! Driving a recognizer against [`RecordingArena`] lets a test decide when
//! (and whether) acceptance happens, and inspect every claim or concession
//! the recognizer made along the way.

use dragkit_foundation::{GestureArenaHandle, GestureDisposition, MemberId, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaCall {
    Add {
        pointer: PointerId,
        member: MemberId,
    },
    Resolve {
        pointer: PointerId,
        member: MemberId,
        disposition: GestureDisposition,
    },
}

#[derive(Debug, Default)]
pub struct RecordingArena {
    calls: Vec<ArenaCall>,
}

impl RecordingArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ArenaCall] {
        &self.calls
    }

    /// Returns and forgets everything recorded so far.
    pub fn take(&mut self) -> Vec<ArenaCall> {
        std::mem::take(&mut self.calls)
    }

    /// Pointers `member` joined, in order.
    pub fn joined(&self, member: MemberId) -> Vec<PointerId> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                ArenaCall::Add { pointer, member: m } if m == member => Some(pointer),
                _ => None,
            })
            .collect()
    }

    /// Resolutions `member` requested, in order.
    pub fn resolutions(&self, member: MemberId) -> Vec<(PointerId, GestureDisposition)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                ArenaCall::Resolve {
                    pointer,
                    member: m,
                    disposition,
                } if m == member => Some((pointer, disposition)),
                _ => None,
            })
            .collect()
    }

    pub fn has_claimed(&self, member: MemberId, pointer: PointerId) -> bool {
        self.resolutions(member)
            .contains(&(pointer, GestureDisposition::Accepted))
    }
}

impl GestureArenaHandle for RecordingArena {
    fn add(&mut self, pointer: PointerId, member: MemberId) {
        self.calls.push(ArenaCall::Add { pointer, member });
    }

    fn resolve(&mut self, pointer: PointerId, member: MemberId, disposition: GestureDisposition) {
        self.calls.push(ArenaCall::Resolve {
            pointer,
            member,
            disposition,
        });
    }
}
