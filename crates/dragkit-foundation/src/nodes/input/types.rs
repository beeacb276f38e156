use dragkit_geometry::{Offset, Point};
use smallvec::SmallVec;

pub type PointerId = u64;

/// Milliseconds of monotonic uptime, as stamped by the platform.
pub type Uptime = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Stylus,
    Eraser,
    Unknown,
}

impl PointerType {
    /// Precise pointers report exact positions and get smaller slop values.
    pub fn is_precise(&self) -> bool {
        matches!(self, PointerType::Mouse)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1 << (PointerButton::Primary as u8));

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn intersects(&self, other: PointerButtons) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// A sample the platform coalesced into a later move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoricalSample {
    pub uptime: Uptime,
    pub position: Point,
}

/// First contact of a pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerDown {
    pub id: PointerId,
    pub uptime: Uptime,
    pub position: Point,
    pub type_: PointerType,
    pub buttons: PointerButtons,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerMove {
    pub id: PointerId,
    pub uptime: Uptime,
    pub position: Point,
    /// Change since the previous event for this pointer.
    pub delta: Offset,
    /// Older samples, oldest first.
    pub historical: SmallVec<[HistoricalSample; 4]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerUp {
    pub id: PointerId,
    pub uptime: Uptime,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerCancel {
    pub id: PointerId,
    pub uptime: Uptime,
}

/// One step in the lifecycle of a pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Down(PointerDown),
    Move(PointerMove),
    Up(PointerUp),
    Cancel(PointerCancel),
}

impl PointerInput {
    pub fn pointer(&self) -> PointerId {
        match self {
            PointerInput::Down(event) => event.id,
            PointerInput::Move(event) => event.id,
            PointerInput::Up(event) => event.id,
            PointerInput::Cancel(event) => event.id,
        }
    }

    pub fn uptime(&self) -> Uptime {
        match self {
            PointerInput::Down(event) => event.uptime,
            PointerInput::Move(event) => event.uptime,
            PointerInput::Up(event) => event.uptime,
            PointerInput::Cancel(event) => event.uptime,
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerInput::Down(_) => PointerEventKind::Down,
            PointerInput::Move(_) => PointerEventKind::Move,
            PointerInput::Up(_) => PointerEventKind::Up,
            PointerInput::Cancel(_) => PointerEventKind::Cancel,
        }
    }

    /// Whether the pointer is no longer down after this event.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PointerInput::Up(_) | PointerInput::Cancel(_))
    }
}

impl PointerDown {
    pub fn new(id: PointerId, uptime: Uptime, position: Point) -> Self {
        Self {
            id,
            uptime,
            position,
            type_: PointerType::Touch,
            buttons: PointerButtons::PRIMARY,
        }
    }

    pub fn with_type(mut self, type_: PointerType) -> Self {
        self.type_ = type_;
        self
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

impl PointerMove {
    pub fn new(id: PointerId, uptime: Uptime, position: Point, delta: Offset) -> Self {
        Self {
            id,
            uptime,
            position,
            delta,
            historical: SmallVec::new(),
        }
    }
}

impl From<PointerDown> for PointerInput {
    fn from(event: PointerDown) -> Self {
        PointerInput::Down(event)
    }
}

impl From<PointerMove> for PointerInput {
    fn from(event: PointerMove) -> Self {
        PointerInput::Move(event)
    }
}

impl From<PointerUp> for PointerInput {
    fn from(event: PointerUp) -> Self {
        PointerInput::Up(event)
    }
}

impl From<PointerCancel> for PointerInput {
    fn from(event: PointerCancel) -> Self {
        PointerInput::Cancel(event)
    }
}
