//! Notification payloads and the optional callbacks that receive them.

use dragkit_geometry::{Offset, Point, Velocity};

/// A pointer made contact and a drag may follow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragDownDetails {
    pub global_position: Point,
}

/// The recognizer won the arena. Carries the position of the first contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStartDetails {
    pub global_position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdateDetails {
    /// Motion since the previous update, projected onto the recognizer's axis.
    pub delta: Offset,
    /// `delta` along the primary axis; `None` for pans.
    pub primary_delta: Option<f32>,
    pub global_position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEndDetails {
    /// Release velocity, zero when the release was not a fling.
    pub velocity: Velocity,
    /// `velocity` along the primary axis; `None` for pans.
    pub primary_velocity: Option<f32>,
}

type Callback<T> = Option<Box<dyn FnMut(T)>>;

/// Optional handlers for the notifications a drag recognizer emits.
///
/// Absent handlers are skipped.
#[derive(Default)]
pub struct DragCallbacks {
    pub on_down: Callback<DragDownDetails>,
    pub on_start: Callback<DragStartDetails>,
    pub on_update: Callback<DragUpdateDetails>,
    pub on_end: Callback<DragEndDetails>,
    pub on_cancel: Option<Box<dyn FnMut()>>,
}

impl DragCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_down(mut self, handler: impl FnMut(DragDownDetails) + 'static) -> Self {
        self.on_down = Some(Box::new(handler));
        self
    }

    pub fn on_start(mut self, handler: impl FnMut(DragStartDetails) + 'static) -> Self {
        self.on_start = Some(Box::new(handler));
        self
    }

    pub fn on_update(mut self, handler: impl FnMut(DragUpdateDetails) + 'static) -> Self {
        self.on_update = Some(Box::new(handler));
        self
    }

    pub fn on_end(mut self, handler: impl FnMut(DragEndDetails) + 'static) -> Self {
        self.on_end = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    pub(crate) fn down(&mut self, details: DragDownDetails) {
        if let Some(handler) = self.on_down.as_mut() {
            handler(details);
        }
    }

    pub(crate) fn start(&mut self, details: DragStartDetails) {
        if let Some(handler) = self.on_start.as_mut() {
            handler(details);
        }
    }

    pub(crate) fn update(&mut self, details: DragUpdateDetails) {
        if let Some(handler) = self.on_update.as_mut() {
            handler(details);
        }
    }

    pub(crate) fn end(&mut self, details: DragEndDetails) {
        if let Some(handler) = self.on_end.as_mut() {
            handler(details);
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handler) = self.on_cancel.as_mut() {
            handler();
        }
    }
}

impl std::fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_down", &self.on_down.is_some())
            .field("on_start", &self.on_start.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
