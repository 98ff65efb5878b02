//! Event kinds and the handler table used for transition dispatch.

use crate::direction::Direction;

/// Number of callback slots: one per direction plus "not center".
pub const EVENT_COUNT: usize = 10;

/// Events a handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickEvent {
    Center,
    Up,
    RightUp,
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
    /// Any transition into a state other than [`Direction::Center`].
    NotCenter,
}

impl JoystickEvent {
    fn slot(self) -> usize {
        match self {
            JoystickEvent::Center => 0,
            JoystickEvent::Up => 1,
            JoystickEvent::RightUp => 2,
            JoystickEvent::Right => 3,
            JoystickEvent::RightDown => 4,
            JoystickEvent::Down => 5,
            JoystickEvent::LeftDown => 6,
            JoystickEvent::Left => 7,
            JoystickEvent::LeftUp => 8,
            JoystickEvent::NotCenter => 9,
        }
    }
}

impl From<Direction> for JoystickEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Center => JoystickEvent::Center,
            Direction::Up => JoystickEvent::Up,
            Direction::RightUp => JoystickEvent::RightUp,
            Direction::Right => JoystickEvent::Right,
            Direction::RightDown => JoystickEvent::RightDown,
            Direction::Down => JoystickEvent::Down,
            Direction::LeftDown => JoystickEvent::LeftDown,
            Direction::Left => JoystickEvent::Left,
            Direction::LeftUp => JoystickEvent::LeftUp,
        }
    }
}

/// Table of borrowed zero-argument handlers, one optional slot per event.
///
/// The table never owns its handlers. Registering replaces whatever was in
/// the slot; empty slots are skipped on dispatch.
#[derive(Clone, Copy, Default)]
pub struct Callbacks<'a> {
    slots: [Option<&'a dyn Fn()>; EVENT_COUNT],
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` for `event`, replacing any previous registration.
    pub fn set(&mut self, event: JoystickEvent, handler: &'a dyn Fn()) {
        self.slots[event.slot()] = Some(handler);
    }

    /// Remove the handler for `event`, returning it if one was set.
    pub fn remove(&mut self, event: JoystickEvent) -> Option<&'a dyn Fn()> {
        self.slots[event.slot()].take()
    }

    /// Returns `true` if a handler is registered for `event`.
    pub fn is_set(&self, event: JoystickEvent) -> bool {
        self.slots[event.slot()].is_some()
    }

    /// Empty every slot without invoking anything.
    pub fn clear(&mut self) {
        self.slots = [None; EVENT_COUNT];
    }

    /// Invoke the handler registered for `event`, if any.
    pub fn fire(&self, event: JoystickEvent) {
        if let Some(handler) = self.slots[event.slot()] {
            handler();
        }
    }

    /// Run the handlers for a transition into `direction`.
    ///
    /// The direction-specific handler runs first, then the "not center"
    /// handler when `direction` is deflected. Callers are responsible for
    /// only calling this when the state actually changed.
    pub fn dispatch_transition(&self, direction: Direction) {
        self.fire(JoystickEvent::from(direction));
        if direction.is_deflected() {
            self.fire(JoystickEvent::NotCenter);
        }
    }
}
