//! Lock-free snapshot of the joystick state for other execution contexts.
//!
//! The reader is the single writer. Interrupt handlers or other tasks can
//! observe the latest direction and positions without borrowing the reader.
//!
//! Direction and both positions are packed into one `AtomicU32` so a load
//! never mixes values from two different polls. Only plain `load`/`store`
//! are used, which are available on every Cortex-M target including
//! `thumbv6m`.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::direction::Direction;

/// Atomically published direction and normalized positions.
///
/// Layout of the packed word: bits 0–7 direction discriminant, bits 8–15 X
/// position, bits 16–23 Y position (both as two's-complement `i8`).
///
/// # Example
///
/// ```
/// use joystick_driver::{Direction, SharedJoystickState};
///
/// static STATE: SharedJoystickState = SharedJoystickState::new();
///
/// STATE.publish(Direction::Right, 13, 0);
/// assert_eq!(STATE.direction(), Direction::Right);
/// assert_eq!(STATE.position(), (13, 0));
/// ```
#[derive(Debug)]
pub struct SharedJoystickState {
    packed: AtomicU32,
}

impl Default for SharedJoystickState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedJoystickState {
    /// Centered, positions (0, 0). Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            packed: AtomicU32::new(0),
        }
    }

    /// Publish a new snapshot. Positions are saturated to the `i8` range.
    pub fn publish(&self, direction: Direction, x: i32, y: i32) {
        self.packed.store(pack(direction, x, y), Ordering::Release);
    }

    /// Latest `(direction, x, y)` as one consistent snapshot.
    pub fn snapshot(&self) -> (Direction, i32, i32) {
        unpack(self.packed.load(Ordering::Acquire))
    }

    /// Latest published direction.
    pub fn direction(&self) -> Direction {
        self.snapshot().0
    }

    /// Latest published `(x, y)` positions.
    pub fn position(&self) -> (i32, i32) {
        let (_, x, y) = self.snapshot();
        (x, y)
    }

    pub fn is_center(&self) -> bool {
        self.direction() == Direction::Center
    }
}

fn pack(direction: Direction, x: i32, y: i32) -> u32 {
    let x = x.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8 as u8;
    let y = y.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8 as u8;
    u32::from(direction as u8) | (u32::from(x) << 8) | (u32::from(y) << 16)
}

fn unpack(word: u32) -> (Direction, i32, i32) {
    // Only `pack` writes the word, so the discriminant is always valid.
    let direction = Direction::from_u8((word & 0xFF) as u8).unwrap_or_default();
    let x = i32::from(((word >> 8) & 0xFF) as u8 as i8);
    let y = i32::from(((word >> 16) & 0xFF) as u8 as i8);
    (direction, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered() {
        let state = SharedJoystickState::new();
        assert_eq!(state.snapshot(), (Direction::Center, 0, 0));
        assert!(state.is_center());
    }

    #[test]
    fn publish_preserves_signed_positions() {
        let state = SharedJoystickState::new();
        for d in Direction::ALL {
            for (x, y) in [(-100, 100), (100, -100), (-1, 0), (0, -22), (13, 96)] {
                state.publish(d, x, y);
                assert_eq!(state.snapshot(), (d, x, y));
            }
        }
    }

    #[test]
    fn out_of_range_positions_saturate() {
        let state = SharedJoystickState::new();
        state.publish(Direction::LeftUp, -1000, 1000);
        assert_eq!(state.position(), (-128, 127));
        assert_eq!(state.direction(), Direction::LeftUp);
    }
}
