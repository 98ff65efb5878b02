//! Nine-direction analog joystick reader.
//!
//! This crate turns the two analog axes of a thumb joystick into one of nine
//! discrete [`Direction`]s and invokes user-registered callbacks whenever the
//! direction changes.
//!
//! # Architecture
//!
//! The crate is split into three layers:
//!
//! - **[`AnalogSource`]** — the hardware seam. Implement it for your HAL's
//!   ADC to provide single-sample reads on an owned channel handle.
//! - **[`Thresholds`] / [`Direction`]** — pure classification: each axis is
//!   reduced to an [`AxisFlag`] against its dead zone and the pair is looked
//!   up in a fixed 3×3 table.
//! - **[`JoystickReader`]** (public) — owns the ADC and both channels,
//!   performs calibration, and dispatches edge-triggered callbacks from
//!   [`poll()`](JoystickReader::poll).
//!
//! # Quick start
//!
//! ```ignore
//! use joystick_driver::JoystickReader;
//!
//! fn on_right() { /* ... */ }
//!
//! // `adc`, `x` and `y` come from your HAL's `AnalogSource` implementation
//! let mut joystick = JoystickReader::new(adc, x, y);
//! joystick.calibrate()?;
//! joystick.on_right(&on_right);
//!
//! loop {
//!     joystick.poll()?;
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable `defmt::Format` implementations and transition
//!   logging for embedded targets.
//! - **`task`** — Enable `joystick_poll_task`, a periodic Embassy polling
//!   loop that publishes transitions through a `Signal`.

#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod callbacks;
pub mod config;
pub mod direction;
pub mod error;
pub mod joystick;
#[cfg(feature = "task")]
pub mod poll_task;
pub mod shared;
pub mod thresholds;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use analog::AnalogSource;
pub use callbacks::{Callbacks, JoystickEvent};
pub use config::{
    JoystickConfig, DEFAULT_CALIBRATION_SAMPLES, DEFAULT_CENTER_TOLERANCE, DEFAULT_X_HIGH,
    DEFAULT_X_LOW, DEFAULT_Y_HIGH, DEFAULT_Y_LOW,
};
pub use direction::{AxisFlag, Direction};
pub use error::JoystickError;
pub use joystick::JoystickReader;
#[cfg(feature = "task")]
pub use poll_task::{joystick_poll_task, JoystickUpdate};
pub use shared::SharedJoystickState;
pub use thresholds::{AxisReading, Thresholds, POSITION_MAX, POSITION_MIN};
