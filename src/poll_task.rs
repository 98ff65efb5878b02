//! Periodic joystick polling task.
//!
//! Contains [`joystick_poll_task`], a cooperative loop that polls a
//! [`JoystickReader`] at the configured rate and publishes every direction
//! change through an `embassy-sync` [`Signal`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

use crate::analog::AnalogSource;
use crate::direction::Direction;
use crate::joystick::JoystickReader;

/// A direction change together with the positions that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickUpdate {
    pub direction: Direction,
    pub x: i32,
    pub y: i32,
}

/// Periodic polling loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn joystick_task(
///     reader: JoystickReader<'static, MyAdc>,
///     updates: &'static Signal<CriticalSectionRawMutex, JoystickUpdate>,
/// ) {
///     joystick_poll_task(reader, updates).await;
/// }
/// ```
///
/// # Control flow
///
/// Every `1000 / poll_frequency_hz` ms the reader is polled. Registered
/// handlers run inside `poll()` as usual. When the direction differs from
/// the last published one, a [`JoystickUpdate`] is signalled; a slow
/// consumer only ever sees the latest update.
///
/// # Errors
///
/// A failed poll is logged and the loop continues with the next period.
pub async fn joystick_poll_task<A>(
    mut reader: JoystickReader<'static, A>,
    updates: &'static Signal<CriticalSectionRawMutex, JoystickUpdate>,
) where
    A: AnalogSource,
{
    let period = Duration::from_millis(reader.config().poll_period_ms());
    let mut last_direction = reader.state();

    #[cfg(feature = "defmt")]
    defmt::info!("Joystick poll task started ({} ms period)", period.as_millis());

    loop {
        Timer::after(period).await;

        let direction = match reader.poll() {
            Ok(direction) => direction,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Joystick poll failed");
                continue;
            }
        };

        if direction == last_direction {
            continue;
        }

        updates.signal(JoystickUpdate {
            direction,
            x: reader.x(),
            y: reader.y(),
        });
        last_direction = direction;
    }
}
