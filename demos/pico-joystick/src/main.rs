//! pico-joystick
//!
//! Analog thumb joystick demo firmware for the Raspberry Pi Pico 2.
//!
//! 1. At boot the stick is sampled at rest and the dead zones are centered
//!    on the measured position.
//! 2. The joystick task polls both axes at 100 Hz. Direction handlers log
//!    each transition and count excursions away from center.
//! 3. The main task waits on the update signal and logs the new direction
//!    and positions.
//!
//! # Wiring
//!
//! | Signal  | Pico 2 Pin | Notes                      |
//! |---------|------------|----------------------------|
//! | VRx     | GP26       | ADC0                       |
//! | VRy     | GP27       | ADC1                       |
//! | +5V/VCC | 3V3(OUT)   | Stick must share ADC_VREF  |

#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::Pull;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use {defmt_rtt as _, panic_probe as _};

use joystick_driver::{
    joystick_poll_task, AnalogSource, JoystickConfig, JoystickReader, JoystickUpdate,
    SharedJoystickState,
};

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Direction changes published by the joystick task, consumed by main.
static UPDATES: Signal<CriticalSectionRawMutex, JoystickUpdate> = Signal::new();

/// Lock-free mirror of the latest poll, readable from any context.
static SHARED: SharedJoystickState = SharedJoystickState::new();

/// Number of transitions away from center since boot.
static EXCURSIONS: AtomicU32 = AtomicU32::new(0);

// ---------------------------------------------------------------------------
// ADC adapter
// ---------------------------------------------------------------------------

/// Blocking RP2350 ADC (12-bit, 0–4095).
struct RpAdc(Adc<'static, Blocking>);

impl AnalogSource for RpAdc {
    type Channel = Channel<'static>;
    type Error = adc::Error;

    fn read(&mut self, channel: &mut Self::Channel) -> Result<u16, Self::Error> {
        self.0.blocking_read(channel)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn on_center() {
    info!("Joystick released");
}

fn on_up() {
    info!("Joystick up");
}

fn on_down() {
    info!("Joystick down");
}

fn on_not_center() {
    EXCURSIONS.fetch_add(1, Ordering::Relaxed);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `joystick_poll_task` so it
/// can be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn joystick_task(reader: JoystickReader<'static, RpAdc>) {
    joystick_poll_task(reader, &UPDATES).await;
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("pico-joystick starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // VRx → GP26 (ADC0)
    // VRy → GP27 (ADC1)
    // ———————————————————————————————————————————————————————————————————————

    let adc = RpAdc(Adc::new_blocking(p.ADC, adc::Config::default()));
    let x_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let y_channel = Channel::new_pin(p.PIN_27, Pull::None);

    // 12-bit converter: widen the calibrated dead zone accordingly.
    let config = JoystickConfig {
        center_tolerance: 80,
        calibration_samples: 32,
        ..JoystickConfig::default()
    };
    let mut reader = JoystickReader::with_config(adc, x_channel, y_channel, config);

    // —— Calibration ————————————————————————————————————————————————————————

    // Leave the stick untouched during boot. On failure the 10-bit defaults
    // stay in place, which effectively reads as permanently up-right on a
    // 12-bit converter.
    match reader.calibrate() {
        Ok((x, y)) => info!("Rest position: ({}, {})", x, y),
        Err(e) => error!("Calibration failed: {}", e),
    }

    reader.on_center(&on_center);
    reader.on_up(&on_up);
    reader.on_down(&on_down);
    reader.on_not_center(&on_not_center);
    reader.attach_shared(&SHARED);

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(unwrap!(joystick_task(reader)));
    info!("Joystick task spawned");

    loop {
        let update = UPDATES.wait().await;
        info!(
            "{} at ({}, {}), excursions={}",
            update.direction,
            update.x,
            update.y,
            EXCURSIONS.load(Ordering::Relaxed)
        );
    }
}
