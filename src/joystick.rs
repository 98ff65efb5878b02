//! High-level interface for a two-axis analog joystick.
//!
//! [`JoystickReader`] owns the converter and both axis channels, keeps the
//! per-axis dead zones, and turns periodic samples into edge-triggered
//! direction callbacks.

use core::mem;

use crate::analog::AnalogSource;
use crate::callbacks::{Callbacks, JoystickEvent};
use crate::config::JoystickConfig;
use crate::direction::Direction;
use crate::error::JoystickError;
use crate::shared::SharedJoystickState;
use crate::thresholds::Thresholds;

/// Reads a two-axis joystick and dispatches callbacks on direction changes.
///
/// Handlers are borrowed for `'a`; the reader never owns or frees them.
///
/// # Lifecycle
///
/// 1. [`JoystickReader::new()`] — binds the converter and channels with the
///    default dead zones. The reader starts in [`Direction::Center`].
/// 2. [`calibrate()`](Self::calibrate) — optional, with the stick at rest.
/// 3. Register handlers with the `on_*` methods.
/// 4. Call [`poll()`](Self::poll) from the main loop.
///
/// # Example
///
/// ```ignore
/// use joystick_driver::JoystickReader;
///
/// fn on_up() { /* ... */ }
///
/// let mut joystick = JoystickReader::new(adc, x_channel, y_channel);
/// joystick.calibrate()?;
/// joystick.on_up(&on_up);
///
/// loop {
///     let direction = joystick.poll()?;
/// }
/// ```
pub struct JoystickReader<'a, A>
where
    A: AnalogSource,
{
    adc: A,
    x_channel: A::Channel,
    y_channel: A::Channel,
    x_thresholds: Thresholds,
    y_thresholds: Thresholds,
    config: JoystickConfig,
    x_pos: i32,
    y_pos: i32,
    state: Direction,
    callbacks: Callbacks<'a>,
    shared: Option<&'a SharedJoystickState>,
}

impl<'a, A> JoystickReader<'a, A>
where
    A: AnalogSource,
{
    /// Create a reader with the default dead zones and calibration settings.
    ///
    /// # Arguments
    /// * `adc` — converter (takes ownership for exclusive access)
    /// * `x_channel` — analog input wired to the X axis
    /// * `y_channel` — analog input wired to the Y axis
    pub fn new(adc: A, x_channel: A::Channel, y_channel: A::Channel) -> Self {
        Self::with_config(adc, x_channel, y_channel, JoystickConfig::default())
    }

    /// Create a reader from an explicit configuration.
    ///
    /// The configuration is not validated; call
    /// [`JoystickConfig::validate()`] first if that matters.
    pub fn with_config(
        adc: A,
        x_channel: A::Channel,
        y_channel: A::Channel,
        config: JoystickConfig,
    ) -> Self {
        Self {
            adc,
            x_channel,
            y_channel,
            x_thresholds: config.x_thresholds(),
            y_thresholds: config.y_thresholds(),
            config,
            x_pos: 0,
            y_pos: 0,
            state: Direction::Center,
            callbacks: Callbacks::new(),
            shared: None,
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Rebind the axis channels and return the previous pair.
    ///
    /// Thresholds, positions and the current direction are left untouched.
    pub fn set_channels(
        &mut self,
        x_channel: A::Channel,
        y_channel: A::Channel,
    ) -> (A::Channel, A::Channel) {
        (
            mem::replace(&mut self.x_channel, x_channel),
            mem::replace(&mut self.y_channel, y_channel),
        )
    }

    /// Overwrite all four thresholds.
    ///
    /// Not validated: an inverted pair leaves that axis permanently
    /// deflected. Use [`set_thresholds_checked()`](Self::set_thresholds_checked)
    /// to reject it instead.
    pub fn set_thresholds(&mut self, x_low: i32, x_high: i32, y_low: i32, y_high: i32) {
        self.x_thresholds = Thresholds::new(x_low, x_high);
        self.y_thresholds = Thresholds::new(y_low, y_high);
    }

    /// Overwrite all four thresholds after checking `low <= high` per axis.
    ///
    /// # Errors
    /// * [`JoystickError::InvalidThresholds`] if either pair is inverted;
    ///   the current thresholds are kept in that case
    pub fn set_thresholds_checked(
        &mut self,
        x_low: i32,
        x_high: i32,
        y_low: i32,
        y_high: i32,
    ) -> Result<(), JoystickError<A::Error>> {
        if x_low > x_high || y_low > y_high {
            return Err(JoystickError::InvalidThresholds);
        }
        self.set_thresholds(x_low, x_high, y_low, y_high);
        Ok(())
    }

    /// Current `(x, y)` dead zones.
    pub fn thresholds(&self) -> (Thresholds, Thresholds) {
        (self.x_thresholds, self.y_thresholds)
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Mutable access to the converter, e.g. to sample other channels
    /// between polls.
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Mirror every poll result into `shared` for readers in other
    /// contexts (interrupt handlers, other tasks).
    pub fn attach_shared(&mut self, shared: &'a SharedJoystickState) {
        shared.publish(self.state, self.x_pos, self.y_pos);
        self.shared = Some(shared);
    }

    /// Tear the reader down and hand back the converter and channels.
    ///
    /// All handler borrows end here; nothing is invoked.
    pub fn release(self) -> (A, A::Channel, A::Channel) {
        (self.adc, self.x_channel, self.y_channel)
    }

    // -----------------------------------------------------------------------
    // Calibration
    // -----------------------------------------------------------------------

    /// Derive both dead zones from the current resting position.
    ///
    /// Reads `calibration_samples` samples from X, then the same number
    /// from Y, averages each (truncating) and sets the thresholds to
    /// `center ± center_tolerance`. The stick must be at rest; motion
    /// during sampling is not detected.
    ///
    /// Returns the measured `(x_center, y_center)`.
    ///
    /// # Errors
    /// * [`JoystickError::NoCalibrationSamples`] if the sample count is 0
    /// * [`JoystickError::Adc`] on the first failed read; thresholds are
    ///   left unchanged
    pub fn calibrate(&mut self) -> Result<(i32, i32), JoystickError<A::Error>> {
        let samples = self.config.calibration_samples;
        if samples == 0 {
            return Err(JoystickError::NoCalibrationSamples);
        }

        let mut x_sum = 0u32;
        for _ in 0..samples {
            x_sum += u32::from(self.adc.read(&mut self.x_channel)?);
        }

        let mut y_sum = 0u32;
        for _ in 0..samples {
            y_sum += u32::from(self.adc.read(&mut self.y_channel)?);
        }

        let x_center = (x_sum / u32::from(samples)) as i32;
        let y_center = (y_sum / u32::from(samples)) as i32;
        let tolerance = self.config.center_tolerance;

        self.x_thresholds = Thresholds::around_center(x_center, tolerance);
        self.y_thresholds = Thresholds::around_center(y_center, tolerance);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Joystick calibrated: center=({}, {}), x={}, y={}",
            x_center,
            y_center,
            self.x_thresholds,
            self.y_thresholds
        );

        Ok((x_center, y_center))
    }

    // -----------------------------------------------------------------------
    // Polling
    // -----------------------------------------------------------------------

    /// Sample both axes, update positions and direction, and dispatch.
    ///
    /// Handlers only run on the poll where the direction changes: first the
    /// handler for the new direction, then the "not center" handler if the
    /// new direction is deflected. Polling again with the same input
    /// invokes nothing.
    ///
    /// Returns the direction after this poll.
    ///
    /// # Errors
    /// * [`JoystickError::Adc`] if either read fails; no state is modified
    pub fn poll(&mut self) -> Result<Direction, JoystickError<A::Error>> {
        let x_raw = self.adc.read(&mut self.x_channel)?;
        let y_raw = self.adc.read(&mut self.y_channel)?;

        let x = self.x_thresholds.classify(x_raw);
        let y = self.y_thresholds.classify(y_raw);
        self.x_pos = x.position;
        self.y_pos = y.position;

        let direction = Direction::from_flags(x.flag, y.flag);
        let changed = direction != self.state;
        self.state = direction;

        if let Some(shared) = self.shared {
            shared.publish(direction, self.x_pos, self.y_pos);
        }

        if changed {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Joystick -> {} (x={}, y={}, raw=({}, {}))",
                direction,
                self.x_pos,
                self.y_pos,
                x_raw,
                y_raw
            );
            self.callbacks.dispatch_transition(direction);
        }

        Ok(direction)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Direction recorded by the last poll.
    pub fn state(&self) -> Direction {
        self.state
    }

    pub fn is_center(&self) -> bool {
        self.state == Direction::Center
    }

    pub fn is_up(&self) -> bool {
        self.state == Direction::Up
    }

    pub fn is_right_up(&self) -> bool {
        self.state == Direction::RightUp
    }

    pub fn is_right(&self) -> bool {
        self.state == Direction::Right
    }

    pub fn is_right_down(&self) -> bool {
        self.state == Direction::RightDown
    }

    pub fn is_down(&self) -> bool {
        self.state == Direction::Down
    }

    pub fn is_left_down(&self) -> bool {
        self.state == Direction::LeftDown
    }

    pub fn is_left(&self) -> bool {
        self.state == Direction::Left
    }

    pub fn is_left_up(&self) -> bool {
        self.state == Direction::LeftUp
    }

    pub fn is_not_center(&self) -> bool {
        self.state != Direction::Center
    }

    /// Normalized X position from the last poll, -100 (left) to 100 (right).
    pub fn x(&self) -> i32 {
        self.x_pos
    }

    /// Normalized Y position from the last poll, -100 (down) to 100 (up).
    pub fn y(&self) -> i32 {
        self.y_pos
    }

    // -----------------------------------------------------------------------
    // Callback registration
    // -----------------------------------------------------------------------

    /// Register `handler` for `event`, replacing any previous one.
    pub fn on(&mut self, event: JoystickEvent, handler: &'a dyn Fn()) {
        self.callbacks.set(event, handler);
    }

    pub fn on_center(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::Center, handler);
    }

    pub fn on_up(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::Up, handler);
    }

    pub fn on_right_up(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::RightUp, handler);
    }

    pub fn on_right(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::Right, handler);
    }

    pub fn on_right_down(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::RightDown, handler);
    }

    pub fn on_down(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::Down, handler);
    }

    pub fn on_left_down(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::LeftDown, handler);
    }

    pub fn on_left(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::Left, handler);
    }

    pub fn on_left_up(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::LeftUp, handler);
    }

    /// Register a handler that runs on every transition away from center
    /// and between deflected directions.
    pub fn on_not_center(&mut self, handler: &'a dyn Fn()) {
        self.on(JoystickEvent::NotCenter, handler);
    }

    /// Unregister all ten handlers without invoking them.
    pub fn clear_callbacks(&mut self) {
        self.callbacks.clear();
    }
}
