//! Reader configuration and default calibration constants.

use crate::error::JoystickError;
use crate::thresholds::Thresholds;

/// Default X-axis low threshold for a 10-bit converter.
pub const DEFAULT_X_LOW: i32 = 510;

/// Default X-axis high threshold for a 10-bit converter.
pub const DEFAULT_X_HIGH: i32 = 530;

/// Default Y-axis low threshold for a 10-bit converter.
pub const DEFAULT_Y_LOW: i32 = 510;

/// Default Y-axis high threshold for a 10-bit converter.
pub const DEFAULT_Y_HIGH: i32 = 540;

/// Half-width of the dead zone produced by calibration, in raw units.
pub const DEFAULT_CENTER_TOLERANCE: i32 = 5;

/// Samples averaged per axis during calibration.
pub const DEFAULT_CALIBRATION_SAMPLES: u8 = 10;

/// Configuration for a [`JoystickReader`](crate::JoystickReader).
///
/// [`JoystickConfig::default()`] reproduces the classic 10-bit defaults
/// (dead zones 510–530 on X and 510–540 on Y, ±5 after calibration,
/// 10 calibration samples, 100 Hz polling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// X-axis low threshold. Default: 510.
    pub x_low: i32,
    /// X-axis high threshold. Default: 530.
    pub x_high: i32,
    /// Y-axis low threshold. Default: 510.
    pub y_low: i32,
    /// Y-axis high threshold. Default: 540.
    pub y_high: i32,

    // ── Calibration ──────────────────────────────────────────────────
    /// Samples averaged per axis by `calibrate()`. Default: 10. Must be > 0.
    pub calibration_samples: u8,
    /// Dead-zone half-width applied around the calibrated center. Default: 5.
    pub center_tolerance: i32,

    // ── Polling ──────────────────────────────────────────────────────
    /// Rate of the periodic poll task in Hz. Default: 100.
    pub poll_frequency_hz: u32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            x_low: DEFAULT_X_LOW,
            x_high: DEFAULT_X_HIGH,
            y_low: DEFAULT_Y_LOW,
            y_high: DEFAULT_Y_HIGH,
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES,
            center_tolerance: DEFAULT_CENTER_TOLERANCE,
            poll_frequency_hz: 100,
        }
    }
}

impl JoystickConfig {
    /// X-axis dead zone.
    pub fn x_thresholds(&self) -> Thresholds {
        Thresholds::new(self.x_low, self.x_high)
    }

    /// Y-axis dead zone.
    pub fn y_thresholds(&self) -> Thresholds {
        Thresholds::new(self.y_low, self.y_high)
    }

    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / poll_frequency_hz`, never less than 1 ms. A zero
    /// frequency is treated as 1 Hz.
    pub fn poll_period_ms(&self) -> u64 {
        (1000 / u64::from(self.poll_frequency_hz.max(1))).max(1)
    }

    /// Check the constraints that the reader itself does not enforce.
    ///
    /// # Errors
    /// * [`JoystickError::InvalidThresholds`] if either axis has `low > high`
    /// * [`JoystickError::NoCalibrationSamples`] if `calibration_samples == 0`
    pub fn validate<E>(&self) -> Result<(), JoystickError<E>> {
        if !self.x_thresholds().is_ordered() || !self.y_thresholds().is_ordered() {
            return Err(JoystickError::InvalidThresholds);
        }
        if self.calibration_samples == 0 {
            return Err(JoystickError::NoCalibrationSamples);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = JoystickConfig::default();
        assert_eq!(config.x_thresholds(), Thresholds::new(510, 530));
        assert_eq!(config.y_thresholds(), Thresholds::new(510, 540));
        assert_eq!(config.calibration_samples, 10);
        assert_eq!(config.center_tolerance, 5);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(JoystickConfig::default().validate::<Infallible>().is_ok());
    }

    #[test]
    fn inverted_axis_fails_validation() {
        let config = JoystickConfig {
            y_low: 600,
            y_high: 500,
            ..JoystickConfig::default()
        };
        assert!(matches!(
            config.validate::<Infallible>(),
            Err(JoystickError::InvalidThresholds)
        ));
    }

    #[test]
    fn zero_samples_fails_validation() {
        let config = JoystickConfig {
            calibration_samples: 0,
            ..JoystickConfig::default()
        };
        assert!(matches!(
            config.validate::<Infallible>(),
            Err(JoystickError::NoCalibrationSamples)
        ));
    }

    #[test]
    fn poll_period_conversion() {
        let mut config = JoystickConfig::default();
        assert_eq!(config.poll_period_ms(), 10);

        config.poll_frequency_hz = 0;
        assert_eq!(config.poll_period_ms(), 1000);

        config.poll_frequency_hz = 5000;
        assert_eq!(config.poll_period_ms(), 1);
    }
}
