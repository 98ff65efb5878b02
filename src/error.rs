//! Error types for the joystick reader.

use core::fmt;

/// Errors that can occur while reading or configuring the joystick.
///
/// Classification itself is total; these only cover converter failures
/// and the opt-in configuration checks.
#[derive(Debug)]
pub enum JoystickError<E> {
    /// Underlying analog converter error.
    Adc(E),

    /// A threshold pair has `low > high`.
    InvalidThresholds,

    /// Calibration was asked to average zero samples.
    NoCalibrationSamples,
}

// Allow ergonomic `?` propagation from raw converter errors.
impl<E> From<E> for JoystickError<E> {
    fn from(error: E) -> Self {
        JoystickError::Adc(error)
    }
}

impl<E: fmt::Debug> fmt::Display for JoystickError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JoystickError::Adc(e) => write!(f, "ADC error: {:?}", e),
            JoystickError::InvalidThresholds => {
                write!(f, "Invalid thresholds (low must not exceed high)")
            }
            JoystickError::NoCalibrationSamples => {
                write!(f, "Calibration needs at least one sample")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for JoystickError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            JoystickError::Adc(e) => defmt::write!(f, "ADC error: {}", e),
            JoystickError::InvalidThresholds => defmt::write!(f, "Invalid thresholds"),
            JoystickError::NoCalibrationSamples => {
                defmt::write!(f, "No calibration samples")
            }
        }
    }
}
