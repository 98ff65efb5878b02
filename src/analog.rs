//! Hardware abstraction for analog axis reads.
//!
//! [`JoystickReader`](crate::JoystickReader) never touches registers
//! directly. It owns an [`AnalogSource`] and two channel handles and asks
//! the source for one instantaneous sample per axis on every poll.

/// A converter that can take a single sample from an analog channel.
///
/// Channel handles are owned by the reader. Creating a handle is the
/// HAL's job and is where the pin gets configured as an analog input, so
/// there is no separate configuration step here.
///
/// # Example
///
/// ```ignore
/// use embassy_rp::adc::{Adc, Blocking, Channel, Error};
/// use joystick_driver::AnalogSource;
///
/// struct RpAdc(Adc<'static, Blocking>);
///
/// impl AnalogSource for RpAdc {
///     type Channel = Channel<'static>;
///     type Error = Error;
///
///     fn read(&mut self, channel: &mut Self::Channel) -> Result<u16, Self::Error> {
///         self.0.blocking_read(channel)
///     }
/// }
/// ```
pub trait AnalogSource {
    /// Handle identifying one physical analog input.
    type Channel;

    /// Error reported by the converter.
    type Error;

    /// Take one raw sample from `channel`.
    ///
    /// The returned value is in the converter's native range, e.g. 0–1023
    /// for a 10-bit ADC or 0–4095 for a 12-bit one.
    fn read(&mut self, channel: &mut Self::Channel) -> Result<u16, Self::Error>;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Channel = T::Channel;
    type Error = T::Error;

    fn read(&mut self, channel: &mut Self::Channel) -> Result<u16, Self::Error> {
        T::read(self, channel)
    }
}
