//! Sensor input traits

/// One-shot analog read, in the `nb` style of embedded ADC HALs
///
/// ```rust
/// use envmon_core::traits::AnalogInput;
///
/// struct Fixed(u16);
///
/// impl AnalogInput for Fixed {
///     type Error = core::convert::Infallible;
///
///     fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
///         Ok(self.0)
///     }
/// }
///
/// let mut pin = Fixed(512);
/// assert_eq!(nb::block!(pin.read_raw()), Ok(512));
/// ```
pub trait AnalogInput {
    /// Platform error
    type Error: core::fmt::Debug;

    /// Start or poll a conversion; `WouldBlock` until the count is ready
    fn read_raw(&mut self) -> nb::Result<u16, Self::Error>;
}

/// Temperature/humidity module behind its own protocol driver
///
/// Drivers in the DHT family return NaN when a transaction fails instead of
/// an error; the sampler treats non-finite values as failed reads, so either
/// convention is fine here.
pub trait ClimateSensor {
    /// Driver error
    type Error: core::fmt::Debug;

    /// Temperature (°C)
    fn read_temperature(&mut self) -> Result<f32, Self::Error>;

    /// Relative humidity (%)
    fn read_humidity(&mut self) -> Result<f32, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        T::read_raw(self)
    }
}

impl<T: ClimateSensor + ?Sized> ClimateSensor for &mut T {
    type Error = T::Error;

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        T::read_temperature(self)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        T::read_humidity(self)
    }
}
