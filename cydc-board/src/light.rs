//! The light-dependent resistor on GPIO34.

/// A 16-bit analog input.
///
/// `embedded-hal` has no ADC trait; implement this over the HAL's one-shot
/// read, scaled to the full `u16` range.
pub trait AnalogInput {
    type Error: core::fmt::Debug;

    fn read_u16(&mut self) -> Result<u16, Self::Error>;
}

/// Light sensor. The divider reads higher the darker it is.
pub struct LightSensor<A> {
    adc: A,
}

impl<A: AnalogInput> LightSensor<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Darkness from 0.0 (bright) to 1.0 (dark).
    pub fn darkness(&mut self) -> Result<f32, A::Error> {
        Ok(f32::from(self.raw()?) / f32::from(u16::MAX))
    }

    /// The unscaled reading.
    pub fn raw(&mut self) -> Result<u16, A::Error> {
        self.adc.read_u16()
    }
}
