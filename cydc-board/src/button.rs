//! The BOOT button on GPIO0.

use embedded_hal::digital::InputPin;

/// The BOOT button, pulled up and pressed low.
pub struct BootButton<P> {
    pin: P,
}

impl<P: InputPin> BootButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }
}
