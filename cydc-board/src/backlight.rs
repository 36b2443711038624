//! Display backlight switch on GPIO27.

use embedded_hal::digital::{OutputPin, PinState};

pub struct Backlight<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Takes the pin, assuming the backlight starts off.
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        self.pin.set_state(PinState::from(on))?;
        self.on = on;
        Ok(())
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.set(true)
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.set(false)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
