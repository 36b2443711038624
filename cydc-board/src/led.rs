//! The active-low RGB LED.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// An RGB colour, one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const PURPLE: Rgb = Rgb::new(255, 0, 255);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An RGB LED the board can drive.
pub trait RgbLed {
    type Error: core::fmt::Debug;

    /// Shows `color`.
    fn set_color(&mut self, color: Rgb) -> Result<(), Self::Error>;

    /// Switches every channel off.
    fn off(&mut self) -> Result<(), Self::Error> {
        self.set_color(Rgb::BLACK)
    }
}

/// LED driven by plain output pins: each channel is either on or off.
///
/// The pins should be created high so the LED starts dark.
pub struct StaticRgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> StaticRgbLed<R, G, B> {
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }
}

impl<R, G, B, E> RgbLed for StaticRgbLed<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    /// Any non-zero channel value lights that channel.
    fn set_color(&mut self, color: Rgb) -> Result<(), E> {
        drive(&mut self.red, color.r)?;
        drive(&mut self.green, color.g)?;
        drive(&mut self.blue, color.b)
    }
}

fn drive<P: OutputPin>(pin: &mut P, value: u8) -> Result<(), P::Error> {
    // Active low.
    if value > 0 {
        pin.set_low()
    } else {
        pin.set_high()
    }
}

/// LED driven by PWM channels, 256 levels per channel.
///
/// The LED never goes completely dark in this mode.
pub struct PwmRgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B, E> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle<Error = E>,
    G: SetDutyCycle<Error = E>,
    B: SetDutyCycle<Error = E>,
{
    /// Takes the channels and switches them off.
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Result<Self, E> {
        red.set_duty_cycle_fully_on()?;
        green.set_duty_cycle_fully_on()?;
        blue.set_duty_cycle_fully_on()?;
        Ok(Self { red, green, blue })
    }
}

impl<R, G, B, E> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle<Error = E>,
    G: SetDutyCycle<Error = E>,
    B: SetDutyCycle<Error = E>,
    E: core::fmt::Debug,
{
    type Error = E;

    /// Maps each channel linearly and inverted onto the duty range.
    fn set_color(&mut self, color: Rgb) -> Result<(), E> {
        self.red.set_duty_cycle_fraction(u16::from(255 - color.r), 255)?;
        self.green.set_duty_cycle_fraction(u16::from(255 - color.g), 255)?;
        self.blue.set_duty_cycle_fraction(u16::from(255 - color.b), 255)
    }
}
