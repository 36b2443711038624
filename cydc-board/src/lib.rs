//! A `no_std` board-support crate for the ESP32-2432S024C, the capacitive
//! touch "Cheap Yellow Display" (CYDc).
//!
//! [`Cydc`] owns the board's peripherals as independent components:
//!
//! | Peripheral    | Pins             | Component                          |
//! |---------------|------------------|------------------------------------|
//! | Touch CST820  | 32, 33, 21, 25   | any [`TouchSurface`]               |
//! | RGB LED       | 4, 16, 17        | [`StaticRgbLed`] or [`PwmRgbLed`]  |
//! | Light sensor  | 34               | [`LightSensor`]                    |
//! | BOOT button   | 0                | [`BootButton`]                     |
//! | Backlight     | 27               | [`Backlight`]                      |
//! | Speaker       | 26               | [`Speaker`]                        |
//! | SD card       | 5, 18, 19, 23    | [`SdCard`]                         |
//!
//! The touch controller is driven by [`cydc_touch`]; initialize it before
//! handing it to [`Cydc::new`]. Touch coordinates are raw unless mapped with
//! [`DisplayGeometry::map_touch`] or read through [`Cydc::touch_position`].

#![cfg_attr(not(test), no_std)]

mod backlight;
mod board;
mod button;
mod config;
mod geometry;
mod led;
mod light;
mod sd;
mod speaker;

#[cfg(test)]
mod mock;

pub use backlight::Backlight;
pub use board::{Cydc, Parts, ShutdownError, TouchSurface};
pub use button::BootButton;
pub use config::{BoardConfig, MAX_SPEAKER_GAIN};
pub use geometry::DisplayGeometry;
pub use led::{PwmRgbLed, Rgb, RgbLed, StaticRgbLed};
pub use light::{AnalogInput, LightSensor};
pub use sd::{SdCard, SdError, SdMount, SdState, MOUNT_POINT};
pub use speaker::{AnalogOutput, Speaker};
