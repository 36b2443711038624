//! A blocking, `no_std` driver for the CST820 capacitive touch controller of
//! the ESP32-2432S024C ("CYDc") board.
//!
//! The controller is brought up in three strictly ordered steps:
//!
//! 1. [`reset_controller`] drives the interrupt and reset lines through a
//!    timed boot sequence.
//! 2. Register `0xFE` is set to `0xFF` over the [`RegisterChannel`]. Without
//!    this write the CST820 falls into a low-power mode that produces
//!    phantom touches.
//! 3. [`TouchController::poll`] reads register `0x02` and [`decode`]s the
//!    report, as often as the caller likes.
//!
//! [`initialize_touch`] performs the first two steps and is the only way to
//! obtain a [`TouchController`].
//!
//! # Usage
//!
//! Any bus implementing `embedded_hal::i2c::I2c` at 400 kHz and any pair of
//! `embedded_hal::digital::OutputPin`s will do.
//!
//! ```no_run
//! # #![no_std]
//! # #![no_main]
//! # use esp_hal::i2c::master::{Config, I2c};
//! # use esp_hal::gpio::{Level, Output, OutputConfig};
//! # use esp_hal::time::Rate;
//! use cydc_touch::initialize_touch;
//!
//! # fn main() {
//! let peripherals = esp_hal::init(esp_hal::Config::default());
//! let config = Config::default().with_frequency(Rate::from_khz(400));
//! let i2c = I2c::new(peripherals.I2C0, config)
//!     .unwrap()
//!     .with_sda(peripherals.GPIO33)
//!     .with_scl(peripherals.GPIO32);
//! let int = Output::new(peripherals.GPIO21, Level::Low, OutputConfig::default());
//! let rst = Output::new(peripherals.GPIO25, Level::High, OutputConfig::default());
//!
//! let mut touch = initialize_touch(i2c, int, rst, &mut embassy_time::Delay).unwrap();
//! loop {
//!     match touch.poll(false) {
//!         Ok(report) => log::info!("{report:?}"),
//!         Err(err) => log::warn!("skipping touch poll: {err:?}"),
//!     }
//! }
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

mod channel;
mod config;
mod controller;
mod error;
mod report;
mod reset;

#[cfg(test)]
mod mock;

pub use channel::{RegisterChannel, MAX_FRAME_LEN};
pub use config::{
    ResetTiming, TouchConfig, BUS_FREQUENCY_HZ, DISABLE_AUTO_SLEEP, REG_DISABLE_AUTO_SLEEP,
    REG_TOUCH_DATA, TOUCH_ADDRESS,
};
pub use controller::{initialize_touch, initialize_touch_with, TouchController};
pub use error::{BusError, DecodeError, InitError, PollError, ResetError};
pub use report::{decode, TouchMode, TouchPoint, TouchReport, MAX_TOUCH_POINTS};
pub use reset::{reset_controller, reset_controller_with};
