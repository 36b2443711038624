//! Bring-up and polling of the CST820.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::channel::RegisterChannel;
use crate::config::{TouchConfig, DISABLE_AUTO_SLEEP, REG_DISABLE_AUTO_SLEEP, REG_TOUCH_DATA};
use crate::error::{InitError, PollError};
use crate::report::{decode, TouchMode, TouchReport};
use crate::reset::reset_controller_with;

/// Resets the controller, keeps it from sleeping, and returns a controller
/// ready to poll. Uses [`TouchConfig::default`].
pub fn initialize_touch<I2cType, INT, RST, D, ErrorType, PinErrorType>(
    bus: I2cType,
    interrupt_line: INT,
    reset_line: RST,
    delay: &mut D,
) -> Result<TouchController<I2cType, INT, RST>, InitError<ErrorType, PinErrorType>>
where
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    ErrorType: embedded_hal::i2c::Error,
    INT: OutputPin<Error = PinErrorType>,
    RST: OutputPin<Error = PinErrorType>,
    D: DelayNs,
{
    initialize_touch_with(TouchConfig::default(), bus, interrupt_line, reset_line, delay)
}

/// Like [`initialize_touch`] with an explicit configuration.
///
/// Runs the reset sequence, then writes the sleep-disable register exactly
/// once. Nothing is read from the controller before that write succeeds.
/// Any failure is fatal: a controller that cannot be told to stay awake
/// reports phantom touches.
pub fn initialize_touch_with<I2cType, INT, RST, D, ErrorType, PinErrorType>(
    config: TouchConfig,
    bus: I2cType,
    mut interrupt_line: INT,
    mut reset_line: RST,
    delay: &mut D,
) -> Result<TouchController<I2cType, INT, RST>, InitError<ErrorType, PinErrorType>>
where
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    ErrorType: embedded_hal::i2c::Error,
    INT: OutputPin<Error = PinErrorType>,
    RST: OutputPin<Error = PinErrorType>,
    D: DelayNs,
{
    reset_controller_with(config.reset_timing, &mut interrupt_line, &mut reset_line, delay)
        .inspect_err(|_| log::warn!("Touch reset sequence failed"))?;

    let mut channel = RegisterChannel::new(bus);
    channel.write_register(config.address, REG_DISABLE_AUTO_SLEEP, &[DISABLE_AUTO_SLEEP])?;
    log::info!("Touch controller 0x{:02X} online, auto sleep disabled", config.address);

    Ok(TouchController {
        channel,
        interrupt_line,
        reset_line,
        config,
    })
}

/// An awake CST820, polled for touch reports.
///
/// Only obtainable through [`initialize_touch`], so every poll happens after
/// the reset sequence and the sleep-disable write.
pub struct TouchController<I2cType, INT, RST> {
    channel: RegisterChannel<I2cType>,
    // Held so nothing else drives the lines while the controller is in use.
    interrupt_line: INT,
    reset_line: RST,
    config: TouchConfig,
}

impl<I2cType, INT, RST, ErrorType> TouchController<I2cType, INT, RST>
where
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    ErrorType: embedded_hal::i2c::Error,
{
    /// Reads and decodes one touch report.
    ///
    /// Reads one point when `multitouch` is false, two when it is true.
    /// Errors only concern this poll; there is no retry, the next poll
    /// starts afresh.
    pub fn poll(&mut self, multitouch: bool) -> Result<TouchReport, PollError<ErrorType>> {
        let mode = TouchMode::from_multitouch(multitouch);
        let raw = self
            .channel
            .read_registers(self.config.address, REG_TOUCH_DATA, mode.frame_len())?;

        let report = decode(&raw, multitouch).inspect_err(|err| {
            log::warn!("Discarding touch report {raw:02X?}: {err}");
        })?;
        log::trace!("Touch report {report:?}");
        Ok(report)
    }

    /// Configuration the controller was brought up with.
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Gives back the bus and both lines.
    pub fn release(self) -> (I2cType, INT, RST) {
        (self.channel.release(), self.interrupt_line, self.reset_line)
    }
}
