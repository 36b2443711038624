//! Register-addressed reads and writes over the two-wire bus.

use embedded_hal::i2c::{I2c, SevenBitAddress};
use heapless::Vec;

use crate::error::BusError;

/// Largest payload or read handled in one register transaction.
pub const MAX_FRAME_LEN: usize = 32;

/// Register channel owning the touch bus.
///
/// Every call performs one live bus transaction; nothing is cached. Calls
/// take `&mut self`, so only one transaction is ever in flight. If the
/// physical bus is shared with other peripherals, hand the channel a shared
/// device handle (for example `embedded_bus::i2c::MutexI2cDevice`) so
/// transactions to other addresses cannot interleave.
pub struct RegisterChannel<I2cType> {
    i2c: I2cType,
}

impl<I2cType, ErrorType> RegisterChannel<I2cType>
where
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    ErrorType: embedded_hal::i2c::Error,
{
    /// Creates a channel over `i2c`.
    pub fn new(i2c: I2cType) -> Self {
        Self { i2c }
    }

    /// Writes `payload` to consecutive registers starting at `register`.
    pub fn write_register(
        &mut self,
        device_address: u8,
        register: u8,
        payload: &[u8],
    ) -> Result<(), BusError<ErrorType>> {
        let len = payload.len();
        if len >= MAX_FRAME_LEN {
            return Err(BusError::FrameTooLong(len));
        }
        let mut frame = [0u8; MAX_FRAME_LEN];
        frame[0] = register;
        frame[1..=len].copy_from_slice(payload);

        self.i2c
            .write(device_address, &frame[..=len])
            .map_err(|err| {
                log::warn!("Error writing register 0x{register:02X} on 0x{device_address:02X}: {err:?}");
                BusError::Transaction(err)
            })
    }

    /// Reads exactly `len` bytes starting at `register`.
    pub fn read_registers(
        &mut self,
        device_address: u8,
        register: u8,
        len: usize,
    ) -> Result<Vec<u8, MAX_FRAME_LEN>, BusError<ErrorType>> {
        if len > MAX_FRAME_LEN {
            return Err(BusError::FrameTooLong(len));
        }
        let mut buf = [0u8; MAX_FRAME_LEN];
        self.i2c
            .write_read(device_address, &[register], &mut buf[..len])
            .map_err(|err| {
                log::warn!("Error reading register 0x{register:02X} on 0x{device_address:02X}: {err:?}");
                BusError::Transaction(err)
            })?;

        // `len` is bounded by the capacity checked above.
        Vec::from_slice(&buf[..len]).map_err(|_| BusError::FrameTooLong(len))
    }

    /// Gives the bus back.
    pub fn release(self) -> I2cType {
        self.i2c
    }
}
