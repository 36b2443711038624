//! A shared I2C bus implementation using a blocking `Mutex` for exclusive access.
//!
//! Several drivers on one physical bus each get their own [`MutexI2cDevice`].
//! A transaction holds the lock from its first operation to its last, so
//! transactions issued through different handles never interleave on the wire.

use alloc::rc::Rc;
use core::cell::RefCell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embedded_hal::i2c::{self, I2c, Operation, SevenBitAddress};

/// A bus shared between [`MutexI2cDevice`] handles.
pub type SharedI2cBus<I2cType> = Rc<Mutex<CriticalSectionRawMutex, RefCell<I2cType>>>;

/// Wraps a bus so it can be handed out to several [`MutexI2cDevice`]s.
pub fn share<I2cType>(bus: I2cType) -> SharedI2cBus<I2cType> {
    Rc::new(Mutex::new(RefCell::new(bus)))
}

/// `Mutex`-based shared bus [`I2c`] implementation.
///
/// This allows for sharing an I2C bus, obtaining multiple [`MutexI2cDevice`] instances,
/// each used by a driver addressing its own device.
pub struct MutexI2cDevice<I2cType> {
    bus: SharedI2cBus<I2cType>,
}

impl<I2cType> MutexI2cDevice<I2cType> {
    /// Create a new [`MutexI2cDevice`].
    pub fn new(bus: SharedI2cBus<I2cType>) -> Self {
        Self { bus }
    }
}

impl<I2cType> Clone for MutexI2cDevice<I2cType> {
    fn clone(&self) -> Self {
        Self {
            bus: self.bus.clone(),
        }
    }
}

impl<I2cType> i2c::ErrorType for MutexI2cDevice<I2cType>
where
    I2cType: I2c<SevenBitAddress>,
{
    type Error = I2cType::Error;
}

impl<I2cType> I2c for MutexI2cDevice<I2cType>
where
    I2cType: I2c<SevenBitAddress>,
{
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let result = self
            .bus
            .lock(|bus| bus.borrow_mut().transaction(address, operations));

        if let Err(err) = &result {
            log::warn!("Error communicating with I2C device 0x{address:02X}: {err:?}");
        }

        result
    }
}
