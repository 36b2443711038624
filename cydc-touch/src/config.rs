//! Protocol constants and bring-up configuration for the CST820.

/// Device address of the CST820 on the touch bus.
pub const TOUCH_ADDRESS: u8 = 0x15;

/// Bus clock the controller is validated at.
pub const BUS_FREQUENCY_HZ: u32 = 400_000;

/// First register of the touch report (finger count, then coordinates).
pub const REG_TOUCH_DATA: u8 = 0x02;

/// Vendor register that controls automatic entry into low-power mode.
///
/// Left at its power-on value the controller drops into a sleep state that
/// reports phantom touches.
pub const REG_DISABLE_AUTO_SLEEP: u8 = 0xFE;

/// Value written to [`REG_DISABLE_AUTO_SLEEP`] to keep the controller awake.
pub const DISABLE_AUTO_SLEEP: u8 = 0xFF;

// Validated minimums of the reset sequence, in milliseconds.
const MIN_INTERRUPT_PULSE_MS: u32 = 1;
const MIN_RESET_HOLD_MS: u32 = 10;
const MIN_BOOT_SETTLE_MS: u32 = 300;

/// Hold times of the reset sequence.
///
/// The defaults are the validated minimums. Longer values are accepted;
/// shorter ones are raised back to the minimum when the sequence runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTiming {
    /// Time the interrupt line is held high, then low.
    pub interrupt_pulse_ms: u32,
    /// Time the reset line is held low.
    pub reset_hold_ms: u32,
    /// Time given to the controller to boot after reset is released.
    pub boot_settle_ms: u32,
}

impl Default for ResetTiming {
    fn default() -> Self {
        Self {
            interrupt_pulse_ms: MIN_INTERRUPT_PULSE_MS,
            reset_hold_ms: MIN_RESET_HOLD_MS,
            boot_settle_ms: MIN_BOOT_SETTLE_MS,
        }
    }
}

impl ResetTiming {
    /// Returns the timing with every hold time raised to at least its minimum.
    pub fn clamped(self) -> Self {
        Self {
            interrupt_pulse_ms: at_least("interrupt pulse", self.interrupt_pulse_ms, MIN_INTERRUPT_PULSE_MS),
            reset_hold_ms: at_least("reset hold", self.reset_hold_ms, MIN_RESET_HOLD_MS),
            boot_settle_ms: at_least("boot settle", self.boot_settle_ms, MIN_BOOT_SETTLE_MS),
        }
    }
}

fn at_least(name: &str, value: u32, min: u32) -> u32 {
    if value < min {
        log::warn!("{name} time of {value} ms is below the {min} ms minimum, using {min} ms");
        min
    } else {
        value
    }
}

/// Configuration used by [`crate::initialize_touch_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchConfig {
    /// Device address of the controller.
    pub address: u8,
    /// Bus clock in Hz the caller has configured the bus for.
    pub bus_frequency: u32,
    /// Reset sequence hold times.
    pub reset_timing: ResetTiming,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            address: TOUCH_ADDRESS,
            bus_frequency: BUS_FREQUENCY_HZ,
            reset_timing: ResetTiming::default(),
        }
    }
}

impl TouchConfig {
    /// Overrides the device address.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Records the bus clock the caller configured.
    pub fn with_bus_frequency(mut self, hz: u32) -> Self {
        self.bus_frequency = hz;
        self
    }

    /// Overrides the reset sequence hold times.
    pub fn with_reset_timing(mut self, timing: ResetTiming) -> Self {
        self.reset_timing = timing;
        self
    }
}
