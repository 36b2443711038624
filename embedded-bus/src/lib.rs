#![cfg_attr(not(test), no_std)]
#![doc = "Blocking shared bus implementations for embedded-hal."]

// For the official Embassy implementation, see:
// - https://github.com/embassy-rs/embassy/tree/main/embassy-embedded-hal/src/shared_bus

extern crate alloc;

pub mod i2c;
