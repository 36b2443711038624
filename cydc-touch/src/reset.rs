//! Timed reset sequence bringing the CST820 into an addressable state.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::ResetTiming;
use crate::error::ResetError;

/// Resets the controller with the validated hold times.
///
/// See [`reset_controller_with`].
pub fn reset_controller<INT, RST, D, E>(
    interrupt_line: &mut INT,
    reset_line: &mut RST,
    delay: &mut D,
) -> Result<(), ResetError<E>>
where
    INT: OutputPin<Error = E>,
    RST: OutputPin<Error = E>,
    D: DelayNs,
{
    reset_controller_with(ResetTiming::default(), interrupt_line, reset_line, delay)
}

/// Drives the interrupt and reset lines through the boot sequence.
///
/// 1. Interrupt line high, then low, each held for `interrupt_pulse_ms`.
/// 2. Reset line low for `reset_hold_ms`.
/// 3. Reset line high, then `boot_settle_ms` for the controller to boot.
///
/// Blocks the calling thread for the whole sequence. A line that cannot be
/// driven aborts the sequence immediately.
pub fn reset_controller_with<INT, RST, D, E>(
    timing: ResetTiming,
    interrupt_line: &mut INT,
    reset_line: &mut RST,
    delay: &mut D,
) -> Result<(), ResetError<E>>
where
    INT: OutputPin<Error = E>,
    RST: OutputPin<Error = E>,
    D: DelayNs,
{
    let timing = timing.clamped();

    log::debug!("Pulsing touch interrupt line");
    interrupt_line.set_high().map_err(ResetError::Interrupt)?;
    delay.delay_ms(timing.interrupt_pulse_ms);
    interrupt_line.set_low().map_err(ResetError::Interrupt)?;
    delay.delay_ms(timing.interrupt_pulse_ms);

    log::debug!("Asserting touch reset");
    reset_line.set_low().map_err(ResetError::Reset)?;
    delay.delay_ms(timing.reset_hold_ms);

    reset_line.set_high().map_err(ResetError::Reset)?;
    delay.delay_ms(timing.boot_settle_ms);
    log::debug!("Touch controller released from reset");

    Ok(())
}
