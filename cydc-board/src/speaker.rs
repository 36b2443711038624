//! Speaker amplifier fed by the DAC on GPIO26.

use embedded_hal::delay::DelayNs;

use crate::config::MAX_SPEAKER_GAIN;

/// An 8-bit analog output.
pub trait AnalogOutput {
    type Error: core::fmt::Debug;

    fn write(&mut self, value: u8) -> Result<(), Self::Error>;
}

pub struct Speaker<D> {
    dac: D,
    gain: u16,
}

impl<D: AnalogOutput> Speaker<D> {
    pub fn new(dac: D, gain: u16) -> Self {
        Self {
            dac,
            gain: gain.min(MAX_SPEAKER_GAIN),
        }
    }

    /// Default gain used by [`Speaker::play_tone`].
    pub fn gain(&self) -> u16 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: u16) {
        self.gain = gain.min(MAX_SPEAKER_GAIN);
    }

    /// Sets the DAC level directly, clamped to 0..=255.
    pub fn play_sound(&mut self, level: i32) -> Result<(), D::Error> {
        self.dac.write(level.clamp(0, 255) as u8)
    }

    pub fn silence(&mut self) -> Result<(), D::Error> {
        self.dac.write(0)
    }

    /// Plays a square wave, blocking for `duration_ms`.
    ///
    /// `gain` of `None` uses the configured gain. A frequency of zero is a rest.
    pub fn play_tone<T: DelayNs>(
        &mut self,
        freq_hz: u32,
        duration_ms: u32,
        gain: Option<u16>,
        delay: &mut T,
    ) -> Result<(), D::Error> {
        let gain = gain.map_or(self.gain, |g| g.min(MAX_SPEAKER_GAIN));
        let amplitude = (u32::from(gain) * 255 / u32::from(MAX_SPEAKER_GAIN)) as u8;

        if freq_hz == 0 || amplitude == 0 {
            self.silence()?;
            delay.delay_ms(duration_ms);
            return Ok(());
        }

        let half_period_us = (500_000 / freq_hz).max(1);
        let half_periods = duration_ms.saturating_mul(1_000) / half_period_us;
        for i in 0..half_periods {
            self.dac.write(if i % 2 == 0 { amplitude } else { 0 })?;
            delay.delay_us(half_period_us);
        }
        self.silence()
    }
}
