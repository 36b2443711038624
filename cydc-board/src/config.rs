//! Board-level options.

/// Highest speaker gain.
pub const MAX_SPEAKER_GAIN: u16 = 1023;

/// Options for [`crate::Cydc::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Display width in pixels, in the orientation touches are mapped to.
    pub display_width: u16,
    /// Display height in pixels.
    pub display_height: u16,
    /// Default speaker gain, 0 to [`MAX_SPEAKER_GAIN`].
    pub speaker_gain: u16,
    /// Whether an SD card is fitted and may be mounted.
    pub sd_enabled: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display_width: 240,
            display_height: 320,
            speaker_gain: 512,
            sd_enabled: false,
        }
    }
}

impl BoardConfig {
    /// Sets the display size.
    pub fn with_display_size(mut self, width: u16, height: u16) -> Self {
        self.display_width = width;
        self.display_height = height;
        self
    }

    /// Sets the default speaker gain, clamped to [`MAX_SPEAKER_GAIN`].
    pub fn with_speaker_gain(mut self, gain: u16) -> Self {
        self.speaker_gain = gain.min(MAX_SPEAKER_GAIN);
        self
    }

    /// Marks the SD card slot as usable.
    pub fn with_sd_enabled(mut self, enabled: bool) -> Self {
        self.sd_enabled = enabled;
        self
    }
}
