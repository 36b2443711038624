//! The board handle composing every peripheral.

use core::fmt::{self, Debug};

use cydc_touch::{PollError, TouchController, TouchReport};
use embedded_graphics::prelude::Point;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::backlight::Backlight;
use crate::button::BootButton;
use crate::config::BoardConfig;
use crate::geometry::DisplayGeometry;
use crate::led::{Rgb, RgbLed};
use crate::light::{AnalogInput, LightSensor};
use crate::sd::{SdCard, SdError, SdMount, SdState};
use crate::speaker::{AnalogOutput, Speaker};

/// Something that reports touches in raw controller coordinates.
pub trait TouchSurface {
    type Error: Debug;

    fn touches(&mut self, multitouch: bool) -> Result<TouchReport, Self::Error>;
}

impl<I2cType, INT, RST, ErrorType> TouchSurface for TouchController<I2cType, INT, RST>
where
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    ErrorType: embedded_hal::i2c::Error,
{
    type Error = PollError<ErrorType>;

    fn touches(&mut self, multitouch: bool) -> Result<TouchReport, Self::Error> {
        self.poll(multitouch)
    }
}

/// Peripherals handed to [`Cydc::new`].
///
/// `touch` should already be initialized, see [`cydc_touch::initialize_touch`].
pub struct Parts<DISPLAY, TOUCH, LED, ADC, BUTTON, BACKLIGHT, DAC, FS> {
    pub display: DISPLAY,
    pub touch: TOUCH,
    pub led: LED,
    pub light: ADC,
    pub button: BUTTON,
    pub backlight: BACKLIGHT,
    pub speaker: DAC,
    pub sd: FS,
}

/// Shutting the board down failed.
pub enum ShutdownError<TLEDERR, TMOUNTERR> {
    Led(TLEDERR),
    Sd(SdError<TMOUNTERR>),
}

impl<TLEDERR: Debug, TMOUNTERR: Debug> Debug for ShutdownError<TLEDERR, TMOUNTERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Led(err) => write!(f, "Led({err:?})"),
            Self::Sd(err) => write!(f, "Sd({err:?})"),
        }
    }
}

/// The ESP32-2432S024C board.
///
/// The display driver is not touched by this crate; it is carried along so
/// one handle owns the whole board.
pub struct Cydc<DISPLAY, TOUCH, LED, ADC, BUTTON, BACKLIGHT, DAC, FS> {
    pub display: DISPLAY,
    touch: TOUCH,
    led: LED,
    light: LightSensor<ADC>,
    button: BootButton<BUTTON>,
    backlight: Backlight<BACKLIGHT>,
    speaker: Speaker<DAC>,
    sd: SdCard<FS>,
    geometry: DisplayGeometry,
}

impl<DISPLAY, TOUCH, LED, ADC, BUTTON, BACKLIGHT, DAC, FS>
    Cydc<DISPLAY, TOUCH, LED, ADC, BUTTON, BACKLIGHT, DAC, FS>
where
    TOUCH: TouchSurface,
    LED: RgbLed,
    ADC: AnalogInput,
    BUTTON: InputPin,
    BACKLIGHT: OutputPin,
    DAC: AnalogOutput,
    FS: SdMount,
{
    /// Takes the peripherals and switches the backlight on.
    pub fn new(
        config: BoardConfig,
        parts: Parts<DISPLAY, TOUCH, LED, ADC, BUTTON, BACKLIGHT, DAC, FS>,
    ) -> Result<Self, BACKLIGHT::Error> {
        let mut backlight = Backlight::new(parts.backlight);
        backlight.on()?;

        let board = Self {
            display: parts.display,
            touch: parts.touch,
            led: parts.led,
            light: LightSensor::new(parts.light),
            button: BootButton::new(parts.button),
            backlight,
            speaker: Speaker::new(parts.speaker, config.speaker_gain),
            sd: SdCard::new(parts.sd, config.sd_enabled),
            geometry: DisplayGeometry::new(config.display_width, config.display_height),
        };
        log::info!("CYDc ready");
        Ok(board)
    }

    /// Polls the touch controller. Coordinates are raw.
    pub fn touches(&mut self, multitouch: bool) -> Result<TouchReport, TOUCH::Error> {
        self.touch.touches(multitouch)
    }

    /// Polls for a single touch and maps it onto the display.
    pub fn touch_position(&mut self) -> Result<Option<Point>, TOUCH::Error> {
        let report = self.touch.touches(false)?;
        Ok(report.primary().map(|p| self.geometry.map_touch(p)))
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn rgb(&mut self, color: Rgb) -> Result<(), LED::Error> {
        self.led.set_color(color)
    }

    /// Darkness from 0.0 to 1.0.
    pub fn light(&mut self) -> Result<f32, ADC::Error> {
        self.light.darkness()
    }

    /// Whether the BOOT button is held.
    pub fn button_boot(&mut self) -> Result<bool, BUTTON::Error> {
        self.button.is_pressed()
    }

    pub fn backlight(&mut self, on: bool) -> Result<(), BACKLIGHT::Error> {
        self.backlight.set(on)
    }

    pub fn play_sound(&mut self, level: i32) -> Result<(), DAC::Error> {
        self.speaker.play_sound(level)
    }

    pub fn play_tone<T: DelayNs>(
        &mut self,
        freq_hz: u32,
        duration_ms: u32,
        gain: Option<u16>,
        delay: &mut T,
    ) -> Result<(), DAC::Error> {
        self.speaker.play_tone(freq_hz, duration_ms, gain, delay)
    }

    pub fn speaker(&mut self) -> &mut Speaker<DAC> {
        &mut self.speaker
    }

    pub fn mount_sd(&mut self) -> Result<(), SdError<FS::Error>> {
        self.sd.mount()
    }

    pub fn unmount_sd(&mut self) -> Result<(), SdError<FS::Error>> {
        self.sd.unmount()
    }

    pub fn sd_state(&self) -> SdState {
        self.sd.state()
    }

    /// Unmounts the SD card and switches the LED off.
    ///
    /// Both steps are attempted; the first failure is returned.
    pub fn shutdown(&mut self) -> Result<(), ShutdownError<LED::Error, FS::Error>> {
        let sd = self.sd.unmount().map_err(ShutdownError::Sd);
        let led = self.led.off().map_err(ShutdownError::Led);
        sd.and(led)?;
        log::info!("Ready to be turned off");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::StaticRgbLed;
    use crate::mock::{Event, Log, MockAdc, MockDac, MockMount, MockPin, MockTouch};

    type TestBoard =
        Cydc<(), MockTouch, StaticRgbLed<MockPin, MockPin, MockPin>, MockAdc, MockPin, MockPin, MockDac, MockMount>;

    fn board(log: &Log, config: BoardConfig, frames: &[&[u8]]) -> TestBoard {
        let mut button = log.pin("boot");
        button.level = false;
        Cydc::new(
            config,
            Parts {
                display: (),
                touch: MockTouch {
                    frames: frames.iter().map(|f| f.to_vec()).collect(),
                },
                led: StaticRgbLed::new(log.pin("r"), log.pin("g"), log.pin("b")),
                light: MockAdc { value: 0xFFFF },
                button,
                backlight: log.pin("bl"),
                speaker: log.dac(),
                sd: log.mount(false),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_switches_the_backlight_on() {
        let log = Log::default();
        board(&log, BoardConfig::default(), &[]);
        assert_eq!(log.events(), vec![Event::Pin("bl", true)]);
    }

    #[test]
    fn touches_are_raw_and_positions_are_mapped() {
        let log = Log::default();
        let mut cyd = board(
            &log,
            BoardConfig::default(),
            &[&[0x01, 0x00, 0x64, 0x00, 0xC8], &[0x01, 0x00, 0x64, 0x00, 0xC8], &[0, 0, 0, 0, 0]],
        );

        let report = cyd.touches(false).unwrap();
        assert_eq!(report.finger_count(), 1);
        assert_eq!(cyd.touch_position().unwrap(), Some(Point::new(139, 119)));
        assert_eq!(cyd.touch_position().unwrap(), None);
    }

    #[test]
    fn simple_peripherals_delegate() {
        let log = Log::default();
        let mut cyd = board(&log, BoardConfig::default().with_speaker_gain(100), &[]);
        log.clear();

        cyd.rgb(Rgb::RED).unwrap();
        cyd.play_sound(300).unwrap();
        cyd.backlight(false).unwrap();

        assert_eq!(cyd.light(), Ok(1.0));
        assert_eq!(cyd.button_boot(), Ok(true));
        assert_eq!(cyd.speaker().gain(), 100);
        assert_eq!(
            log.events(),
            vec![
                Event::Pin("r", false),
                Event::Pin("g", true),
                Event::Pin("b", true),
                Event::Dac(255),
                Event::Pin("bl", false),
            ]
        );
    }

    #[test]
    fn sd_follows_the_config() {
        let log = Log::default();
        let mut disabled = board(&log, BoardConfig::default(), &[]);
        assert_eq!(disabled.sd_state(), SdState::Unavailable);
        assert!(matches!(disabled.mount_sd(), Err(SdError::NotReady)));

        let mut enabled = board(&log, BoardConfig::default().with_sd_enabled(true), &[]);
        enabled.mount_sd().unwrap();
        assert_eq!(enabled.sd_state(), SdState::Mounted);
        enabled.unmount_sd().unwrap();
        assert_eq!(enabled.sd_state(), SdState::Ready);
    }

    #[test]
    fn shutdown_unmounts_and_darkens_the_led() {
        let log = Log::default();
        let mut cyd = board(&log, BoardConfig::default().with_sd_enabled(true), &[]);
        cyd.mount_sd().unwrap();
        log.clear();

        cyd.shutdown().unwrap();

        assert_eq!(cyd.sd_state(), SdState::Ready);
        assert_eq!(
            log.events(),
            vec![
                Event::Unmount("/sd".into()),
                Event::Pin("r", true),
                Event::Pin("g", true),
                Event::Pin("b", true),
            ]
        );
    }
}
