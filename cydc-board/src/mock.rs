//! Peripheral stand-ins sharing one log of everything written to them.

use core::cell::RefCell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;

use cydc_touch::{decode, DecodeError, TouchReport};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::light::AnalogInput;
use crate::sd::SdMount;
use crate::speaker::AnalogOutput;
use crate::TouchSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Pin(&'static str, bool),
    Duty(&'static str, u16),
    Dac(u8),
    Mount(String),
    Unmount(String),
    Delay(u32),
}

#[derive(Clone, Default)]
pub struct Log {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Log {
    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn pin(&self, name: &'static str) -> MockPin {
        MockPin {
            name,
            log: self.clone(),
            level: true,
        }
    }

    pub fn pwm(&self, name: &'static str) -> MockPwm {
        MockPwm {
            name,
            log: self.clone(),
        }
    }

    pub fn dac(&self) -> MockDac {
        MockDac { log: self.clone() }
    }

    pub fn mount(&self, fails: bool) -> MockMount {
        MockMount {
            log: self.clone(),
            fails,
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { log: self.clone() }
    }
}

/// Output pin that logs levels, and input pin reading back its last level.
pub struct MockPin {
    name: &'static str,
    log: Log,
    pub level: bool,
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level = false;
        self.log.push(Event::Pin(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level = true;
        self.log.push(Event::Pin(self.name, true));
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

/// PWM channel with a 1023 duty range.
pub struct MockPwm {
    name: &'static str,
    log: Log,
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        1023
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.log.push(Event::Duty(self.name, duty));
        Ok(())
    }
}

pub struct MockDac {
    log: Log,
}

impl AnalogOutput for MockDac {
    type Error = Infallible;

    fn write(&mut self, value: u8) -> Result<(), Self::Error> {
        self.log.push(Event::Dac(value));
        Ok(())
    }
}

pub struct MockAdc {
    pub value: u16,
}

impl AnalogInput for MockAdc {
    type Error = Infallible;

    fn read_u16(&mut self) -> Result<u16, Self::Error> {
        Ok(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountFailed;

pub struct MockMount {
    log: Log,
    fails: bool,
}

impl SdMount for MockMount {
    type Error = MountFailed;

    fn mount(&mut self, path: &str) -> Result<(), Self::Error> {
        if self.fails {
            return Err(MountFailed);
        }
        self.log.push(Event::Mount(path.into()));
        Ok(())
    }

    fn unmount(&mut self, path: &str) -> Result<(), Self::Error> {
        if self.fails {
            return Err(MountFailed);
        }
        self.log.push(Event::Unmount(path.into()));
        Ok(())
    }
}

/// Delay logging each requested wait in microseconds.
pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Delay(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::Delay(us));
    }
}

/// Touch surface replaying raw frames.
#[derive(Default)]
pub struct MockTouch {
    pub frames: VecDeque<Vec<u8>>,
}

impl TouchSurface for MockTouch {
    type Error = DecodeError;

    fn touches(&mut self, multitouch: bool) -> Result<TouchReport, Self::Error> {
        let frame = self.frames.pop_front().unwrap_or_else(|| vec![0; 5]);
        decode(&frame, multitouch)
    }
}
