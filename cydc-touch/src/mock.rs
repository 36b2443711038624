//! Hardware stand-ins recording everything the driver does against a simulated clock.

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation, SevenBitAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    High(&'static str, u64),
    Low(&'static str, u64),
    Write { address: u8, bytes: Vec<u8> },
    Read { address: u8, register: u8, len: usize },
}

#[derive(Default)]
struct TraceInner {
    now_ns: u64,
    events: Vec<Event>,
}

/// Shared recorder. Line events carry the time in milliseconds.
#[derive(Clone, Default)]
pub struct Trace {
    inner: Rc<RefCell<TraceInner>>,
}

impl Trace {
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ns / 1_000_000
    }

    pub fn push(&self, event: Event) {
        self.inner.borrow_mut().events.push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.inner.borrow().events.clone()
    }

    pub fn line(&self, name: &'static str) -> MockLine {
        MockLine {
            name,
            trace: self.clone(),
            broken: false,
        }
    }

    pub fn broken_line(&self, name: &'static str) -> MockLine {
        MockLine {
            name,
            trace: self.clone(),
            broken: true,
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            trace: self.clone(),
        }
    }

    pub fn bus(&self) -> MockBus {
        MockBus {
            trace: self.clone(),
            responses: VecDeque::new(),
            fail_writes: false,
        }
    }
}

pub struct MockLine {
    name: &'static str,
    trace: Trace,
    broken: bool,
}

impl digital::ErrorType for MockLine {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(digital::ErrorKind::Other);
        }
        self.trace.push(Event::Low(self.name, self.trace.now_ms()));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(digital::ErrorKind::Other);
        }
        self.trace.push(Event::High(self.name, self.trace.now_ms()));
        Ok(())
    }
}

pub struct MockDelay {
    trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.inner.borrow_mut().now_ns += u64::from(ns);
    }
}

/// I2C bus answering reads from a queue of scripted responses.
///
/// A response shorter or longer than the requested read is copied as far as
/// it goes, which is how a desynchronised bus looks to the driver.
pub struct MockBus {
    trace: Trace,
    responses: VecDeque<Result<Vec<u8>, i2c::ErrorKind>>,
    fail_writes: bool,
}

impl MockBus {
    pub fn respond(mut self, bytes: &[u8]) -> Self {
        self.responses.push_back(Ok(bytes.to_vec()));
        self
    }

    pub fn respond_err(mut self, err: i2c::ErrorKind) -> Self {
        self.responses.push_back(Err(err));
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl i2c::ErrorType for MockBus {
    type Error = i2c::ErrorKind;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        match operations {
            [Operation::Write(bytes)] => {
                if self.fail_writes {
                    return Err(i2c::ErrorKind::NoAcknowledge(
                        i2c::NoAcknowledgeSource::Data,
                    ));
                }
                self.trace.push(Event::Write {
                    address,
                    bytes: bytes.to_vec(),
                });
                Ok(())
            }
            [Operation::Write(register), Operation::Read(buf)] => {
                self.trace.push(Event::Read {
                    address,
                    register: register[0],
                    len: buf.len(),
                });
                let response = self
                    .responses
                    .pop_front()
                    .unwrap_or_else(|| Ok(Vec::new()))?;
                let n = response.len().min(buf.len());
                buf[..n].copy_from_slice(&response[..n]);
                Ok(())
            }
            _ => panic!("unexpected transaction shape"),
        }
    }
}
