//! Error types for the touch subsystem.

use core::fmt::{self, Debug};

/// A digital line failed to change level during the reset sequence.
pub enum ResetError<TPINERR> {
    /// The interrupt line could not be driven.
    Interrupt(TPINERR),
    /// The reset line could not be driven.
    Reset(TPINERR),
}

impl<TPINERR: Debug> Debug for ResetError<TPINERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt(err) => write!(f, "Interrupt({err:?})"),
            Self::Reset(err) => write!(f, "Reset({err:?})"),
        }
    }
}

/// A register transaction on the two-wire bus failed.
pub enum BusError<TBUSERR> {
    /// The bus reported a failure (NACK, timeout, arbitration loss).
    Transaction(TBUSERR),
    /// The payload or read length does not fit in one register frame.
    FrameTooLong(usize),
}

impl<TBUSERR: Debug> Debug for BusError<TBUSERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction(err) => write!(f, "Transaction({err:?})"),
            Self::FrameTooLong(len) => write!(f, "FrameTooLong({len})"),
        }
    }
}

/// A touch report could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame length does not match the requested touch mode.
    LengthMismatch {
        /// Length the mode requires.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// The finger count byte is outside 0..=2.
    InvalidFingerCount(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "touch frame is {actual} bytes, expected {expected}")
            }
            Self::InvalidFingerCount(count) => write!(f, "invalid finger count {count}"),
        }
    }
}

/// Bringing the controller online failed. Device bring-up must abort.
pub enum InitError<TBUSERR, TPINERR> {
    /// The reset sequence could not drive one of its lines.
    HardwareFault(ResetError<TPINERR>),
    /// The controller did not accept the sleep-disable write.
    Bus(BusError<TBUSERR>),
}

impl<TBUSERR: Debug, TPINERR: Debug> Debug for InitError<TBUSERR, TPINERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareFault(err) => write!(f, "HardwareFault({err:?})"),
            Self::Bus(err) => write!(f, "Bus({err:?})"),
        }
    }
}

impl<TBUSERR, TPINERR> From<ResetError<TPINERR>> for InitError<TBUSERR, TPINERR> {
    fn from(err: ResetError<TPINERR>) -> Self {
        InitError::HardwareFault(err)
    }
}

impl<TBUSERR, TPINERR> From<BusError<TBUSERR>> for InitError<TBUSERR, TPINERR> {
    fn from(err: BusError<TBUSERR>) -> Self {
        InitError::Bus(err)
    }
}

/// A single poll failed. The next poll may succeed.
pub enum PollError<TBUSERR> {
    /// Reading the touch registers failed.
    Bus(BusError<TBUSERR>),
    /// The bytes read were not a valid touch report.
    Decode(DecodeError),
}

impl<TBUSERR: Debug> Debug for PollError<TBUSERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus({err:?})"),
            Self::Decode(err) => write!(f, "Decode({err:?})"),
        }
    }
}

impl<TBUSERR> From<BusError<TBUSERR>> for PollError<TBUSERR> {
    fn from(err: BusError<TBUSERR>) -> Self {
        PollError::Bus(err)
    }
}

impl<TBUSERR> From<DecodeError> for PollError<TBUSERR> {
    fn from(err: DecodeError) -> Self {
        PollError::Decode(err)
    }
}
