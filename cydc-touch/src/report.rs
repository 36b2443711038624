//! Decoding of CST820 touch reports.
//!
//! The report starts at register `0x02`. All fields are big-endian:
//!
//! | Mode   | Length | Layout                                     |
//! |--------|--------|--------------------------------------------|
//! | single | 5      | `count:u8 x1:u16 y1:u16`                   |
//! | multi  | 9      | `count:u8 x1:u16 y1:u16 x2:u16 y2:u16`     |
//!
//! The single-touch frame is not a prefix-padded multi-touch frame; the two
//! lengths are read as separate requests.

use crate::error::DecodeError;

/// Highest number of simultaneous touches the controller reports.
pub const MAX_TOUCH_POINTS: usize = 2;

/// A touch position in raw controller coordinates.
///
/// Not rotated or flipped into display space and not range checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TouchPoint {
    /// Raw x coordinate.
    pub x: u16,
    /// Raw y coordinate.
    pub y: u16,
}

/// How many touch points to read in one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchMode {
    /// Finger count and the first point.
    Single,
    /// Finger count and both points.
    Multi,
}

impl TouchMode {
    /// Picks the mode for a `multitouch` flag.
    pub fn from_multitouch(multitouch: bool) -> Self {
        if multitouch {
            TouchMode::Multi
        } else {
            TouchMode::Single
        }
    }

    /// Number of bytes the report occupies in this mode.
    pub fn frame_len(self) -> usize {
        1 + 4 * self.points()
    }

    /// Number of points carried by the report in this mode.
    pub fn points(self) -> usize {
        match self {
            TouchMode::Single => 1,
            TouchMode::Multi => MAX_TOUCH_POINTS,
        }
    }
}

/// One decoded poll of the controller.
///
/// Built fresh on every poll. Points carry no tracking identity across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchReport {
    finger_count: u8,
    points: [TouchPoint; MAX_TOUCH_POINTS],
    latched: u8,
}

impl TouchReport {
    /// Number of fingers the controller reports, 0 to 2.
    pub fn finger_count(&self) -> u8 {
        self.finger_count
    }

    /// Whether at least one finger is down.
    pub fn is_touched(&self) -> bool {
        self.finger_count > 0
    }

    /// Points backed by a reported finger.
    ///
    /// A single-touch read carries one point even when two fingers are down.
    pub fn points(&self) -> &[TouchPoint] {
        let meaningful = self.finger_count.min(self.latched);
        &self.points[..usize::from(meaningful)]
    }

    /// First touch point, if any finger is down.
    pub fn primary(&self) -> Option<TouchPoint> {
        self.points().first().copied()
    }

    /// Every point decoded from the frame, whether or not a finger backs it.
    pub fn latched(&self) -> &[TouchPoint] {
        &self.points[..usize::from(self.latched)]
    }
}

/// Decodes a raw touch frame.
///
/// `raw` must be exactly 5 bytes when `multitouch` is false and 9 bytes when
/// it is true.
pub fn decode(raw: &[u8], multitouch: bool) -> Result<TouchReport, DecodeError> {
    let mode = TouchMode::from_multitouch(multitouch);
    if raw.len() != mode.frame_len() {
        return Err(DecodeError::LengthMismatch {
            expected: mode.frame_len(),
            actual: raw.len(),
        });
    }

    let finger_count = raw[0];
    if usize::from(finger_count) > MAX_TOUCH_POINTS {
        return Err(DecodeError::InvalidFingerCount(finger_count));
    }

    let mut points = [TouchPoint::default(); MAX_TOUCH_POINTS];
    for (point, chunk) in points.iter_mut().zip(raw[1..].chunks_exact(4)) {
        *point = TouchPoint {
            x: u16::from_be_bytes([chunk[0], chunk[1]]),
            y: u16::from_be_bytes([chunk[2], chunk[3]]),
        };
    }

    Ok(TouchReport {
        finger_count,
        points,
        latched: mode.points() as u8,
    })
}
