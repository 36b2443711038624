//! Mapping raw touch coordinates onto the display.

use cydc_touch::TouchPoint;
use embedded_graphics::prelude::Point;

/// Size of the display touches are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl DisplayGeometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Converts a raw controller point into display pixels.
    ///
    /// The CST820 on this board reports both axes mirrored relative to the
    /// panel. Raw values beyond the panel map to negative coordinates.
    pub fn map_touch(&self, point: TouchPoint) -> Point {
        Point::new(
            i32::from(self.width) - 1 - i32::from(point.x),
            i32::from(self.height) - 1 - i32::from(point.y),
        )
    }

    /// Pulls `point` inwards so a shape of radius `margin` around it stays on screen.
    pub fn clamp(&self, point: Point, margin: u16) -> Point {
        let inset = i32::from(margin) + 1;
        let keep = |v: i32, size: u16| v.max(inset).min(i32::from(size) - inset);
        Point::new(keep(point.x, self.width), keep(point.y, self.height))
    }

    /// Whether `point` lies on the panel.
    pub fn contains(&self, point: Point) -> bool {
        (0..i32::from(self.width)).contains(&point.x) && (0..i32::from(self.height)).contains(&point.y)
    }
}
