use super::{Shape, ShapeBase};
use crate::error::ShapeError;
use crate::types::Point;
use std::str::FromStr;

/// Axis-aligned rectangle anchored at the origin.
///
/// Construction records the four corners counter-clockwise starting at
/// `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: ShapeBase,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        let mut base = ShapeBase::new("Rectangle");
        base.add_point(Point::new(0.0, 0.0));
        base.add_point(Point::new(width, 0.0));
        base.add_point(Point::new(width, height));
        base.add_point(Point::new(0.0, height));
        Self {
            base,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn points(&self) -> &[Point] {
        self.base.points()
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `10x5` or `2.5X4`.
impl FromStr for Rectangle {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ShapeError::InvalidDimensions {
            input: s.to_string(),
            reason,
        };

        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("missing 'x' separator".to_string()))?;

        let width: f64 = w
            .trim()
            .parse()
            .map_err(|e| invalid(format!("width '{}': {e}", w.trim())))?;
        let height: f64 = h
            .trim()
            .parse()
            .map_err(|e| invalid(format!("height '{}': {e}", h.trim())))?;

        Ok(Rectangle::new(width, height))
    }
}

impl From<[f64; 2]> for Rectangle {
    fn from([width, height]: [f64; 2]) -> Self {
        Rectangle::new(width, height)
    }
}
