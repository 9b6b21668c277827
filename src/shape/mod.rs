//! Shapes from both samples.
//!
//! [`Outline`] is the C-style aggregate: a name and a list of integer points.
//! [`Shape`] is the C++-style capability with [`Rectangle`] as its only
//! variant. [`calculate_total_area`] folds over any collection of shared or
//! boxed shapes.

mod outline;
mod rectangle;

pub use outline::Outline;
pub use rectangle::Rectangle;

use crate::types::Point;
use std::ops::Deref;
use tracing::debug;

/// A closed figure that knows its own area and perimeter.
pub trait Shape {
    fn name(&self) -> &str;

    /// Points recorded for display purposes.
    fn points(&self) -> &[Point];

    fn point_count(&self) -> usize {
        self.points().len()
    }

    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;
}

/// State shared by every [`Shape`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    name: String,
    points: Vec<Point>,
}

impl ShapeBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Sum of `area()` over `shapes`.
///
/// Accepts `Arc<dyn Shape>`, `Box<dyn Shape>` or any other pointer that
/// derefs to a shape. An empty slice yields `0.0`.
pub fn calculate_total_area<S>(shapes: &[S]) -> f64
where
    S: Deref<Target = dyn Shape>,
{
    let total: f64 = shapes.iter().map(|shape| shape.area()).sum();
    debug!(shapes = shapes.len(), total, "calculated total area");
    total
}
