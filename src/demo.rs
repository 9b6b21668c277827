//! The two sample programs as library functions.
//!
//! Both write to any `Write` so the binary can point them at stdout and
//! tests can capture the exact bytes.

use crate::arith::{add, calculate_area};
use crate::report::{PointLine, ShapeInfo, ShapeReport, TotalArea, print_point, print_shape_info};
use crate::shape::{Rectangle, Shape, calculate_total_area};
use crate::types::{GridPoint, create_point};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// Rectangles used by the C++-style sample when nothing else is configured.
pub const DEFAULT_RECTANGLES: [[f64; 2]; 2] = [[10.0, 5.0], [3.0, 4.0]];

/// Values computed by [`run_c_sample`].
///
/// Only the point is printed; the sum and area are computed and kept
/// here so callers can inspect them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CSampleSummary {
    pub point: GridPoint,
    pub sum: i32,
    pub area: f64,
}

impl fmt::Display for CSampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PointLine::from(&self.point))
    }
}

/// Integer-point sample: prints `Point: (10, 20)`.
pub fn run_c_sample(out: &mut impl Write) -> io::Result<CSampleSummary> {
    let point = create_point(10, 20);
    print_point(out, &point)?;

    let sum = add(5, 3);
    let area = calculate_area(10.5, 20.0);
    debug!(sum, area, "c sample computed values");

    Ok(CSampleSummary { point, sum, area })
}

/// Build the shared shape list for the C++-style sample.
pub fn build_shapes(rectangles: &[[f64; 2]]) -> Vec<Arc<dyn Shape>> {
    rectangles
        .iter()
        .map(|&dims| Arc::new(Rectangle::from(dims)) as Arc<dyn Shape>)
        .collect()
}

/// Collect per-shape summaries and the total area.
pub fn summarize<S>(shapes: &[S]) -> ShapeReport
where
    S: Deref<Target = dyn Shape>,
{
    ShapeReport {
        shapes: shapes
            .iter()
            .map(|shape| ShapeInfo::from_shape(&**shape))
            .collect(),
        total_area: calculate_total_area(shapes),
    }
}

/// Floating-point sample: prints a header, one line per rectangle and the
/// total area. Returns the total.
pub fn run_cpp_sample(out: &mut impl Write, rectangles: &[[f64; 2]]) -> io::Result<f64> {
    let shapes = build_shapes(rectangles);

    writeln!(out, "Shape Information:")?;
    for shape in &shapes {
        print_shape_info(out, &**shape)?;
    }

    let total_area = calculate_total_area(&shapes);
    writeln!(out, "{}", TotalArea { total_area })?;

    Ok(total_area)
}
