//! Human-readable lines printed by the samples.
//!
//! Every line has a small value type that implements both `Display` (text
//! output) and `Serialize` (JSON output), so the CLI can route the same
//! result through either format.

use crate::shape::Shape;
use crate::types::GridPoint;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Format a float the way a default-configured C++ stream does: at most six
/// significant digits, no trailing zeros, scientific notation outside
/// `1e-4 ..= 1e6`.
pub fn format_number(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round to the target precision first; rounding may bump the exponent.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}"))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// `Point: (x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointLine {
    pub x: i32,
    pub y: i32,
}

impl From<&GridPoint> for PointLine {
    fn from(p: &GridPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl fmt::Display for PointLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point: ({}, {})", self.x, self.y)
    }
}

/// Summary of one shape: name, point count, area and perimeter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeInfo {
    pub name: String,
    pub points: usize,
    pub area: f64,
    pub perimeter: f64,
}

impl ShapeInfo {
    pub fn from_shape(shape: &dyn Shape) -> Self {
        Self {
            name: shape.name().to_string(),
            points: shape.point_count(),
            area: shape.area(),
            perimeter: shape.perimeter(),
        }
    }
}

impl fmt::Display for ShapeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape: {}, Points: {}, Area: {}, Perimeter: {}",
            self.name,
            self.points,
            format_number(self.area),
            format_number(self.perimeter)
        )
    }
}

/// `Total area: n`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalArea {
    pub total_area: f64,
}

impl fmt::Display for TotalArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total area: {}", format_number(self.total_area))
    }
}

/// Full listing: one line per shape followed by the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub shapes: Vec<ShapeInfo>,
    pub total_area: f64,
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape Information:")?;
        for info in &self.shapes {
            writeln!(f, "{info}")?;
        }
        write!(
            f,
            "{}",
            TotalArea {
                total_area: self.total_area
            }
        )
    }
}

/// Integer or floating-point result of a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i32),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{}", format_number(*x)),
        }
    }
}

/// Named scalar result (`add`, `area`, `distance`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation {
    pub operation: &'static str,
    pub result: Scalar,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

pub fn print_point(out: &mut impl Write, point: &GridPoint) -> io::Result<()> {
    writeln!(out, "{}", PointLine::from(point))
}

pub fn print_shape_info(out: &mut impl Write, shape: &dyn Shape) -> io::Result<()> {
    writeln!(out, "{}", ShapeInfo::from_shape(shape))
}
