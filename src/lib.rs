//! Geometry fixtures: an integer-point sample and a floating-point shape
//! sample, plus the configuration, output and logging plumbing the `shapes`
//! binary uses to run them.

pub mod arith;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod shape;
pub mod types;

// Explicit exports for better API clarity
pub use arith::{add, calculate_area};
pub use config::Settings;
pub use error::{ShapeError, ShapeResult};
pub use report::{ShapeInfo, ShapeReport, format_number, print_point, print_shape_info};
pub use shape::{Outline, Rectangle, Shape, ShapeBase, calculate_total_area};
pub use types::{GridPoint, Point, create_point};
