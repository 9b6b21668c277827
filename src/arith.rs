//! Scalar helpers from the C-style sample.

/// Sum of two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Area of a `width` by `height` rectangle.
pub fn calculate_area(width: f64, height: f64) -> f64 {
    width * height
}
