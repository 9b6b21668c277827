use crate::types::GridPoint;
use serde::{Deserialize, Serialize};

/// Named list of integer points, the C-style sample's shape record.
///
/// The point count is the length of the list rather than a separate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    name: String,
    points: Vec<GridPoint>,
}

impl Outline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn with_points(name: impl Into<String>, points: Vec<GridPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn push(&mut self, point: GridPoint) {
        self.points.push(point);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }
}
