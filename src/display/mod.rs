//! Terminal display utilities: color theme and tables.

pub mod tables;
pub mod theme;

pub use tables::{TableBuilder, create_shape_table};
pub use theme::{THEME, Theme};
