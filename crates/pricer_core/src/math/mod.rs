//! Numeric utilities shared by the pricing layers.
//!
//! - [`grid`]: `linspace`, `meshgrid` and the dense [`grid::Matrix`]
//! - [`series`]: cumulative sums and summary statistics
//!
//! All functions are generic over `T: num_traits::Float`.

pub mod grid;
pub mod series;

pub use grid::{linspace, meshgrid, Matrix};
pub use series::{cumulative_sum, mean, sample_std_dev};
