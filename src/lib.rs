#![doc = include_str!("../README.md")]

pub mod cubify;
pub mod error;
pub mod grid;
pub mod prelude;
mod traits;

pub use traits::Coordinate;

pub use cubify::{block_count, cubify, uncubify};
pub use grid::{axis_samples, generate, generate_array, grid_coordinates};
pub use grid::{Extent3D, GridShape};

pub use error::{InvalidShape, ShapeMismatch};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Block shape does not tile the array: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
    #[error("Invalid grid description: {0}")]
    InvalidShape(#[from] InvalidShape),
}
