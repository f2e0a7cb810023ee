//! Common traits and types that are useful for working with `toolbox`
#![allow(unused_imports)]

pub use crate::cubify::{block_count, cubify, uncubify};
pub use crate::grid::{axis_samples, generate, generate_array, grid_coordinates};
pub use crate::grid::{Extent3D, GridShape};
pub use crate::traits::Coordinate;
pub use crate::Error;

pub(crate) use crate::error::{InvalidShape, ShapeMismatch};

pub(crate) use derive_more::{Constructor, Display, From};

pub(crate) use ndarray::{Array1, Array2, ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn};
