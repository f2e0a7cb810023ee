//! # Regular 3D grids
//!
//! A grid is described by an [`Extent3D`] (the bounding box) and a [`GridShape`] (the number of
//! samples along each axis). Each axis is sampled independently with [`axis_samples`], and the
//! points of the grid are enumerated with x varying slowest and z varying fastest. The point with
//! per-axis indices `(ix, iy, iz)` therefore sits at [`GridShape::flat_index`] in the output of
//! [`generate`].
//!
//! ```
//! let extent = toolbox::Extent3D::new(0., 1., 0., 1., 0., 1.);
//! let shape = toolbox::GridShape::new(2, 2, 2).unwrap();
//!
//! let points = toolbox::generate(&extent, shape);
//!
//! assert_eq!(points.len(), 8);
//! assert_eq!(points[1], [0., 0., 1.]);
//! assert_eq!(points[shape.flat_index(1, 0, 1)], [1., 0., 1.]);
//! ```

use crate::error::{NonFinite, Unparsable, ValueCount, ZeroSamples};
use crate::prelude::*;
use std::str::FromStr;

/// Bounding box of a 3D grid. Both bounds of every axis are included in the grid.
///
/// `min > max` is allowed and produces samples in descending order along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Extent3D<F> {
    pub x_min: F,
    pub x_max: F,
    pub y_min: F,
    pub y_max: F,
    pub z_min: F,
    pub z_max: F,
}

impl<F> Extent3D<F>
where
    F: Coordinate,
{
    /// Build an extent from `[x_min, x_max, y_min, y_max, z_min, z_max]`.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidShape`] if there are not exactly six values or one of them is NaN or
    /// infinite.
    pub fn from_slice(values: &[F]) -> Result<Self, Error> {
        if values.len() != 6 {
            return Err(InvalidShape::from(ValueCount::new("extent", 6, values.len())).into());
        }

        if let Some((position, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidShape::from(NonFinite::new(position, value.to_report())).into());
        }

        Ok(Self::new(
            values[0], values[1], values[2], values[3], values[4], values[5],
        ))
    }

    /// `(min, max)` pairs for the x, y and z axes
    pub fn bounds(&self) -> [(F, F); 3] {
        [
            (self.x_min, self.x_max),
            (self.y_min, self.y_max),
            (self.z_min, self.z_max),
        ]
    }
}

impl<F> FromStr for Extent3D<F>
where
    F: Coordinate + FromStr,
{
    type Err = Error;

    /// Parse an extent in the form `"x_min x_max y_min y_max z_min z_max"`
    ///
    /// ## Example
    /// ```
    /// let extent: toolbox::Extent3D<f64> = "0 10 -1 1 0 0.5".parse().unwrap();
    /// assert_eq!(extent.y_min, -1.);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_ascii_whitespace()
            .enumerate()
            .map(|(position, text)| {
                text.parse::<F>()
                    .map_err(|_| InvalidShape::from(Unparsable::new(position, text.to_string())))
            })
            .collect::<Result<Vec<F>, InvalidShape>>()?;

        Self::from_slice(&values)
    }
}

/// Number of samples along each axis of a grid. Every count is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridShape {
    /// ## Errors
    ///
    /// [`Error::InvalidShape`] if any of the counts is zero
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, Error> {
        if let Some(axis) = [nx, ny, nz].iter().position(|&n| n == 0) {
            return Err(InvalidShape::from(ZeroSamples::from(axis)).into());
        }

        Ok(Self { nx, ny, nz })
    }

    /// Build a shape from `[nx, ny, nz]`.
    pub fn from_slice(counts: &[usize]) -> Result<Self, Error> {
        match counts {
            [nx, ny, nz] => Self::new(*nx, *ny, *nz),
            _ => Err(InvalidShape::from(ValueCount::new("grid shape", 3, counts.len())).into()),
        }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    /// `(nx, ny, nz)`
    pub fn dim(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// total number of points in the grid
    pub fn num_points(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Position of the point `(ix, iy, iz)` in the output of [`generate`]
    pub fn flat_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        (ix * self.ny + iy) * self.nz + iz
    }
}

/// `n` evenly spaced samples from `min` to `max`, both included.
///
/// A single sample is placed at `min`. The last sample is always exactly `max`.
pub fn axis_samples<F: Coordinate>(min: F, max: F, n: usize) -> Array1<F> {
    let mut samples = Array1::linspace(min, max, n);

    // linspace accumulates rounding error towards the far end
    if n > 1 {
        samples[n - 1] = max;
    }

    samples
}

/// Every point of the grid, x varying slowest and z varying fastest.
///
/// The output has `shape.num_points()` entries; the first is `(x_min, y_min, z_min)`.
pub fn generate<F: Coordinate>(extent: &Extent3D<F>, shape: GridShape) -> Vec<[F; 3]> {
    log::trace!("generating {:?} grid over {:?}", shape.dim(), extent);

    let xs = axis_samples(extent.x_min, extent.x_max, shape.nx);
    let ys = axis_samples(extent.y_min, extent.y_max, shape.ny);
    let zs = axis_samples(extent.z_min, extent.z_max, shape.nz);

    let mut points = Vec::with_capacity(shape.num_points());

    for &x in xs.iter() {
        for &y in ys.iter() {
            for &z in zs.iter() {
                points.push([x, y, z]);
            }
        }
    }

    points
}

/// The same points as [`generate`] as an `(num_points, 3)` array
pub fn generate_array<F: Coordinate>(extent: &Extent3D<F>, shape: GridShape) -> Array2<F> {
    let points = generate(extent, shape);
    Array2::from_shape_fn((points.len(), 3), |(row, col)| points[row][col])
}

/// Grid points from a raw extent `[x_min, x_max, y_min, y_max, z_min, z_max]` and raw sample
/// counts `[nx, ny, nz]`.
///
/// ## Errors
///
/// [`Error::InvalidShape`] if the extent does not hold six finite values, `shape` does not hold
/// three counts, or a count is zero.
pub fn grid_coordinates<F: Coordinate>(extent: &[F], shape: &[usize]) -> Result<Vec<[F; 3]>, Error> {
    let extent = Extent3D::from_slice(extent)?;
    let shape = GridShape::from_slice(shape)?;
    Ok(generate(&extent, shape))
}
