//! # Splitting arrays into blocks
//!
//! [`cubify`] divides an n-dimensional array into a stack of equally shaped sub-blocks. Every
//! axis of the array is cut into `array.shape[i] / block_shape[i]` groups, and the resulting grid
//! of blocks is enumerated in raster order (last axis fastest). The output has shape
//! `(block_count,) + block_shape`.
//!
//! ```
//! use toolbox::ndarray::{array, Axis};
//!
//! let arr = array![
//!     [0, 1, 2, 3],
//!     [4, 5, 6, 7],
//!     [8, 9, 10, 11],
//!     [12, 13, 14, 15]
//! ];
//!
//! let blocks = toolbox::cubify(&arr, &[2, 2]).unwrap();
//!
//! assert_eq!(blocks.shape(), &[4, 2, 2]);
//! // top right corner of the original array
//! assert_eq!(blocks.index_axis(Axis(0), 1), array![[2, 3], [6, 7]].into_dyn());
//! ```
//!
//! [`uncubify`] performs the inverse operation and stitches a block stack back together.

use crate::error::{BlockCountMismatch, NotDivisible, RankMismatch};
use crate::prelude::*;

/// Number of blocks of `block_shape` needed to tile an array of `array_shape`.
///
/// Fails with [`Error::ShapeMismatch`] if the ranks differ, or if any block length is zero or does
/// not evenly divide the matching array length.
pub fn block_count(array_shape: &[usize], block_shape: &[usize]) -> Result<usize, Error> {
    let repeats = repeats(array_shape, block_shape)?;
    Ok(repeats.iter().product())
}

/// the number of blocks along each axis
fn repeats(array_shape: &[usize], block_shape: &[usize]) -> Result<Vec<usize>, ShapeMismatch> {
    if array_shape.len() != block_shape.len() {
        return Err(RankMismatch::new(array_shape.len(), block_shape.len()).into());
    }

    array_shape
        .iter()
        .zip(block_shape)
        .enumerate()
        .map(|(axis, (&array_len, &block_len))| {
            if block_len == 0 || array_len % block_len != 0 {
                Err(ShapeMismatch::from(NotDivisible::new(
                    axis, array_len, block_len,
                )))
            } else {
                Ok(array_len / block_len)
            }
        })
        .collect()
}

/// Split `array` into a stack of sub-arrays shaped like `block_shape`.
///
/// The returned array has shape `(block_count,) + block_shape`. Block `k` is the `k`th block of
/// the original array when the grid of blocks is walked in raster order, and inside each block
/// the elements keep their original relative positions.
///
/// Arrays in any memory layout are accepted (fortran order, transposed or sliced views); the
/// split always follows logical indices.
///
/// ## Errors
///
/// [`Error::ShapeMismatch`] if `block_shape.len() != array.ndim()` or some block length does not
/// evenly divide the array along that axis. No data is truncated or padded.
pub fn cubify<S, D>(array: &ArrayBase<S, D>, block_shape: &[usize]) -> Result<ArrayD<S::Elem>, Error>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    let repeats = repeats(array.shape(), block_shape)?;
    let rank = block_shape.len();

    log::trace!(
        "splitting array of shape {:?} into blocks of shape {:?}",
        array.shape(),
        block_shape
    );

    // (repeats[0], block[0], repeats[1], block[1], ...)
    let interleaved: Vec<usize> = repeats
        .iter()
        .zip(block_shape)
        .flat_map(|(&repeat, &block_len)| [repeat, block_len])
        .collect();

    // all repeat axes first, then all block axes
    let order: Vec<usize> = (0..rank)
        .map(|axis| 2 * axis)
        .chain((0..rank).map(|axis| 2 * axis + 1))
        .collect();

    let mut stacked_shape = Vec::with_capacity(rank + 1);
    stacked_shape.push(repeats.iter().product());
    stacked_shape.extend_from_slice(block_shape);

    let standard = array.as_standard_layout();
    let grouped = standard
        .view()
        .into_dyn()
        .into_shape(IxDyn(&interleaved))
        .map_err(ShapeMismatch::from)?
        .permuted_axes(IxDyn(&order));

    let elements: Vec<S::Elem> = grouped.iter().cloned().collect();
    let blocks = ArrayD::from_shape_vec(IxDyn(&stacked_shape), elements)
        .map_err(ShapeMismatch::from)?;

    log::trace!("produced block stack of shape {:?}", blocks.shape());

    Ok(blocks)
}

/// Reassemble a block stack produced by [`cubify`] into an array of `array_shape`.
///
/// `blocks` must have shape `(block_count,) + block_shape` where `block_shape` tiles
/// `array_shape` exactly and `block_count` is the number of blocks that tiling requires.
///
/// ## Errors
///
/// [`Error::ShapeMismatch`] if the block axes do not tile `array_shape` or the number of blocks is
/// wrong.
pub fn uncubify<S, D>(blocks: &ArrayBase<S, D>, array_shape: &[usize]) -> Result<ArrayD<S::Elem>, Error>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    if blocks.ndim() != array_shape.len() + 1 {
        return Err(ShapeMismatch::from(RankMismatch::new(
            array_shape.len(),
            blocks.ndim().saturating_sub(1),
        ))
        .into());
    }

    let block_shape = &blocks.shape()[1..];
    let repeats = repeats(array_shape, block_shape)?;
    let rank = array_shape.len();

    let expected: usize = repeats.iter().product();
    let actual = blocks.len_of(Axis(0));
    if expected != actual {
        return Err(ShapeMismatch::from(BlockCountMismatch::new(expected, actual)).into());
    }

    log::trace!(
        "reassembling {} blocks of shape {:?} into array of shape {:?}",
        actual,
        block_shape,
        array_shape
    );

    let grouped_shape: Vec<usize> = repeats.iter().chain(block_shape).copied().collect();

    // back to (repeats[0], block[0], repeats[1], block[1], ...)
    let order: Vec<usize> = (0..rank).flat_map(|axis| [axis, rank + axis]).collect();

    let standard = blocks.as_standard_layout();
    let interleaved = standard
        .view()
        .into_dyn()
        .into_shape(IxDyn(&grouped_shape))
        .map_err(ShapeMismatch::from)?
        .permuted_axes(IxDyn(&order));

    let elements: Vec<S::Elem> = interleaved.iter().cloned().collect();
    let array =
        ArrayD::from_shape_vec(IxDyn(array_shape), elements).map_err(ShapeMismatch::from)?;

    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ShapeBuilder};

    fn counting(shape: &[usize]) -> ArrayD<usize> {
        let len: usize = shape.iter().product();
        ArrayD::from_shape_vec(IxDyn(shape), (0..len).collect()).unwrap()
    }

    #[test]
    fn quadrants_in_raster_order() {
        let arr = counting(&[4, 4]);
        let blocks = cubify(&arr, &[2, 2]).unwrap();

        assert_eq!(blocks.shape(), &[4, 2, 2]);
        assert_eq!(blocks.index_axis(Axis(0), 0), array![[0usize, 1], [4, 5]].into_dyn());
        assert_eq!(blocks.index_axis(Axis(0), 1), array![[2usize, 3], [6, 7]].into_dyn());
        assert_eq!(blocks.index_axis(Axis(0), 2), array![[8usize, 9], [12, 13]].into_dyn());
        assert_eq!(blocks.index_axis(Axis(0), 3), array![[10usize, 11], [14, 15]].into_dyn());
    }

    #[test]
    fn whole_array_is_single_block() {
        let arr = counting(&[3, 5, 2]);
        let blocks = cubify(&arr, &[3, 5, 2]).unwrap();

        assert_eq!(blocks.shape(), &[1, 3, 5, 2]);
        assert_eq!(blocks.index_axis(Axis(0), 0), arr);
    }

    #[test]
    fn unit_blocks_follow_raster_order() {
        let arr = counting(&[2, 3]);
        let blocks = cubify(&arr, &[1, 1]).unwrap();

        assert_eq!(blocks.shape(), &[6, 1, 1]);
        let flat: Vec<usize> = blocks.iter().copied().collect();
        assert_eq!(flat, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn element_lands_at_block_and_offset() {
        let shape = [4, 6, 6];
        let block = [2, 3, 2];
        let arr = counting(&shape);
        let blocks = cubify(&arr, &block).unwrap();

        let repeats = [2, 2, 3];
        assert_eq!(blocks.shape(), &[12, 2, 3, 2]);

        for (index, value) in arr.indexed_iter() {
            let (i, j, k) = (index[0], index[1], index[2]);
            let block_index =
                ((i / block[0]) * repeats[1] + j / block[1]) * repeats[2] + k / block[2];
            let offset = [block_index, i % block[0], j % block[1], k % block[2]];
            assert_eq!(blocks[&offset[..]], *value);
        }
    }

    #[test]
    fn fortran_layout_splits_by_logical_index() {
        let standard = counting(&[4, 4]).into_dimensionality::<ndarray::Ix2>().unwrap();
        let mut fortran = Array2::<usize>::zeros((4, 4).f());
        fortran.assign(&standard);

        assert_eq!(cubify(&fortran, &[2, 2]).unwrap(), cubify(&standard, &[2, 2]).unwrap());
    }

    #[test]
    fn transposed_view_splits_by_logical_index() {
        let arr = counting(&[2, 4]);
        let transposed = arr.t();
        let owned = transposed.to_owned();

        let blocks = cubify(&transposed, &[2, 1]).unwrap();
        assert_eq!(blocks, cubify(&owned, &[2, 1]).unwrap());
        assert_eq!(blocks.index_axis(Axis(0), 0), array![[0usize], [1]].into_dyn());
        assert_eq!(blocks.index_axis(Axis(0), 1), array![[4usize], [5]].into_dyn());
    }

    #[test]
    fn non_dividing_axis_is_rejected() {
        let arr = counting(&[4, 5]);
        let err = cubify(&arr, &[2, 2]).unwrap_err();

        assert_eq!(
            err,
            Error::ShapeMismatch(ShapeMismatch::NotDivisible(NotDivisible::new(1, 5, 2)))
        );
    }

    #[test]
    fn zero_block_length_is_rejected() {
        let arr = counting(&[4, 4]);
        assert!(matches!(
            cubify(&arr, &[0, 4]),
            Err(Error::ShapeMismatch(ShapeMismatch::NotDivisible(_)))
        ));
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        let arr = counting(&[4, 4]);
        let err = cubify(&arr, &[2, 2, 1]).unwrap_err();

        assert_eq!(
            err,
            Error::ShapeMismatch(ShapeMismatch::Rank(RankMismatch::new(2, 3)))
        );
    }

    #[test]
    fn empty_axis_yields_no_blocks() {
        let arr = counting(&[0, 4]);
        let blocks = cubify(&arr, &[2, 2]).unwrap();
        assert_eq!(blocks.shape(), &[0, 2, 2]);
    }

    #[test]
    fn block_count_matches_tiling() {
        assert_eq!(block_count(&[8, 9, 10], &[2, 3, 5]).unwrap(), 4 * 3 * 2);
        assert_eq!(block_count(&[7], &[7]).unwrap(), 1);
        assert!(block_count(&[7], &[2]).is_err());
    }

    #[test]
    fn uncubify_restores_quadrants() {
        let arr = counting(&[4, 4]);
        let blocks = cubify(&arr, &[2, 2]).unwrap();
        assert_eq!(uncubify(&blocks, &[4, 4]).unwrap(), arr);
    }

    #[test]
    fn uncubify_rejects_wrong_block_count() {
        let blocks = counting(&[3, 2, 2]);
        let err = uncubify(&blocks, &[4, 4]).unwrap_err();

        assert_eq!(
            err,
            Error::ShapeMismatch(ShapeMismatch::BlockCount(BlockCountMismatch::new(4, 3)))
        );
    }

    #[test]
    fn uncubify_rejects_wrong_rank() {
        let blocks = counting(&[4, 2, 2]);
        assert!(matches!(
            uncubify(&blocks, &[16]),
            Err(Error::ShapeMismatch(ShapeMismatch::Rank(_)))
        ));
    }
}
