//! Error types returned by the splitting and grid routines

use crate::prelude::*;

/// the requested block shape cannot tile the array
#[derive(Debug, thiserror::Error, From, PartialEq, Clone)]
pub enum ShapeMismatch {
    #[error("{0}")]
    Rank(RankMismatch),
    #[error("{0}")]
    NotDivisible(NotDivisible),
    #[error("{0}")]
    BlockCount(BlockCountMismatch),
    // only reachable if ndarray rejects a shape that already passed validation
    #[error("array could not be regrouped into blocks: {0}")]
    Reshape(ndarray::ShapeError),
}

#[derive(Display, Debug, Constructor, PartialEq, Eq, Clone)]
#[display(
    fmt = "block shape has {block_rank} axes but the array has {array_rank} axes"
)]
pub struct RankMismatch {
    pub array_rank: usize,
    pub block_rank: usize,
}

#[derive(Display, Debug, Constructor, PartialEq, Eq, Clone)]
#[display(
    fmt = "block length {block_len} does not evenly divide array length {array_len} along axis {axis}"
)]
pub struct NotDivisible {
    pub axis: usize,
    pub array_len: usize,
    pub block_len: usize,
}

#[derive(Display, Debug, Constructor, PartialEq, Eq, Clone)]
#[display(fmt = "expected {expected} blocks to reassemble the array, got {actual}")]
pub struct BlockCountMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// the grid extent or sample counts are malformed
#[derive(Debug, thiserror::Error, From, PartialEq, Clone)]
pub enum InvalidShape {
    #[error("{0}")]
    ValueCount(ValueCount),
    #[error("{0}")]
    ZeroSamples(ZeroSamples),
    #[error("{0}")]
    NonFinite(NonFinite),
    #[error("{0}")]
    Unparsable(Unparsable),
}

#[derive(Display, Debug, Constructor, PartialEq, Eq, Clone)]
#[display(fmt = "expected {expected} values for the {what}, got {actual}")]
pub struct ValueCount {
    pub what: &'static str,
    pub expected: usize,
    pub actual: usize,
}

#[derive(From, Display, Debug, PartialEq, Eq, Clone)]
#[display(fmt = "axis {axis} requests zero samples, at least one is required")]
pub struct ZeroSamples {
    pub axis: usize,
}

#[derive(Display, Debug, Constructor, PartialEq, Clone)]
#[display(fmt = "extent value {value} at position {position} is not finite")]
pub struct NonFinite {
    pub position: usize,
    pub value: f64,
}

#[derive(Display, Debug, Constructor, PartialEq, Eq, Clone)]
#[display(fmt = "could not parse extent value `{text}` at position {position}")]
pub struct Unparsable {
    pub position: usize,
    pub text: String,
}
