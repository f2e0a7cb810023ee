use std::fmt::Debug;

/// Scalar type usable as a grid coordinate.
///
/// Implemented for every [`Float`](num_traits::Float) that can be printed and
/// shared across threads, which in practice means `f32` and `f64`.
pub trait Coordinate: num_traits::Float + Debug + Send + Sync + 'static {
    /// lossy conversion used when reporting bad extent values in errors
    fn to_report(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Coordinate for T where T: num_traits::Float + Debug + Send + Sync + 'static {}
