//! N-dimensional numeric arrays as seen from the host boundary.
//!
//! An array is a shape, an element type tag and a contiguous row-major byte
//! buffer with `len(data) == product(shape) * itemsize`. The invariant is
//! checked once, when a view or owned array is constructed, so the
//! transforms downstream never do pointer arithmetic on unchecked buffers.
//!
//! - [`NdArrayView`]: borrowed input, valid for the duration of one call.
//! - [`NdArray`]: freshly allocated output, owned by the caller on return.
pub mod dtype;
pub mod owned;
pub mod view;

pub use self::dtype::DType;
pub use self::owned::NdArray;
pub use self::view::NdArrayView;

use crate::error::ArgumentError;

/// Number of elements described by `shape` (1 for rank 0).
pub fn element_count(shape: &[usize]) -> Result<usize, ArgumentError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| ArgumentError::ShapeOverflow {
            shape: shape.to_vec(),
        })
}

/// Byte length required for `shape` of `dtype`.
pub fn byte_len(shape: &[usize], dtype: DType) -> Result<usize, ArgumentError> {
    element_count(shape)?
        .checked_mul(dtype.itemsize())
        .ok_or_else(|| ArgumentError::ShapeOverflow {
            shape: shape.to_vec(),
        })
}
