#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod array;
pub mod error;
pub mod ops;

// Building blocks of the image operations.
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod image;

#[cfg(feature = "python")]
mod python;

// --- High-level re-exports -------------------------------------------------

pub use crate::array::{DType, NdArray, NdArrayView};
pub use crate::error::ArgumentError;
pub use crate::ops::{
    add, call, describe_array, detect_edges, invert_channels, Operation, Value,
};

#[cfg(feature = "python")]
pub use crate::python::python_cpp_module;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use buffer_transforms::prelude::*;
///
/// let (h, w) = (4usize, 6usize);
/// let pixels = vec![0u8; h * w * 3];
/// let shape = [h, w, 3];
/// let view = NdArrayView::from_u8(&shape, &pixels).unwrap();
///
/// let inverted = invert_channels(&view).unwrap();
/// assert!(inverted.as_bytes().iter().all(|&v| v == 255));
///
/// let edges = detect_edges(&view, 100, 200).unwrap();
/// assert_eq!(edges.shape(), &[h, w, 1]);
/// ```
pub mod prelude {
    pub use crate::array::{DType, NdArray, NdArrayView};
    pub use crate::error::ArgumentError;
    pub use crate::ops::{add, describe_array, detect_edges, invert_channels};
}
