//! Python bindings: the operation table as a native extension module.
//!
//! Arrays arrive as borrowed read-only numpy arrays and are wrapped in an
//! [`NdArrayView`] once, here; results are returned as new numpy arrays owned
//! by the interpreter. `describe_array` reads the numpy header directly, so
//! it accepts every dtype and memory layout numpy can produce.
use numpy::{
    IntoPyArray, PyArrayDescrMethods, PyArrayDyn, PyArrayMethods, PyReadonlyArrayDyn,
    PyUntypedArray, PyUntypedArrayMethods,
};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PySlice};

use crate::array::{NdArray, NdArrayView};
use crate::error::ArgumentError;
use crate::ops::describe::{print_description, SAMPLE_BYTES};
use crate::ops::{self, ArrayDescription, MODULE_DOC};

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> Self {
        if err.is_type_error() {
            PyTypeError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

fn u8_view<'a>(array: &'a PyReadonlyArrayDyn<'_, u8>) -> Result<NdArrayView<'a>, ArgumentError> {
    let data = array.as_slice().map_err(|_| ArgumentError::NotContiguous)?;
    NdArrayView::from_u8(array.shape(), data)
}

fn to_numpy<'py>(py: Python<'py>, array: NdArray) -> PyResult<Bound<'py, PyArrayDyn<u8>>> {
    let (shape, _, data) = array.into_raw();
    data.into_pyarray(py).reshape(shape)
}

/// Describe any numpy array from its header.
///
/// Type number and item size come from the array's own dtype, so they match
/// what numpy reports on the host platform. The sample bytes are the first
/// elements in C order, copied through `ndarray.flat` so strided views work
/// without materializing the whole array.
fn untyped_description(array: &Bound<'_, PyUntypedArray>) -> PyResult<ArrayDescription> {
    let dtype = array.dtype();
    let itemsize = dtype.itemsize();
    let size = array.len();
    let nbytes = size * itemsize;
    let sample = nbytes.min(SAMPLE_BYTES);

    let head = if sample == 0 {
        Vec::new()
    } else {
        let count = sample.div_ceil(itemsize);
        let slice = PySlice::new(array.py(), 0, count as isize, 1);
        let leading = array.getattr("flat")?.get_item(slice)?;
        let bytes = leading.call_method0("tobytes")?;
        let bytes = bytes.downcast::<PyBytes>()?;
        bytes.as_bytes().iter().take(sample).copied().collect()
    };

    Ok(ArrayDescription {
        ndim: array.ndim(),
        shape: array.shape().to_vec(),
        dtype: dtype.to_string(),
        type_num: dtype.num(),
        itemsize,
        size,
        nbytes,
        head,
    })
}

/// Sum of two integers.
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(a: i32, b: i32) -> i64 {
    ops::add(a, b)
}

/// 255 - v for every byte of an (H, W, C) uint8 array.
#[pyfunction]
#[pyo3(name = "invert_channels")]
fn py_invert_channels<'py>(
    py: Python<'py>,
    image: PyReadonlyArrayDyn<'py, u8>,
) -> PyResult<Bound<'py, PyArrayDyn<u8>>> {
    let out = ops::invert_channels(&u8_view(&image)?)?;
    to_numpy(py, out)
}

/// Canny edges of an (H, W, 3) uint8 BGR array as an (H, W, 1) uint8 array.
#[pyfunction]
#[pyo3(name = "detect_edges")]
fn py_detect_edges<'py>(
    py: Python<'py>,
    image: PyReadonlyArrayDyn<'py, u8>,
    low: i32,
    high: i32,
) -> PyResult<Bound<'py, PyArrayDyn<u8>>> {
    let out = ops::detect_edges(&u8_view(&image)?, low, high)?;
    to_numpy(py, out)
}

/// Print array metadata and its leading bytes; returns 0.
#[pyfunction]
#[pyo3(name = "describe_array")]
fn py_describe_array(array: &Bound<'_, PyUntypedArray>) -> PyResult<i64> {
    Ok(print_description(&untyped_description(array)?))
}

#[pymodule]
pub fn python_cpp_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", MODULE_DOC)?;
    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_invert_channels, m)?)?;
    m.add_function(wrap_pyfunction!(py_detect_edges, m)?)?;
    m.add_function(wrap_pyfunction!(py_describe_array, m)?)?;
    Ok(())
}
