use super::{byte_len, DType, NdArrayView};
use crate::error::ArgumentError;

/// Owned array produced by an operation and handed to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NdArray {
    shape: Vec<usize>,
    dtype: DType,
    data: Vec<u8>,
}

impl NdArray {
    /// Zero-filled array of the given shape and dtype.
    pub fn zeros(shape: &[usize], dtype: DType) -> Result<Self, ArgumentError> {
        let len = byte_len(shape, dtype)?;
        Ok(Self {
            shape: shape.to_vec(),
            dtype,
            data: vec![0; len],
        })
    }

    /// Zero-filled array with the same shape and dtype as `like`.
    pub fn new_like(like: &NdArrayView<'_>) -> Self {
        Self {
            shape: like.shape().to_vec(),
            dtype: like.dtype(),
            data: vec![0; like.nbytes()],
        }
    }

    /// Take ownership of a raw byte buffer, checking its length against `shape`.
    pub fn from_vec(shape: Vec<usize>, dtype: DType, data: Vec<u8>) -> Result<Self, ArgumentError> {
        NdArrayView::new(&shape, dtype, &data)?;
        Ok(Self { shape, dtype, data })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the buffer; the length cannot change.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_view(&self) -> NdArrayView<'_> {
        NdArrayView::new_unchecked(&self.shape, self.dtype, &self.data)
    }

    /// Split into shape, dtype and buffer.
    pub fn into_raw(self) -> (Vec<usize>, DType, Vec<u8>) {
        (self.shape, self.dtype, self.data)
    }
}
