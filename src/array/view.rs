use super::{byte_len, element_count, DType};
use crate::error::ArgumentError;

/// Borrowed, validated view over a foreign array buffer.
///
/// Built once at the boundary; `data.len() == product(shape) * itemsize`
/// holds for every value of this type.
#[derive(Clone, Copy, Debug)]
pub struct NdArrayView<'a> {
    shape: &'a [usize],
    dtype: DType,
    data: &'a [u8],
}

impl<'a> NdArrayView<'a> {
    pub fn new(shape: &'a [usize], dtype: DType, data: &'a [u8]) -> Result<Self, ArgumentError> {
        let expected = byte_len(shape, dtype)?;
        if data.len() != expected {
            return Err(ArgumentError::BufferSize {
                shape: shape.to_vec(),
                dtype,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, dtype, data })
    }

    /// Caller guarantees the length invariant.
    pub(super) fn new_unchecked(shape: &'a [usize], dtype: DType, data: &'a [u8]) -> Self {
        debug_assert_eq!(byte_len(shape, dtype).ok(), Some(data.len()));
        Self { shape, dtype, data }
    }

    /// View over a `u8` buffer.
    pub fn from_u8(shape: &'a [usize], data: &'a [u8]) -> Result<Self, ArgumentError> {
        Self::new(shape, DType::UInt8, data)
    }

    #[inline]
    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    #[inline]
    pub fn itemsize(&self) -> usize {
        self.dtype.itemsize()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        // Validated at construction, cannot overflow.
        element_count(self.shape).unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total number of bytes.
    #[inline]
    pub fn nbytes(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn expect_dtype(&self, expected: DType) -> Result<(), ArgumentError> {
        if self.dtype != expected {
            return Err(ArgumentError::DType {
                expected,
                got: self.dtype,
            });
        }
        Ok(())
    }

    pub fn expect_rank(&self, expected: usize) -> Result<(), ArgumentError> {
        if self.ndim() != expected {
            return Err(ArgumentError::Rank {
                expected,
                got: self.ndim(),
            });
        }
        Ok(())
    }

    /// Check that the last dimension equals `expected`.
    pub fn expect_channels(&self, expected: usize) -> Result<(), ArgumentError> {
        let got = self.shape.last().copied().unwrap_or(0);
        if got != expected {
            return Err(ArgumentError::Channels { expected, got });
        }
        Ok(())
    }

    /// Interpret a validated rank-3 array as `(height, width, channels)`.
    pub fn hwc(&self) -> Result<(usize, usize, usize), ArgumentError> {
        self.expect_rank(3)?;
        Ok((self.shape[0], self.shape[1], self.shape[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        let data = [0u8; 11];
        let err = NdArrayView::from_u8(&[2, 2, 3], &data).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::BufferSize {
                shape: vec![2, 2, 3],
                dtype: DType::UInt8,
                expected: 12,
                got: 11,
            }
        );
    }

    #[test]
    fn reports_sizes_for_wide_dtype() {
        let data = [0u8; 24];
        let view = NdArrayView::new(&[2, 3], DType::Float32, &data).unwrap();
        assert_eq!(view.len(), 6);
        assert_eq!(view.nbytes(), 24);
        assert_eq!(view.itemsize(), 4);
        assert_eq!(view.ndim(), 2);
    }

    #[test]
    fn validation_helpers() {
        let data = [0u8; 8];
        let view = NdArrayView::from_u8(&[2, 4], &data).unwrap();
        assert!(view.expect_dtype(DType::UInt8).is_ok());
        assert!(view.expect_dtype(DType::Int8).is_err());
        assert_eq!(
            view.hwc().unwrap_err(),
            ArgumentError::Rank {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            view.expect_channels(3).unwrap_err(),
            ArgumentError::Channels {
                expected: 3,
                got: 4
            }
        );
    }
}
