use super::ArrayTransform;
use crate::array::{NdArray, NdArrayView};
use crate::error::ArgumentError;
use crate::image::{ImageU8, ImageU8Mut, ImageView, ImageViewMut};

/// Per-byte `255 - v` over an `(H, W, C)` u8 array.
///
/// Any channel count is accepted; every sample is inverted independently.
/// The input is left untouched and a new array of the same shape is returned.
pub fn invert_channels(input: &NdArrayView<'_>) -> Result<NdArray, ArgumentError> {
    let src = ImageU8::from_ndarray(input)?;
    let mut out = NdArray::new_like(input);
    let mut dst = ImageU8Mut::from_ndarray(&mut out)?;
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = 255 - s;
        }
    }
    Ok(out)
}

/// [`invert_channels`] as a registry transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct Invert;

impl ArrayTransform for Invert {
    fn apply(&self, input: &NdArrayView<'_>) -> Result<NdArray, ArgumentError> {
        invert_channels(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::DType;

    #[test]
    fn zeros_become_white() {
        let data = [0u8; 12];
        let view = NdArrayView::from_u8(&[2, 2, 3], &data).unwrap();
        let out = invert_channels(&view).unwrap();
        assert_eq!(out.shape(), &[2, 2, 3]);
        assert!(out.as_bytes().iter().all(|&v| v == 255));
    }

    #[test]
    fn inverts_each_byte_regardless_of_channel_count() {
        let data = [0u8, 1, 128, 254, 255, 9, 10, 11];
        let view = NdArrayView::from_u8(&[1, 2, 4], &data).unwrap();
        let out = invert_channels(&view).unwrap();
        assert_eq!(out.as_bytes(), &[255, 254, 127, 1, 0, 246, 245, 244]);
    }

    #[test]
    fn rejects_rank_two() {
        let data = [0u8; 6];
        let view = NdArrayView::from_u8(&[2, 3], &data).unwrap();
        assert_eq!(
            invert_channels(&view).unwrap_err(),
            ArgumentError::Rank {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_non_u8() {
        let data = [0u8; 8];
        let view = NdArrayView::new(&[1, 1, 2], DType::Float32, &data).unwrap();
        assert!(matches!(
            Invert.apply(&view),
            Err(ArgumentError::DType { .. })
        ));
    }

    #[test]
    fn empty_array_is_fine() {
        let view = NdArrayView::from_u8(&[0, 4, 3], &[]).unwrap();
        let out = invert_channels(&view).unwrap();
        assert_eq!(out.shape(), &[0, 4, 3]);
        assert!(out.as_bytes().is_empty());
    }
}
