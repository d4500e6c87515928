//! 8-bit images: borrowed read view, borrowed write view, owned gray buffer.
//!
//! The borrowed views are how the transforms see an `(H, W, C)` u8 array:
//! dimension 0 is the row count, dimension 1 the column count and
//! dimension 2 the interleaved channel count.
use crate::array::{DType, NdArray, NdArrayView};
use crate::error::ArgumentError;

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Interleaved channels per pixel
    pub c: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed single-channel view.
    pub fn gray(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            c: 1,
            stride: w,
            data,
        }
    }

    /// Borrow an `(H, W, C)` u8 array as an interleaved image.
    pub fn from_ndarray(view: &NdArrayView<'a>) -> Result<Self, ArgumentError> {
        view.expect_dtype(DType::UInt8)?;
        let (h, w, c) = view.hwc()?;
        Ok(Self {
            w,
            h,
            c,
            stride: w * c,
            data: view.as_bytes(),
        })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        self.c
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.c]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        let len = self.w * self.c;
        (self.stride == len).then_some(&self.data[..len * self.h])
    }
}

/// Mutable interleaved view over an owned array's buffer.
#[derive(Debug)]
pub struct ImageU8Mut<'a> {
    pub w: usize,
    pub h: usize,
    pub c: usize,
    pub stride: usize,
    pub data: &'a mut [u8],
}

impl<'a> ImageU8Mut<'a> {
    /// Borrow an owned `(H, W, C)` u8 array for writing.
    pub fn from_ndarray(array: &'a mut NdArray) -> Result<Self, ArgumentError> {
        let (h, w, c) = array.as_view().hwc()?;
        array.as_view().expect_dtype(DType::UInt8)?;
        Ok(Self {
            w,
            h,
            c,
            stride: w * c,
            data: array.as_bytes_mut(),
        })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8Mut<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        self.c
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.c]
    }
}

impl<'a> crate::image::traits::ImageViewMut for ImageU8Mut<'a> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w * self.c;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        let len = self.w * self.c;
        if self.stride == len {
            Some(&mut self.data[..len * self.h])
        } else {
            None
        }
    }
}

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Zero-filled buffer of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            c: 1,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Hand the buffer over as an `(H, W, 1)` u8 array.
    pub fn into_ndarray(self) -> Result<NdArray, ArgumentError> {
        NdArray::from_vec(vec![self.height, self.width, 1], DType::UInt8, self.data)
    }
}
