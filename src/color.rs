//! Color to grayscale conversion.
//!
//! Uses the standard luma weights `0.299 R + 0.587 G + 0.114 B` in 14-bit
//! fixed point with round-half-up, so results are bit-exact across targets.
use crate::error::ArgumentError;
use crate::image::{GrayImageU8, ImageU8, ImageView};
use serde::Deserialize;

const SHIFT: u32 = 14;
const W_R: u32 = 4899; // round(0.299 * 2^14)
const W_G: u32 = 9617; // round(0.587 * 2^14)
const W_B: u32 = 1868; // round(0.114 * 2^14)
const ROUND: u32 = 1 << (SHIFT - 1);

/// Order of the three color samples inside a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Bgr,
    Rgb,
}

/// Luma of one BGR pixel.
#[inline]
pub fn luma_bgr(b: u8, g: u8, r: u8) -> u8 {
    ((b as u32 * W_B + g as u32 * W_G + r as u32 * W_R + ROUND) >> SHIFT) as u8
}

/// Convert a packed 3-channel image to single-channel gray.
pub fn to_gray(src: &ImageU8<'_>, order: ChannelOrder) -> Result<GrayImageU8, ArgumentError> {
    if src.c != 3 {
        return Err(ArgumentError::Channels {
            expected: 3,
            got: src.c,
        });
    }
    let mut out = Vec::with_capacity(src.w * src.h);
    for row in src.rows() {
        out.extend(row.chunks_exact(3).map(|px| match order {
            ChannelOrder::Bgr => luma_bgr(px[0], px[1], px[2]),
            ChannelOrder::Rgb => luma_bgr(px[2], px[1], px[0]),
        }));
    }
    Ok(GrayImageU8::new(src.w, src.h, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_unity() {
        assert_eq!(W_R + W_G + W_B, 1 << SHIFT);
        assert_eq!(luma_bgr(255, 255, 255), 255);
        assert_eq!(luma_bgr(0, 0, 0), 0);
    }

    #[test]
    fn primaries_follow_luma_weights() {
        assert_eq!(luma_bgr(255, 0, 0), 29);
        assert_eq!(luma_bgr(0, 255, 0), 150);
        assert_eq!(luma_bgr(0, 0, 255), 76);
    }

    #[test]
    fn channel_order_swaps_red_and_blue() {
        let px = [0u8, 0, 255];
        let img = ImageU8 {
            w: 1,
            h: 1,
            c: 3,
            stride: 3,
            data: &px,
        };
        assert_eq!(to_gray(&img, ChannelOrder::Bgr).unwrap().get(0, 0), 76);
        assert_eq!(to_gray(&img, ChannelOrder::Rgb).unwrap().get(0, 0), 29);
    }

    #[test]
    fn non_color_input_is_an_error() {
        let px = [10u8, 20, 30, 40];
        let img = ImageU8 {
            w: 1,
            h: 1,
            c: 4,
            stride: 4,
            data: &px,
        };
        assert_eq!(
            to_gray(&img, ChannelOrder::Bgr).unwrap_err(),
            ArgumentError::Channels {
                expected: 3,
                got: 4
            }
        );
        assert!(to_gray(&ImageU8::gray(2, 2, &px), ChannelOrder::Rgb).is_err());
    }
}
