//! Image gradients (Sobel/Scharr) with magnitude and direction sector.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per‑pixel `gx`, `gy` and a magnitude under the chosen norm
//!   (`|gx| + |gy|` or `sqrt(gx² + gy²)`).
//! - Classifies each gradient into one of four direction sectors
//!   (0°, 45°, 90°, 135°) for non‑maximum suppression.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers + 1 byte/pixel.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

const TAN_22_5_DEG: f32 = 0.414_213_57;
const TAN_67_5_DEG: f32 = 2.414_213_6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKernel {
    #[default]
    Sobel,
    Scharr,
}

/// How `gx` and `gy` combine into a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientNorm {
    /// `|gx| + |gy|`
    #[default]
    L1,
    /// `sqrt(gx² + gy²)`
    L2,
}

/// Gradient direction folded into four 45° sectors.
///
/// Image coordinates: x grows right, y grows down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Sector {
    /// Gradient within 22.5° of the x axis; compare left/right.
    #[default]
    Horizontal,
    /// Gradient within 22.5° of the y axis; compare up/down.
    Vertical,
    /// `gx` and `gy` share a sign; compare up-left/down-right.
    DiagonalDown,
    /// `gx` and `gy` differ in sign; compare up-right/down-left.
    DiagonalUp,
}

impl Sector {
    #[inline]
    pub fn classify(gx: f32, gy: f32) -> Self {
        let ax = gx.abs();
        let ay = gy.abs();
        if ay < ax * TAN_22_5_DEG {
            Sector::Horizontal
        } else if ay > ax * TAN_67_5_DEG {
            Sector::Vertical
        } else if (gx < 0.0) == (gy < 0.0) {
            Sector::DiagonalDown
        } else {
            Sector::DiagonalUp
        }
    }

    /// Offsets `(dx, dy)` of the two neighbors along the gradient.
    #[inline]
    pub fn neighbors(self) -> [(isize, isize); 2] {
        match self {
            Sector::Horizontal => [(-1, 0), (1, 0)],
            Sector::Vertical => [(0, -1), (0, 1)],
            Sector::DiagonalDown => [(-1, -1), (1, 1)],
            Sector::DiagonalUp => [(1, -1), (-1, 1)],
        }
    }
}

/// Per‑pixel gradient buffers and direction sectors.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Magnitude per pixel under the requested norm
    pub mag: ImageF32,
    pub sector: Vec<Sector>,
}

fn gradients_with_kernels(
    l: &ImageF32,
    kernel_x: &Kernel3,
    kernel_y: &Kernel3,
    norm: GradientNorm,
) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    let mut sector = vec![Sector::default(); w * h];

    if w == 0 || h == 0 {
        return Grad {
            gx,
            gy,
            mag,
            sector,
        };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = match norm {
                GradientNorm::L1 => sum_x.abs() + sum_y.abs(),
                GradientNorm::L2 => (sum_x * sum_x + sum_y * sum_y).sqrt(),
            };
            sector[y * w + x] = Sector::classify(sum_x, sum_y);
        }
    }

    Grad {
        gx,
        gy,
        mag,
        sector,
    }
}

/// Compute gradients with the given kernel pair and magnitude norm.
pub fn image_gradients(l: &ImageF32, kernel: GradientKernel, norm: GradientNorm) -> Grad {
    match kernel {
        GradientKernel::Sobel => gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y, norm),
        GradientKernel::Scharr => {
            gradients_with_kernels(l, &SCHARR_KERNEL_X, &SCHARR_KERNEL_Y, norm)
        }
    }
}

/// Compute Sobel gradients with the L1 magnitude.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    image_gradients(l, GradientKernel::Sobel, GradientNorm::L1)
}
