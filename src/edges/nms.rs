//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! Each pixel whose magnitude exceeds the low threshold is compared against
//! its two neighbors along the gradient sector. Magnitudes outside the image
//! count as zero. Surviving pixels are classified as weak or strong by the
//! high threshold; hysteresis later decides which weak pixels stay.
//!
//! Ties are broken asymmetrically on the horizontal and vertical sectors
//! (strictly greater than the left/upper neighbor, not less than the
//! right/lower one) so a plateau two pixels wide yields a single-pixel line.
use crate::edges::grad::{Grad, Sector};
use crate::image::ImageView;

/// Classification of a pixel after suppression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Candidate {
    #[default]
    Suppressed,
    Weak,
    Strong,
}

/// Per‑pixel candidate map, row-major with `stride == w`.
#[derive(Clone, Debug)]
pub struct NmsMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<Candidate>,
}

impl NmsMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Candidate {
        self.data[y * self.w + x]
    }

    pub fn count(&self, kind: Candidate) -> usize {
        self.data.iter().filter(|&&c| c == kind).count()
    }
}

/// Classify every pixel of `grad` against `low` and `high`.
///
/// Expects `low <= high`.
pub fn suppress_non_maxima(grad: &Grad, low: f32, high: f32) -> NmsMap {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut data = vec![Candidate::Suppressed; w * h];

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        for (x, &m) in mag_row.iter().enumerate() {
            if m <= low {
                continue;
            }
            let sector = grad.sector[y * w + x];
            let [(dx1, dy1), (dx2, dy2)] = sector.neighbors();
            let (xi, yi) = (x as isize, y as isize);
            let n1 = grad.mag.get_or_zero(xi + dx1, yi + dy1);
            let n2 = grad.mag.get_or_zero(xi + dx2, yi + dy2);
            let is_max = match sector {
                Sector::Horizontal | Sector::Vertical => m > n1 && m >= n2,
                Sector::DiagonalDown | Sector::DiagonalUp => m > n1 && m > n2,
            };
            if !is_max {
                continue;
            }
            data[y * w + x] = if m > high {
                Candidate::Strong
            } else {
                Candidate::Weak
            };
        }
    }

    NmsMap { w, h, data }
}
