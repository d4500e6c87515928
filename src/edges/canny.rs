//! Two-threshold Canny edge detector on single-channel 8-bit images.
//!
//! Stages: gradients (3×3 kernel, replicated borders) → non‑maximum
//! suppression → hysteresis. Thresholds are in the magnitude units of the
//! chosen norm over 0..255 intensities, so `(100, 200)` with the default
//! Sobel/L1 setup behaves like the usual host-library defaults.
use crate::diagnostics::TimingBreakdown;
use crate::edges::grad::{image_gradients, GradientKernel, GradientNorm};
use crate::edges::hysteresis::hysteresis;
use crate::edges::nms::{suppress_non_maxima, Candidate};
use crate::image::{GrayImageU8, ImageF32, ImageU8};
use log::debug;
use serde::Deserialize;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Weak-edge threshold
    pub low_threshold: f32,
    /// Strong-edge threshold
    pub high_threshold: f32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L1,
        }
    }
}

impl CannyOptions {
    pub fn with_thresholds(low: f32, high: f32) -> Self {
        Self {
            low_threshold: low,
            high_threshold: high,
            ..Self::default()
        }
    }

    /// Thresholds as `(low, high)`, swapped when given in the wrong order.
    pub fn ordered_thresholds(&self) -> (f32, f32) {
        if self.low_threshold > self.high_threshold {
            (self.high_threshold, self.low_threshold)
        } else {
            (self.low_threshold, self.high_threshold)
        }
    }
}

#[derive(Clone, Debug)]
pub struct CannyResult {
    /// Binary edge map, 255 on edges
    pub edges: GrayImageU8,
    pub strong_count: usize,
    pub weak_count: usize,
    pub timing: TimingBreakdown,
}

pub fn canny(gray: &ImageU8<'_>, options: &CannyOptions) -> CannyResult {
    let (low, high) = options.ordered_thresholds();
    if (low, high) != (options.low_threshold, options.high_threshold) {
        debug!(
            "canny: thresholds given as ({}, {}), using ({low}, {high})",
            options.low_threshold, options.high_threshold
        );
    }
    let mut timing = TimingBreakdown::default();

    let gradient_start = Instant::now();
    let grad = image_gradients(&ImageF32::from_u8(gray), options.kernel, options.norm);
    timing.push("gradient", gradient_start.elapsed().as_secs_f64() * 1000.0);

    let nms_start = Instant::now();
    let map = suppress_non_maxima(&grad, low, high);
    timing.push("nms", nms_start.elapsed().as_secs_f64() * 1000.0);

    let hysteresis_start = Instant::now();
    let edges = hysteresis(&map);
    timing.push("hysteresis", hysteresis_start.elapsed().as_secs_f64() * 1000.0);

    let strong_count = map.count(Candidate::Strong);
    let weak_count = map.count(Candidate::Weak);
    debug!(
        "canny: {}x{} strong={strong_count} weak={weak_count} total_ms={:.3}",
        gray.w, gray.h, timing.total_ms
    );

    CannyResult {
        edges,
        strong_count,
        weak_count,
        timing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: usize, inner: std::ops::Range<usize>) -> Vec<u8> {
        let mut img = vec![20u8; size * size];
        for y in inner.clone() {
            for x in inner.clone() {
                img[y * size + x] = 220;
            }
        }
        img
    }

    #[test]
    fn square_outline_is_closed_and_binary() {
        let data = square(16, 4..12);
        let res = canny(&ImageU8::gray(16, 16, &data), &CannyOptions::default());
        let edges = res.edges.as_bytes();
        assert!(edges.iter().all(|&v| v == 0 || v == 255));
        assert!(res.strong_count > 0);
        // Interior and far background stay empty.
        assert_eq!(res.edges.get(8, 8), 0);
        assert_eq!(res.edges.get(0, 0), 0);
        // Each side of the square carries an edge somewhere near it.
        assert!((2..6).any(|x| res.edges.get(x, 8) == 255));
        assert!((10..14).any(|x| res.edges.get(x, 8) == 255));
        assert!((2..6).any(|y| res.edges.get(8, y) == 255));
        assert!((10..14).any(|y| res.edges.get(8, y) == 255));
    }

    #[test]
    fn thresholds_above_signal_remove_everything() {
        let data = square(16, 4..12);
        let res = canny(
            &ImageU8::gray(16, 16, &data),
            &CannyOptions::with_thresholds(5000.0, 6000.0),
        );
        assert!(res.edges.as_bytes().iter().all(|&v| v == 0));
    }

    #[test]
    fn swapped_thresholds_match_ordered() {
        let data = square(12, 3..9);
        let img = ImageU8::gray(12, 12, &data);
        let a = canny(&img, &CannyOptions::with_thresholds(50.0, 150.0));
        let b = canny(&img, &CannyOptions::with_thresholds(150.0, 50.0));
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn records_stage_timings() {
        let data = square(8, 2..6);
        let res = canny(&ImageU8::gray(8, 8, &data), &CannyOptions::default());
        let labels: Vec<&str> = res.timing.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["gradient", "nms", "hysteresis"]);
    }
}
