use super::ArrayTransform;
use crate::array::{DType, NdArray, NdArrayView};
use crate::color::{to_gray, ChannelOrder};
use crate::diagnostics::TimingBreakdown;
use crate::edges::{canny, CannyOptions};
use crate::error::ArgumentError;
use crate::image::ImageU8;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Options for the color → gray → Canny pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    #[serde(flatten)]
    pub canny: CannyOptions,
    pub channel_order: ChannelOrder,
}

impl EdgeOptions {
    pub fn with_thresholds(low: i32, high: i32) -> Self {
        Self {
            canny: CannyOptions::with_thresholds(low as f32, high as f32),
            ..Self::default()
        }
    }
}

/// Edge map plus pipeline statistics.
#[derive(Clone, Debug)]
pub struct EdgeDetection {
    /// `(H, W, 1)` u8 array, each byte 0 or 255
    pub edges: NdArray,
    pub strong_count: usize,
    pub weak_count: usize,
    pub timing: TimingBreakdown,
}

/// Canny edges of an `(H, W, 3)` u8 BGR array with the given thresholds.
pub fn detect_edges(input: &NdArrayView<'_>, low: i32, high: i32) -> Result<NdArray, ArgumentError> {
    detect_edges_with(input, &EdgeOptions::with_thresholds(low, high)).map(|d| d.edges)
}

pub fn detect_edges_with(
    input: &NdArrayView<'_>,
    options: &EdgeOptions,
) -> Result<EdgeDetection, ArgumentError> {
    input.expect_dtype(DType::UInt8)?;
    input.expect_rank(3)?;
    input.expect_channels(3)?;
    let color = ImageU8::from_ndarray(input)?;

    let gray_start = Instant::now();
    let gray = to_gray(&color, options.channel_order)?;
    let gray_ms = gray_start.elapsed().as_secs_f64() * 1000.0;

    let result = canny(&gray.as_view(), &options.canny);
    let mut timing = TimingBreakdown::default();
    timing.push("grayscale", gray_ms);
    for stage in result.timing.stages {
        timing.push(stage.label, stage.elapsed_ms);
    }
    debug!(
        "detect_edges: {}x{} edges={} total_ms={:.3}",
        color.w,
        color.h,
        result.edges.as_bytes().iter().filter(|&&v| v != 0).count(),
        timing.total_ms
    );

    Ok(EdgeDetection {
        edges: result.edges.into_ndarray()?,
        strong_count: result.strong_count,
        weak_count: result.weak_count,
        timing,
    })
}

impl ArrayTransform for EdgeOptions {
    fn apply(&self, input: &NdArrayView<'_>) -> Result<NdArray, ArgumentError> {
        detect_edges_with(input, self).map(|d| d.edges)
    }
}
