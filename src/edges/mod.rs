//! Edge processing: image gradients, non‑maximum suppression, hysteresis.
//!
//! The stages compose into [`canny`], a two-threshold detector producing a
//! binary edge map. Each stage is usable on its own for tooling:
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy`, magnitude and
//!   a four-sector direction classification.
//! - Non‑maximum suppression classifying pixels into suppressed, weak and
//!   strong candidates.
//! - Hysteresis tracking that keeps weak pixels connected to strong ones.
//!
//! Borders are handled by clamping indices (replicate) in the gradient stage
//! and by zero magnitude outside the image during suppression.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use canny::{canny, CannyOptions, CannyResult};
pub use grad::{image_gradients, sobel_gradients, Grad, GradientKernel, GradientNorm, Sector};
pub use hysteresis::hysteresis;
pub use nms::{suppress_non_maxima, Candidate, NmsMap};
