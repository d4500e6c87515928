//! Structured diagnostics emitted alongside results for tooling.
pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};
