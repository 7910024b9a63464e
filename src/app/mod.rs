pub mod detect_runner;
pub mod overflow;
pub mod ports;

pub use detect_runner::{DetectReport, DetectRunner, OutputFormat, RunError};
pub use overflow::{OverflowDetector, calculate_total_width, detect, element_total_width};
