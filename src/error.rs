//! Error types for palette analysis.

use thiserror::Error;

/// Errors raised while validating the inputs to an analysis. Once the inputs
/// pass validation, counting, grouping, and formatting cannot fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyzeError {
    /// The grouping threshold is negative or not a number
    #[error("grouping threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),

    /// The pixel buffer does not divide into whole RGBA pixels
    #[error("pixel buffer length {0} is not a multiple of 4")]
    RaggedPixelBuffer(usize),

    /// The pixel buffer does not match the claimed image dimensions
    #[error("pixel buffer length {actual} does not match a {width}x{height} RGBA image (expected {expected})")]
    DimensionMismatch {
        actual: usize,
        expected: u64,
        width: u32,
        height: u32,
    },
}

/// Result type for palette analysis.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
