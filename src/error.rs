//! Error types for the PNG encoder

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors that can occur while building a PNG
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// Width or height does not fit in a PNG header
    #[error("Image dimension {0} exceeds the PNG limit of 2^31-1")]
    DimensionTooLarge(u32),

    /// Raw scanline data would not fit in memory
    #[error("Image of {width}x{height} is too large to encode")]
    ImageTooLarge { width: u32, height: u32 },
}
