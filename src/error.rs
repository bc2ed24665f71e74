/// Errors from BMP decoding, encoding and transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("invalid BMP format: {0}")]
    InvalidFormat(String),

    #[error("unsupported BMP variant: {0}")]
    UnsupportedVariant(String),

    #[error("pixel data ends before row {row} is complete")]
    TruncatedData { row: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} plane")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: u32,
        height: u32,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("failed to allocate {bytes} bytes of pixel data")]
    AllocationFailed { bytes: usize },
}

impl BmpError {
    pub(crate) fn too_large(width: impl Into<u64>, height: impl Into<u64>) -> Self {
        BmpError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        }
    }
}
