use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error(
        "invalid dimensions {width}x{height}: width and height must be non-zero multiples of 16, at most 4080"
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("frame dimension mismatch: expected {expected_w}x{expected_h}, got {got_w}x{got_h}")]
    DimensionMismatch {
        expected_w: u32,
        expected_h: u32,
        got_w: u32,
        got_h: u32,
    },

    #[error("inter frame requested without a previous and golden reference")]
    MissingReference,

    #[error("invalid Y4M data: {0}")]
    InvalidY4m(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
