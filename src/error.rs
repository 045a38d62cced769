use std::fmt;

/// Possible errors encountered while compressing or decompressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The output buffer filled before the codec finished writing. The
    /// bytes already written carry no meaning on their own.
    BufferTooSmall,
}
impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::BufferTooSmall => {
                write!(f, "Output buffer too small.")
            }
        }
    }
}
impl std::error::Error for CodecError {}
