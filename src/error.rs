use serde::{Deserialize, Serialize};

/// Precondition violations raised by constructors and processing calls.
///
/// All errors are synchronous and unrecoverable for the call that raised
/// them; nothing is retried or swallowed internally. Callers are expected
/// to validate shapes before construction rather than catch-and-continue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A frame or buffer was constructed with zero channels, zero samples,
    /// or ragged channel lengths.
    #[error("zero channels, zero samples, or ragged channel lengths")]
    InvalidShape,
    /// Empty coefficient or root lists, mismatched coefficient set lengths,
    /// a delay block longer than the configured delay, or out-of-range
    /// window scale bounds.
    #[error("invalid argument")]
    InvalidArgument,
    /// A frame's channel count disagrees with the component's configured
    /// channel count.
    #[error("channel count mismatch (expected {expected}, got {got})")]
    ChannelMismatch {
        /// Channel count the component was constructed with
        expected: usize,
        /// Channel count of the offending frame
        got: usize,
    },
    /// FFT input length not a power of two, mismatched real/imaginary
    /// lengths, or a window applied to a frame of a different length.
    #[error("invalid length")]
    InvalidLength,
}
