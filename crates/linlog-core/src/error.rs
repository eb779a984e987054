//! Error types for log/lin conversion.
//!
//! Parameter problems are caught eagerly when an operation is configured,
//! so the per-pixel transform itself never fails. Buffer-shape problems
//! (ragged lengths, too few channels) are reported when a buffer is applied.
//!
//! # Usage
//!
//! ```rust
//! use linlog_core::{LogLinParams, Error};
//!
//! let params = LogLinParams::uniform(95.0, 685.0, 0.0);
//! let err = params.validate().unwrap_err();
//! assert!(err.is_parameter_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or applying a log/lin conversion.
///
/// # Categories
///
/// - **Parameter errors**: [`InvalidParameter`](Error::InvalidParameter),
///   [`DegenerateRange`](Error::DegenerateRange) - raised at configuration
///   time, before any pixel is touched
/// - **Buffer errors**: [`RaggedBuffer`](Error::RaggedBuffer),
///   [`UnsupportedChannels`](Error::UnsupportedChannels),
///   [`SizeMismatch`](Error::SizeMismatch),
///   [`InvalidDimensions`](Error::InvalidDimensions)
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter value is non-finite or outside its valid range.
    #[error("invalid {param} for channel {channel}: {value} ({reason})")]
    InvalidParameter {
        /// Parameter name ("black point", "white point", or "gamma")
        param: &'static str,
        /// Channel index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// The offending value
        value: f32,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Black point equals white point, so the derived gain is infinite.
    #[error("channel {channel}: black point {black} equals white point {white}")]
    DegenerateRange {
        /// Channel index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// Black point code value
        black: f32,
        /// White point code value
        white: f32,
    },

    /// Buffer length is not a whole number of pixels.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    RaggedBuffer {
        /// Buffer length in samples
        len: usize,
        /// Interleaved channel count
        channels: usize,
    },

    /// Fewer interleaved channels than the three the transform operates on.
    #[error("unsupported channel count: {0} (need at least 3)")]
    UnsupportedChannels(usize),

    /// Source and destination buffers have different lengths.
    #[error("size mismatch: {src} vs {dst} samples")]
    SizeMismatch {
        /// Source length in samples
        src: usize,
        /// Destination length in samples
        dst: usize,
    },

    /// Invalid image dimensions for row-based processing.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl Error {
    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(
        param: &'static str,
        channel: usize,
        value: f32,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            param,
            channel,
            value,
            reason,
        }
    }

    /// Creates an [`Error::DegenerateRange`] error.
    #[inline]
    pub fn degenerate_range(channel: usize, black: f32, white: f32) -> Self {
        Self::DegenerateRange {
            channel,
            black,
            white,
        }
    }

    /// Returns `true` if this error was raised by parameter validation.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::DegenerateRange { .. }
        )
    }

    /// Returns `true` if this error was raised by a buffer-shape check.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(
            self,
            Self::RaggedBuffer { .. }
                | Self::UnsupportedChannels(_)
                | Self::SizeMismatch { .. }
                | Self::InvalidDimensions(_)
        )
    }
}
