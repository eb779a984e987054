//! # linlog-transfer
//!
//! Cineon-style printing density transfer functions.
//!
//! Converts per-channel between linear light and normalized 10-bit log
//! code values, parameterized by black point, white point, and gamma.
//!
//! # Usage
//!
//! ```rust
//! use linlog_core::LogLinParams;
//! use linlog_transfer::cineon;
//!
//! let coeffs = LogLinParams::film().coeffs().unwrap();
//!
//! // Encode linear light to log code values
//! let code = cineon::encode_rgb([0.18, 0.18, 0.18], &coeffs);
//!
//! // Decode back to linear
//! let linear = cineon::decode_rgb(code, &coeffs);
//! assert!((linear[0] - 0.18).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`linlog-core`](linlog_core) - Parameter model and derived coefficients
//!
//! # Used By
//!
//! - `linlog-ops` - Scanline and buffer application

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cineon;

pub use cineon::{decode, decode_rgb, encode, encode_rgb, middle_gray};
