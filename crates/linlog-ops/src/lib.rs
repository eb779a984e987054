//! # linlog-ops
//!
//! Buffer application of Cineon-style log/lin conversion.
//!
//! [`LogLinOp`] pairs a conversion direction with a validated coefficient
//! snapshot and applies the scalar kernels from
//! [`linlog-transfer`](linlog_transfer) across pixel runs: interleaved
//! (RGB, RGBA, or wider - extra channels pass through) or planar, in place
//! or copy-through.
//!
//! # Example
//!
//! ```rust
//! use linlog_core::{LogLinParams, Mode};
//! use linlog_ops::LogLinOp;
//!
//! let op = LogLinOp::new(Mode::LogToLin, &LogLinParams::film()).unwrap();
//!
//! let mut scanline = vec![0.4573, 0.4573, 0.4573, 1.0];
//! op.apply_rgba(&mut scanline).unwrap();
//! assert!((scanline[0] - 0.18).abs() < 1e-3);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - row-parallel processing via [`parallel`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod scanline;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use linlog_core::{Error, Result};
pub use scanline::LogLinOp;
