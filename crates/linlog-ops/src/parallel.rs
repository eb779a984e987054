//! Row-parallel application using Rayon.
//!
//! Rows of an interleaved image are independent, so they can be processed
//! concurrently against the same immutable [`LogLinOp`] snapshot with no
//! shared mutable state.
//!
//! # Example
//!
//! ```rust
//! use linlog_core::{LogLinParams, Mode};
//! use linlog_ops::{parallel, LogLinOp};
//!
//! let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();
//! let mut pixels = vec![0.18f32; 64 * 64 * 4];
//! parallel::apply_rows(&op, &mut pixels, 64, 4).unwrap();
//! ```

use crate::LogLinOp;
use linlog_core::{Error, Result};
use rayon::prelude::*;
use tracing::trace;

/// Convert an interleaved image in place, one row per work item.
///
/// `width` is the row length in pixels; the buffer must hold a whole
/// number of rows. Results are identical to the sequential
/// [`LogLinOp::apply_interleaved`] path.
pub fn apply_rows(op: &LogLinOp, pixels: &mut [f32], width: usize, channels: usize) -> Result<()> {
    if channels < 3 {
        return Err(Error::UnsupportedChannels(channels));
    }
    if width == 0 {
        return Err(Error::InvalidDimensions("width must be > 0".into()));
    }
    let row_len = width
        .checked_mul(channels)
        .ok_or_else(|| Error::InvalidDimensions("row length overflows".into()))?;
    if pixels.len() % row_len != 0 {
        return Err(Error::InvalidDimensions(format!(
            "buffer length {} is not a multiple of row length {}",
            pixels.len(),
            row_len
        )));
    }
    trace!(rows = pixels.len() / row_len, width, channels, "apply_rows");

    pixels
        .par_chunks_mut(row_len)
        .for_each(|row| op.apply_run(row, channels));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linlog_core::{LogLinParams, Mode};

    #[test]
    fn test_matches_sequential() {
        let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();

        let src: Vec<f32> = (0..32 * 8 * 4).map(|i| i as f32 / 1024.0).collect();

        let mut sequential = src.clone();
        op.apply_interleaved(&mut sequential, 4).unwrap();

        let mut parallel = src;
        apply_rows(&op, &mut parallel, 32, 4).unwrap();

        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_rejects_partial_rows() {
        let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();
        let mut pixels = vec![0.0f32; 32 * 4 + 4];
        assert!(apply_rows(&op, &mut pixels, 32, 4).is_err());
    }

    #[test]
    fn test_rejects_zero_width() {
        let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();
        let mut pixels = vec![0.0f32; 16];
        assert!(apply_rows(&op, &mut pixels, 0, 4).is_err());
    }

    #[test]
    fn test_empty_buffer_ok() {
        let op = LogLinOp::new(Mode::LogToLin, &LogLinParams::film()).unwrap();
        let mut pixels: Vec<f32> = vec![];
        apply_rows(&op, &mut pixels, 16, 4).unwrap();
    }
}
