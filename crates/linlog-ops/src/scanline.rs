//! Scanline application of the log/lin transfer.
//!
//! A [`LogLinOp`] bundles a direction with a validated coefficient snapshot
//! and applies the curve to pixel runs. Only the first three interleaved
//! channels are transformed; alpha and any further channels pass through
//! unchanged.
//!
//! Buffers may be converted in place (`apply_*`) or copied through
//! (`transform`); both produce identical samples.

use linlog_core::{ChannelCoeffs, Error, LogLinParams, Mode, Result};
use linlog_transfer::cineon;
use tracing::{debug, trace};

/// A validated, ready-to-run conversion.
///
/// Construction derives the per-channel coefficients once; the op is then
/// immutable and can be shared freely across threads and passes. To change
/// parameters, build a new op.
///
/// # Example
///
/// ```rust
/// use linlog_core::{LogLinParams, Mode};
/// use linlog_ops::LogLinOp;
///
/// let op = LogLinOp::new(Mode::LinToLog, &LogLinParams::film()).unwrap();
///
/// let mut pixels = vec![0.18, 0.18, 0.18, 1.0]; // RGBA
/// op.apply_rgba(&mut pixels).unwrap();
///
/// assert!((pixels[0] - 0.4573).abs() < 1e-3);
/// assert_eq!(pixels[3], 1.0); // alpha untouched
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLinOp {
    mode: Mode,
    coeffs: [ChannelCoeffs; 3],
}

impl LogLinOp {
    /// Create an op for `mode`, validating `params` eagerly.
    ///
    /// Fails with a parameter error (see [`linlog_core::Error`]) if any
    /// channel is misconfigured; no pixel is touched in that case.
    pub fn new(mode: Mode, params: &LogLinParams) -> Result<Self> {
        let coeffs = params.coeffs()?;
        debug!(?mode, "prepared log/lin op");
        Ok(Self { mode, coeffs })
    }

    /// The conversion direction.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The derived per-channel coefficients.
    #[inline]
    pub fn coeffs(&self) -> &[ChannelCoeffs; 3] {
        &self.coeffs
    }

    /// Convert a single RGB pixel.
    #[inline]
    pub fn pixel(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self.mode {
            Mode::LinToLog => cineon::encode_rgb(rgb, &self.coeffs),
            Mode::LogToLin => cineon::decode_rgb(rgb, &self.coeffs),
        }
    }

    /// Convert an interleaved RGB buffer in place.
    pub fn apply_rgb(&self, pixels: &mut [f32]) -> Result<()> {
        self.apply_interleaved(pixels, 3)
    }

    /// Convert an interleaved RGBA buffer in place; alpha passes through.
    pub fn apply_rgba(&self, pixels: &mut [f32]) -> Result<()> {
        self.apply_interleaved(pixels, 4)
    }

    /// Convert the first three of `channels` interleaved channels in place.
    ///
    /// Channels beyond the third pass through untouched. An empty buffer is
    /// a valid zero-pixel run.
    pub fn apply_interleaved(&self, pixels: &mut [f32], channels: usize) -> Result<()> {
        if channels < 3 {
            return Err(Error::UnsupportedChannels(channels));
        }
        if pixels.len() % channels != 0 {
            return Err(Error::RaggedBuffer {
                len: pixels.len(),
                channels,
            });
        }
        trace!(samples = pixels.len(), channels, "apply_interleaved");
        self.apply_run(pixels, channels);
        Ok(())
    }

    /// Convert planar channel rows of equal length in place.
    pub fn apply_planar(&self, r: &mut [f32], g: &mut [f32], b: &mut [f32]) -> Result<()> {
        if r.len() != g.len() {
            return Err(Error::SizeMismatch {
                src: r.len(),
                dst: g.len(),
            });
        }
        if r.len() != b.len() {
            return Err(Error::SizeMismatch {
                src: r.len(),
                dst: b.len(),
            });
        }
        trace!(samples = r.len() * 3, "apply_planar");

        let f: fn(f32, &ChannelCoeffs) -> f32 = match self.mode {
            Mode::LinToLog => cineon::encode,
            Mode::LogToLin => cineon::decode,
        };
        for v in r.iter_mut() {
            *v = f(*v, &self.coeffs[0]);
        }
        for v in g.iter_mut() {
            *v = f(*v, &self.coeffs[1]);
        }
        for v in b.iter_mut() {
            *v = f(*v, &self.coeffs[2]);
        }
        Ok(())
    }

    /// Copy `src` into `dst`, then convert `dst` in place.
    ///
    /// Produces the same samples as the in-place path; pass-through
    /// channels are plain copies of the source.
    pub fn transform(&self, src: &[f32], dst: &mut [f32], channels: usize) -> Result<()> {
        if src.len() != dst.len() {
            return Err(Error::SizeMismatch {
                src: src.len(),
                dst: dst.len(),
            });
        }
        dst.copy_from_slice(src);
        self.apply_interleaved(dst, channels)
    }

    /// Shared run kernel; callers have already validated the shape.
    pub(crate) fn apply_run(&self, pixels: &mut [f32], channels: usize) {
        for px in pixels.chunks_exact_mut(channels) {
            let rgb = self.pixel([px[0], px[1], px[2]]);
            px[0] = rgb[0];
            px[1] = rgb[1];
            px[2] = rgb[2];
        }
    }
}
