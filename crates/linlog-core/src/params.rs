//! Per-channel conversion parameters and derived coefficients.
//!
//! A conversion is described by three values per channel: the black point
//! and white point as 10-bit code values, and a gamma controlling the slope
//! of the density curve. The transfer kernels do not consume these directly;
//! they consume [`ChannelCoeffs`] snapshots derived through validation, so a
//! coefficient set in flight is always consistent with a valid parameter
//! triple.
//!
//! The defaults (black 95, white 685, gamma 0.6) are the customary film
//! negative values for Cineon scans.

use crate::error::{Error, Result};

/// Maximum code value of a 10-bit film scan.
pub const CODE_MAX: f32 = 1023.0;

/// Printing density step per code value.
pub const DENSITY_PER_CODE: f32 = 0.002;

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Log-encoded code values to linear light (inverse curve).
    LogToLin,
    /// Linear light to log-encoded code values (forward curve).
    #[default]
    LinToLog,
}

/// Per-channel black point, white point, and gamma.
///
/// Black and white points are expressed as 10-bit code values in
/// `[0, 1023]`; gamma must be finite and positive.
///
/// # Example
///
/// ```rust
/// use linlog_core::LogLinParams;
///
/// let params = LogLinParams::default();
/// assert_eq!(params.white_point, [685.0, 685.0, 685.0]);
///
/// let coeffs = params.coeffs().unwrap();
/// assert!((coeffs[0].offset - 0.010798).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLinParams {
    /// Black point code value per channel [R, G, B]
    pub black_point: [f32; 3],
    /// White point code value per channel [R, G, B]
    pub white_point: [f32; 3],
    /// Gamma per channel [R, G, B]
    pub gamma: [f32; 3],
}

impl Default for LogLinParams {
    fn default() -> Self {
        Self::film()
    }
}

impl LogLinParams {
    /// Standard film negative parameters: black 95, white 685, gamma 0.6.
    #[inline]
    pub fn film() -> Self {
        Self::uniform(95.0, 685.0, 0.6)
    }

    /// Create parameters with the same values across all three channels.
    #[inline]
    pub fn uniform(black_point: f32, white_point: f32, gamma: f32) -> Self {
        Self {
            black_point: [black_point; 3],
            white_point: [white_point; 3],
            gamma: [gamma; 3],
        }
    }

    /// Validate all three channels without deriving coefficients.
    ///
    /// Rejected configurations (see [`Error`]):
    /// - non-finite values, or black/white points outside `[0, 1023]`
    /// - `gamma <= 0`
    /// - `black_point == white_point` (the derived gain would be infinite)
    pub fn validate(&self) -> Result<()> {
        for channel in 0..3 {
            self.channel_coeffs(channel)?;
        }
        Ok(())
    }

    /// Derive the coefficient snapshot for all three channels.
    ///
    /// Fails with the first parameter error found; on success the returned
    /// coefficients are consistent with `self` and safe to use for any
    /// number of transform passes.
    pub fn coeffs(&self) -> Result<[ChannelCoeffs; 3]> {
        Ok([
            self.channel_coeffs(0)?,
            self.channel_coeffs(1)?,
            self.channel_coeffs(2)?,
        ])
    }

    fn channel_coeffs(&self, channel: usize) -> Result<ChannelCoeffs> {
        let black = self.black_point[channel];
        let white = self.white_point[channel];
        let gamma = self.gamma[channel];

        check_code_value("black point", channel, black)?;
        check_code_value("white point", channel, white)?;
        if !gamma.is_finite() {
            return Err(Error::invalid_parameter(
                "gamma",
                channel,
                gamma,
                "must be finite",
            ));
        }
        if gamma <= 0.0 {
            return Err(Error::invalid_parameter(
                "gamma",
                channel,
                gamma,
                "must be > 0",
            ));
        }
        if black == white {
            return Err(Error::degenerate_range(channel, black, white));
        }

        // Derived in f64; the exponent spans several orders of magnitude.
        let offset = 10f64.powf((black as f64 - white as f64) * 0.002 / gamma as f64);
        let gain = 1.0 / (1.0 - offset);
        let gain = gain as f32;
        if !gain.is_finite() {
            // Black and white differ but are close enough that the offset
            // rounds to 1.
            return Err(Error::degenerate_range(channel, black, white));
        }

        Ok(ChannelCoeffs {
            offset: offset as f32,
            gain,
            white_point: white,
            gamma,
        })
    }
}

/// Derived per-channel coefficients, ready for the transfer kernels.
///
/// `offset = 10^((black - white) * 0.002 / gamma)` and
/// `gain = 1 / (1 - offset)`. Values of this type only exist for validated
/// parameters; rebuild the snapshot after any parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelCoeffs {
    /// Density offset at the black point
    pub offset: f32,
    /// Normalization so that linear 1.0 maps to the white point
    pub gain: f32,
    /// White point code value
    pub white_point: f32,
    /// Gamma
    pub gamma: f32,
}

fn check_code_value(param: &'static str, channel: usize, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(
            param,
            channel,
            value,
            "must be finite",
        ));
    }
    if !(0.0..=CODE_MAX).contains(&value) {
        return Err(Error::invalid_parameter(
            param,
            channel,
            value,
            "must be within [0, 1023]",
        ));
    }
    Ok(())
}
