//! Cineon-style printing density transfer function.
//!
//! Film scans store printing density: each 10-bit code value represents a
//! fixed density step (0.002) above the base. The curve is parameterized
//! per channel by a black point (code value of zero exposure), a white
//! point (code value of full exposure), and a gamma.
//!
//! Derived per channel:
//!
//! ```text
//! offset = 10^((black - white) * 0.002 / gamma)
//! gain   = 1 / (1 - offset)
//! ```
//!
//! so that linear 0.0 encodes exactly to `black / 1023` and linear 1.0 to
//! `white / 1023`.
//!
//! # Range
//!
//! - Encoded: [0, 1] (normalized 10-bit code values)
//! - Linear: Scene-referred; values above 1.0 encode above the white point
//!
//! # Reference
//!
//! Kodak Cineon calibration, as popularized by the Log2Lin compositing
//! node family.

use linlog_core::{ChannelCoeffs, CODE_MAX, DENSITY_PER_CODE};

/// Smallest argument fed to `log10` in the forward direction.
///
/// Inputs that would drive the logarithm to zero or below (possible for
/// negative linear values) are clamped here, so the forward transfer is
/// total over all finite inputs and never returns NaN or -Inf.
const MIN_LOG_ARG: f32 = f32::MIN_POSITIVE;

/// Forward transfer: linear light to normalized log code value.
///
/// # Example
///
/// ```rust
/// use linlog_core::LogLinParams;
/// use linlog_transfer::cineon;
///
/// let [r, _, _] = LogLinParams::film().coeffs().unwrap();
///
/// // 18% gray encodes near code 468 of 1023
/// let code = cineon::encode(0.18, &r);
/// assert!((code - 0.4573).abs() < 1e-3);
///
/// // Linear 1.0 encodes exactly to the white point
/// assert!((cineon::encode(1.0, &r) - 685.0 / 1023.0).abs() < 1e-6);
/// ```
#[inline]
pub fn encode(linear: f32, c: &ChannelCoeffs) -> f32 {
    let arg = (linear / c.gain + c.offset).max(MIN_LOG_ARG);
    (arg.log10() * (c.gamma / DENSITY_PER_CODE) + c.white_point) / CODE_MAX
}

/// Inverse transfer: normalized log code value to linear light.
///
/// Exact analytic inverse of [`encode`] for code values above the clamp
/// floor. Code values below the black point produce small negative linear
/// values, matching the behavior of film scans.
///
/// # Example
///
/// ```rust
/// use linlog_core::LogLinParams;
/// use linlog_transfer::cineon;
///
/// let [r, _, _] = LogLinParams::film().coeffs().unwrap();
///
/// // The black point decodes to zero, the white point to one
/// assert!(cineon::decode(95.0 / 1023.0, &r).abs() < 1e-6);
/// assert!((cineon::decode(685.0 / 1023.0, &r) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn decode(code: f32, c: &ChannelCoeffs) -> f32 {
    let density = (code * CODE_MAX - c.white_point) * (DENSITY_PER_CODE / c.gamma);
    c.gain * (10f32.powf(density) - c.offset)
}

/// Applies the forward transfer to RGB with per-channel coefficients.
#[inline]
pub fn encode_rgb(rgb: [f32; 3], coeffs: &[ChannelCoeffs; 3]) -> [f32; 3] {
    [
        encode(rgb[0], &coeffs[0]),
        encode(rgb[1], &coeffs[1]),
        encode(rgb[2], &coeffs[2]),
    ]
}

/// Applies the inverse transfer to RGB with per-channel coefficients.
#[inline]
pub fn decode_rgb(rgb: [f32; 3], coeffs: &[ChannelCoeffs; 3]) -> [f32; 3] {
    [
        decode(rgb[0], &coeffs[0]),
        decode(rgb[1], &coeffs[1]),
        decode(rgb[2], &coeffs[2]),
    ]
}

/// Returns the code value for 18% gray (middle gray) on one channel.
#[inline]
pub fn middle_gray(c: &ChannelCoeffs) -> f32 {
    encode(0.18, c)
}
