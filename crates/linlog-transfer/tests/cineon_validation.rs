//! Cineon transfer function validation tests.
//!
//! Validates the forward and inverse curves against reference values
//! computed in f64 from the closed-form formulas.
//!
//! # Reference
//!
//! Forward:  code = (log10(lin / gain + offset) * gamma / 0.002 + white) / 1023
//! Inverse:  lin  = gain * (10^((code * 1023 - white) * 0.002 / gamma) - offset)
//!
//! with offset = 10^((black - white) * 0.002 / gamma), gain = 1 / (1 - offset).

use linlog_core::LogLinParams;
use linlog_transfer::cineon;

// ============================================================================
// Film negative reference values (black 95, white 685, gamma 0.6)
// ============================================================================
// offset = 10^((95 - 685) * 0.002 / 0.6) = 10^(-1.96667) = 0.010797752
// gain   = 1 / (1 - 0.010797752)         = 1.010915616

/// (linear, code) pairs for the forward curve.
const FILM_FORWARD_REFERENCE: &[(f32, f32)] = &[
    (0.0, 0.092864), // zero exposure -> black point, 95/1023
    (0.005, 0.140892),
    (0.01, 0.175686),
    (0.02, 0.225453),
    (0.05, 0.311832),
    (0.1, 0.388156),
    (0.18, 0.457320), // middle gray
    (0.35, 0.538423),
    (0.5, 0.582688),
    (0.75, 0.633418),
    (1.0, 0.669599), // full exposure -> white point, 685/1023
    (2.0, 0.757188), // superwhite, one stop over
    (4.0, 0.845121),
];

/// (code, linear) pairs for the inverse curve.
const FILM_INVERSE_REFERENCE: &[(f32, f32)] = &[
    (0.0, -0.0056508), // below the black point: negative linear
    (0.05, -0.0031194),
    (0.092864, 0.0), // black point
    (0.2, 0.0143996),
    (0.35, 0.0712862),
    (0.5, 0.2560047),
    (0.669599, 1.0), // white point
    (0.75, 1.8896443),
    (0.9, 6.1604542),
    (1.0, 13.5216946),
];

// ============================================================================
// Alternate parameter set (black 180, white 880, gamma 0.9)
// ============================================================================
// offset = 10^((180 - 880) * 0.002 / 0.9) = 0.027825594
// gain   = 1 / (1 - 0.027825594)          = 1.028622019

const ALT_FORWARD_REFERENCE: &[(f32, f32)] = &[
    (0.0, 0.175953), // 180/1023
    (0.01, 0.233197),
    (0.18, 0.555422),
    (0.5, 0.733040),
    (1.0, 0.860215), // 880/1023
];

const TOLERANCE: f32 = 2e-4;

#[test]
fn film_forward_matches_reference() {
    let [c, _, _] = LogLinParams::film().coeffs().unwrap();
    for &(linear, expected) in FILM_FORWARD_REFERENCE {
        let code = cineon::encode(linear, &c);
        assert!(
            (code - expected).abs() < TOLERANCE,
            "encode({linear}) = {code}, expected {expected}"
        );
    }
}

#[test]
fn film_inverse_matches_reference() {
    let [c, _, _] = LogLinParams::film().coeffs().unwrap();
    for &(code, expected) in FILM_INVERSE_REFERENCE {
        let linear = cineon::decode(code, &c);
        let tol = TOLERANCE * expected.abs().max(1.0);
        assert!(
            (linear - expected).abs() < tol,
            "decode({code}) = {linear}, expected {expected}"
        );
    }
}

#[test]
fn alternate_params_match_reference() {
    let [c, _, _] = LogLinParams::uniform(180.0, 880.0, 0.9).coeffs().unwrap();
    for &(linear, expected) in ALT_FORWARD_REFERENCE {
        let code = cineon::encode(linear, &c);
        assert!(
            (code - expected).abs() < TOLERANCE,
            "encode({linear}) = {code}, expected {expected}"
        );
    }
}

#[test]
fn forward_inverse_roundtrip_over_exposure_range() {
    let coeffs = LogLinParams::film().coeffs().unwrap();
    // Sweep roughly -10 to +4 stops around middle gray
    for i in 0..=140 {
        let stops = i as f32 / 10.0 - 10.0;
        let linear = 0.18 * 2f32.powf(stops);
        let rgb = cineon::encode_rgb([linear; 3], &coeffs);
        let back = cineon::decode_rgb(rgb, &coeffs);
        for ch in 0..3 {
            assert!(
                (back[ch] - linear).abs() < linear * 1e-4 + 1e-6,
                "roundtrip failed at {stops} stops: {linear} -> {} -> {}",
                rgb[ch],
                back[ch]
            );
        }
    }
}
