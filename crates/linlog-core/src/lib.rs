//! # linlog-core
//!
//! Core types for Cineon-style log/lin color conversion.
//!
//! This crate provides the parameter model shared by the rest of the
//! workspace:
//!
//! - [`LogLinParams`] - per-channel black point, white point, and gamma
//! - [`ChannelCoeffs`] - validated, derived coefficient snapshots
//! - [`Mode`] - conversion direction
//! - [`Error`], [`Result`] - configuration and buffer errors
//!
//! ## Design
//!
//! Validation happens once, at configuration time. The transfer kernels in
//! `linlog-transfer` take [`ChannelCoeffs`] - which can only be obtained
//! from a parameter set that passed validation - so the per-pixel math is
//! total and never needs an error path.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! linlog-core (this crate)
//!    ^
//!    |
//!    +-- linlog-transfer (scalar kernels)
//!    +-- linlog-ops (buffer application)
//!    +-- linlog-cli (command line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod params;

pub use error::{Error, Result};
pub use params::{ChannelCoeffs, LogLinParams, Mode, CODE_MAX, DENSITY_PER_CODE};
