//! Subcommand implementations.

pub mod coeffs;
pub mod convert;
pub mod curve;
