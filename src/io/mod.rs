//! Format conversions for mechanism geometry.

#[cfg(feature = "svg-io")]
pub mod svg;
