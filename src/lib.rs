//! Involute **spur-gear pair** mesh calculation and 2D profile geometry,
//! from cutting parameters (module, tooth counts, profile-shift
//! coefficients) to renderable paths and a full scalar breakdown of the
//! mesh.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: convert mechanism geometry to SVG documents
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use gearmesh::{GearCuttingParameters, generate_mechanism_path, solve};
//!
//! let parameters = GearCuttingParameters::new(11.0, 13, 47, 0.8, 0.6032);
//! let result = generate_mechanism_path(solve(&parameters)?)?;
//! assert!(result.geometry.iter().any(|g| g.name.as_deref() == Some("pinion")));
//! # Ok::<(), gearmesh::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod math;
pub mod mechanism;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::Error;
pub use mechanism::{
    CurveType, GearCharacteristics, GearCuttingParameters, GearGeometry, MechanismData,
    MechanismResult, MeshRotation, PathAttribute, ProfilePath, generate_mechanism_path, solve,
};
