//! Gear-pair mechanism core: the mechanics solver, the profile geometry
//! generator, and the rotation-timing helper for animation consumers.

pub mod data;
pub mod geometry;
pub mod profile;
pub mod rotation;
pub mod solver;

pub use data::{
    CurveType, GearCharacteristics, GearCuttingParameters, MechanismData, MechanismResult,
};
pub use geometry::{GearGeometry, PathAttribute, ProfilePath};
pub use profile::generate_mechanism_path;
pub use rotation::MeshRotation;
pub use solver::solve;
