//! Test support library
//! Shared inputs & helpers for the integration tests.

use gearmesh::float_types::Real;
use gearmesh::{GearCuttingParameters, MechanismResult, solve};

/// Quick helper to compare floating-point results with an acceptable tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The worked example used throughout: m=11, z1=13, z2=47, x1=0.8, x2=0.6032.
#[allow(dead_code)]
pub fn sample_parameters() -> GearCuttingParameters {
    GearCuttingParameters::new(11.0, 13, 47, 0.8, 0.6032)
}

/// A solved sample mesh, scalars only.
#[allow(dead_code)]
pub fn solved_sample() -> MechanismResult {
    solve(&sample_parameters()).expect("sample parameters must solve")
}
