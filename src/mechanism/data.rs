//! Data model shared between the mechanics solver and the profile
//! geometry generator.

use crate::errors::Error;
use crate::float_types::Real;
use crate::mechanism::geometry::GearGeometry;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Practical lower bound on tooth counts accepted by the solver.
pub const MIN_TEETH: u32 = 10;
/// Largest profile-shift magnitude accepted by the solver.
pub const MAX_SHIFT: Real = 2.0;

/// Cutting parameters of an external spur-gear pair. Immutable input to
/// a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearCuttingParameters {
    /// Gear module `m` in millimeters.
    pub module: Real,
    /// Pinion tooth count `z1`.
    pub pinion_teeth: u32,
    /// Gear tooth count `z2`.
    pub gear_teeth: u32,
    /// Pinion profile-shift coefficient `x1`.
    pub pinion_shift: Real,
    /// Gear profile-shift coefficient `x2`.
    pub gear_shift: Real,
}

impl GearCuttingParameters {
    pub fn new(
        module: Real,
        pinion_teeth: u32,
        gear_teeth: u32,
        pinion_shift: Real,
        gear_shift: Real,
    ) -> Self {
        Self {
            module,
            pinion_teeth,
            gear_teeth,
            pinion_shift,
            gear_shift,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.module.is_finite() || self.module <= 0.0 {
            return Err(Error::invalid(format!(
                "module must be positive, got {}",
                self.module
            )));
        }
        if self.pinion_teeth < MIN_TEETH || self.gear_teeth < MIN_TEETH {
            return Err(Error::invalid(format!(
                "tooth counts must be at least {MIN_TEETH}, got z1={}, z2={}",
                self.pinion_teeth, self.gear_teeth
            )));
        }
        for shift in [self.pinion_shift, self.gear_shift] {
            if !shift.is_finite() || shift.abs() > MAX_SHIFT {
                return Err(Error::invalid(format!(
                    "profile shift must lie in [-{MAX_SHIFT}, {MAX_SHIFT}], got {shift}"
                )));
            }
        }
        Ok(())
    }
}

/// Scalar profile of one gear of the pair: its characteristic circle
/// diameters, and the tooth thickness (arc length), tooth angular width
/// `2s/d`, and pressure angle where each applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearCharacteristics {
    pub teeth: u32,
    pub shift_coefficient: Real,
    /// Angular period of one tooth-and-gap, `2π / teeth` (radians).
    pub tooth_spacing_angle: Real,

    pub dedendum_diameter: Real,
    pub base_diameter: Real,
    pub reference_diameter: Real,
    pub working_diameter: Real,
    pub addendum_diameter: Real,

    pub reference_thickness: Real,
    pub working_thickness: Real,
    pub base_thickness: Real,
    pub tip_thickness: Real,

    pub reference_tooth_angle: Real,
    pub working_tooth_angle: Real,
    pub base_tooth_angle: Real,
    pub tip_tooth_angle: Real,

    /// Pressure angle at the addendum circle, `acos(d_b / d_a)` (radians).
    pub tip_pressure_angle: Real,
}

/// Quantities shared by both gears of the mesh.
///
/// Angles are carried in radians throughout the crate; the two pressure
/// angles here are the display-boundary exception and are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanismData {
    pub module: Real,
    /// Nominal pressure angle, degrees.
    pub pressure_angle: Real,
    /// Operating pressure angle, degrees.
    pub operating_pressure_angle: Real,
    pub center_distance: Real,
    pub center_distance_coefficient: Real,
    /// `z2 / z1`.
    pub transmission_ratio: Real,
    /// Contact (overlap) ratio ε.
    pub contact_ratio: Real,
    /// Circular pitch `π·m`.
    pub pitch: Real,
    /// Root fillet radius heuristic, `0.38·m`.
    pub fillet_radius: Real,
    /// Minimum tooth count avoiding undercut, `2 / sin²α`.
    pub undercut_minimum_teeth: Real,
}

/// Which analytic curve governs the tooth profile between two
/// consecutive angular samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveType {
    Dedendum,
    RisingInvolute,
    ReturningInvolute,
    Addendum,
}

/// Complete solve output: shared mesh data, both gear profiles, the three
/// derived layout points, and (after the profile generator has run) the
/// renderable geometry list.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanismResult {
    pub mechanism: MechanismData,
    pub pinion: GearCharacteristics,
    pub gear: GearCharacteristics,

    /// Pinion center, always the origin.
    pub pinion_center: Point2<Real>,
    /// Point of action on the line of centers, `(d'1/2, 0)`.
    pub action_point: Point2<Real>,
    /// Gear center, `(d'1/2 + d'2/2, 0)`.
    pub gear_center: Point2<Real>,

    /// Empty until [`generate_mechanism_path`](crate::mechanism::profile::generate_mechanism_path)
    /// has been applied.
    pub geometry: Vec<GearGeometry>,
}

impl MechanismResult {
    /// Guards geometry generation against a result whose scalars never
    /// came out of a successful solve (zeroed or NaN-laden fields).
    pub(crate) fn ensure_solved(&self) -> Result<(), Error> {
        for (value, what) in [
            (self.mechanism.module, "module"),
            (self.mechanism.center_distance, "center distance"),
            (self.pinion.base_diameter, "pinion base diameter"),
            (self.pinion.dedendum_diameter, "pinion dedendum diameter"),
            (self.pinion.addendum_diameter, "pinion addendum diameter"),
            (self.gear.base_diameter, "gear base diameter"),
            (self.gear.dedendum_diameter, "gear dedendum diameter"),
            (self.gear.addendum_diameter, "gear addendum diameter"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::missing(what));
            }
        }
        if self.pinion.teeth == 0 || self.gear.teeth == 0 {
            return Err(Error::missing("tooth counts"));
        }
        Ok(())
    }
}
