//! Closed-form mesh computation for an external spur-gear pair.
//!
//! Given cutting parameters (module, tooth counts, profile-shift
//! coefficients) this produces every scalar mesh quantity: the operating
//! pressure angle via the inverse involute, center distance, the five
//! characteristic circle diameters per gear, and tooth thicknesses
//! propagated between those circles.

use crate::errors::Error;
use crate::float_types::{EPSILON, PI, Real, TAU};
use crate::math;
use crate::mechanism::data::{
    GearCharacteristics, GearCuttingParameters, MechanismData, MechanismResult,
};
use nalgebra::Point2;

/// Nominal pressure angle of the basic rack, degrees.
pub const PRESSURE_ANGLE_DEG: Real = 20.0;
/// Bottom clearance coefficient `c*`.
pub const CLEARANCE_COEFFICIENT: Real = 0.25;
/// Root fillet radius factor.
const FILLET_FACTOR: Real = 0.38;

/// Involute tooth-thickness transfer between two circles of one gear:
/// `s_to = d_to · (s_from/d_from + inv(α_from) − inv(α_to))`, where each
/// circle's pressure angle is `acos(d_b / d_circle)` (zero at the base
/// circle).
fn transferred_thickness(
    thickness_from: Real,
    diameter_from: Real,
    angle_from: Real,
    diameter_to: Real,
    angle_to: Real,
) -> Real {
    diameter_to
        * (thickness_from / diameter_from + math::involute(angle_from) - math::involute(angle_to))
}

/// Scalar profile of one gear of the pair. `shift` is the gear's own
/// profile-shift coefficient; `mating_shift` the other gear's, which
/// enters the addendum height per the standard profile-shifted pair
/// convention.
fn gear_characteristics(
    module: Real,
    teeth: u32,
    shift: Real,
    mating_shift: Real,
    center_coefficient: Real,
    alpha: Real,
    alpha_prime: Real,
) -> Result<GearCharacteristics, Error> {
    let z = teeth as Real;

    let reference_diameter = z * module;
    let base_diameter = reference_diameter * alpha.cos();
    let working_diameter = base_diameter / alpha_prime.cos();

    let addendum_height = (1.0 + center_coefficient - mating_shift) * module;
    let dedendum_height = (1.0 + CLEARANCE_COEFFICIENT - shift) * module;
    let addendum_diameter = reference_diameter + 2.0 * addendum_height;
    let dedendum_diameter = reference_diameter - 2.0 * dedendum_height;

    if addendum_diameter <= reference_diameter || reference_diameter <= dedendum_diameter {
        return Err(Error::invalid(format!(
            "profile shift {shift} breaks the circle ordering for z={teeth}"
        )));
    }

    let tip_cos = base_diameter / addendum_diameter;
    if !(-1.0..=1.0).contains(&tip_cos) {
        return Err(Error::invalid(
            "addendum circle lies inside the base circle",
        ));
    }
    let tip_pressure_angle = tip_cos.acos();

    // Thickness at the reference circle, then propagated outward through
    // the working, base and addendum circles.
    let reference_thickness = module * (PI / 2.0 + 2.0 * shift * alpha.tan());
    let working_thickness = transferred_thickness(
        reference_thickness,
        reference_diameter,
        alpha,
        working_diameter,
        alpha_prime,
    );
    let base_thickness = transferred_thickness(
        working_thickness,
        working_diameter,
        alpha_prime,
        base_diameter,
        0.0,
    );
    let tip_thickness = transferred_thickness(
        base_thickness,
        base_diameter,
        0.0,
        addendum_diameter,
        tip_pressure_angle,
    );

    let characteristics = GearCharacteristics {
        teeth,
        shift_coefficient: shift,
        tooth_spacing_angle: TAU / z,
        dedendum_diameter,
        base_diameter,
        reference_diameter,
        working_diameter,
        addendum_diameter,
        reference_thickness,
        working_thickness,
        base_thickness,
        tip_thickness,
        reference_tooth_angle: 2.0 * reference_thickness / reference_diameter,
        working_tooth_angle: 2.0 * working_thickness / working_diameter,
        base_tooth_angle: 2.0 * base_thickness / base_diameter,
        tip_tooth_angle: 2.0 * tip_thickness / addendum_diameter,
        tip_pressure_angle,
    };

    for value in [
        characteristics.working_diameter,
        characteristics.working_thickness,
        characteristics.tip_thickness,
        characteristics.tip_pressure_angle,
    ] {
        if !value.is_finite() {
            return Err(Error::invalid("non-finite gear characteristic"));
        }
    }

    Ok(characteristics)
}

/// Computes all scalar mesh quantities for the pair. The geometry list of
/// the returned [`MechanismResult`] is left empty; apply
/// [`generate_mechanism_path`](crate::mechanism::profile::generate_mechanism_path)
/// to fill it.
pub fn solve(parameters: &GearCuttingParameters) -> Result<MechanismResult, Error> {
    parameters.validate()?;

    let m = parameters.module;
    let z1 = parameters.pinion_teeth as Real;
    let z2 = parameters.gear_teeth as Real;
    let x1 = parameters.pinion_shift;
    let x2 = parameters.gear_shift;

    let alpha = math::radians(PRESSURE_ANGLE_DEG);
    let transmission_ratio = z2 / z1;

    let involute_alpha_prime = 2.0 * alpha.tan() * (x1 + x2) / (z1 + z2) + math::involute(alpha);
    let alpha_prime = math::inverse_involute(involute_alpha_prime)?;
    if alpha_prime.cos().abs() < EPSILON {
        return Err(Error::invalid("operating pressure angle is degenerate"));
    }

    let center_coefficient = (z1 + z2) / 2.0 * (alpha.cos() / alpha_prime.cos() - 1.0);
    let center_distance = ((z1 + z2) / 2.0 + center_coefficient) * m;

    let pinion = gear_characteristics(
        m,
        parameters.pinion_teeth,
        x1,
        x2,
        center_coefficient,
        alpha,
        alpha_prime,
    )?;
    let gear = gear_characteristics(
        m,
        parameters.gear_teeth,
        x2,
        x1,
        center_coefficient,
        alpha,
        alpha_prime,
    )?;

    // Contact (overlap) ratio from the lengths of the approach and recess
    // portions of the line of action.
    let approach = ((pinion.addendum_diameter / 2.0).powi(2)
        - (pinion.base_diameter / 2.0).powi(2))
    .sqrt();
    let recess =
        ((gear.addendum_diameter / 2.0).powi(2) - (gear.base_diameter / 2.0).powi(2)).sqrt();
    let contact_ratio = (approach + recess - center_distance * alpha_prime.sin())
        / (PI * m * alpha.cos());

    let mechanism = MechanismData {
        module: m,
        pressure_angle: PRESSURE_ANGLE_DEG,
        operating_pressure_angle: math::degrees(alpha_prime),
        center_distance,
        center_distance_coefficient: center_coefficient,
        transmission_ratio,
        contact_ratio,
        pitch: PI * m,
        fillet_radius: FILLET_FACTOR * m,
        undercut_minimum_teeth: 2.0 / alpha.sin().powi(2),
    };

    for value in [
        mechanism.operating_pressure_angle,
        mechanism.center_distance,
        mechanism.contact_ratio,
    ] {
        if !value.is_finite() {
            return Err(Error::invalid("non-finite mesh quantity"));
        }
    }

    Ok(MechanismResult {
        mechanism,
        pinion_center: Point2::origin(),
        action_point: Point2::new(pinion.working_diameter / 2.0, 0.0),
        gear_center: Point2::new(
            pinion.working_diameter / 2.0 + gear.working_diameter / 2.0,
            0.0,
        ),
        pinion,
        gear,
        geometry: Vec::new(),
    })
}
