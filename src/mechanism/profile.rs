//! Parametric tooth-profile and annotation geometry generation.
//!
//! Converts the solver's per-gear scalars into an ordered angular event
//! sequence and walks it to build one closed outline per gear, plus the
//! five characteristic circles and the axis/pressure-line annotations.

use crate::errors::Error;
use crate::float_types::{FRAC_PI_2, Real};
use crate::math;
use crate::mechanism::data::{CurveType, GearCharacteristics, MechanismResult};
use crate::mechanism::geometry::{GearGeometry, PathAttribute, ProfilePath};
use geo::LineString;
use nalgebra::{Point2, Vector2};

/// Nudge applied to involute boundary events so ties against arc samples
/// resolve deterministically after sorting.
const INVOLUTE_OFFSET: Real = 1e-4;
/// Samples per addendum/dedendum arc span.
const ARC_POINT_COUNT: usize = 5;
/// Samples per involute flank.
const INVOLUTE_POINT_COUNT: usize = 10;
/// Marker radius of the pressure-line endpoints, in modules.
const MARKER_RADIUS_FACTOR: Real = 0.25;
/// Annotation overhang past the addendum circles, in modules.
const ANNOTATION_MARGIN_FACTOR: Real = 2.0;

/// Builds the angular event sequence for one gear: for every tooth, the
/// rising-involute boundary pair, the addendum-arc samples across the
/// tip, the returning-involute boundary pair, and the dedendum-arc
/// samples across the gap. Sorted by angle before returning.
pub fn generate_angle_data(
    teeth: u32,
    involute_angle: Real,
    tooth_spacing_angle: Real,
    tip_angle: Real,
    start_angle_offset: Real,
) -> Vec<(Real, CurveType)> {
    let teeth = teeth as usize;
    let mut events: Vec<(Real, CurveType)> =
        Vec::with_capacity(teeth * (4 + 2 * ARC_POINT_COUNT));

    for j in 0..teeth {
        let tooth_start = start_angle_offset + j as Real * tooth_spacing_angle;
        events.push((tooth_start + INVOLUTE_OFFSET, CurveType::RisingInvolute));
        events.push((
            tooth_start + involute_angle - INVOLUTE_OFFSET,
            CurveType::RisingInvolute,
        ));
    }

    let tip = math::linspace(
        ARC_POINT_COUNT,
        start_angle_offset + involute_angle,
        start_angle_offset + involute_angle + tip_angle,
    );
    for j in 0..teeth {
        for angle in &tip {
            events.push((
                angle + j as Real * tooth_spacing_angle,
                CurveType::Addendum,
            ));
        }
    }

    for j in 0..teeth {
        let tooth_start = start_angle_offset + j as Real * tooth_spacing_angle;
        events.push((
            tooth_start + involute_angle + tip_angle + INVOLUTE_OFFSET,
            CurveType::ReturningInvolute,
        ));
        events.push((
            tooth_start + 2.0 * involute_angle + tip_angle - INVOLUTE_OFFSET,
            CurveType::ReturningInvolute,
        ));
    }

    let dwell = math::linspace(
        ARC_POINT_COUNT,
        start_angle_offset + 2.0 * involute_angle + tip_angle,
        start_angle_offset + tooth_spacing_angle,
    );
    for j in 0..teeth {
        for angle in &dwell {
            events.push((
                angle + j as Real * tooth_spacing_angle,
                CurveType::Dedendum,
            ));
        }
    }

    // Stable sort keeps numerically identical keys distinct.
    events.sort_by(|a, b| a.0.total_cmp(&b.0));
    events
}

/// Samples one involute flank between the dedendum and addendum circles,
/// in the gear's local frame with the flank root on the positive x-axis.
/// `inverted` mirrors the flank for the returning side.
fn generate_involute_profile(
    base_radius: Real,
    dedendum_radius: Real,
    addendum_radius: Real,
    inverted: bool,
) -> Result<Vec<Point2<Real>>, Error> {
    let direction = if inverted { -1.0 } else { 1.0 };

    let t_max = math::find_t_parameter(base_radius, addendum_radius)?;
    let t_min = if base_radius < dedendum_radius {
        math::find_t_parameter(base_radius, dedendum_radius)?
    } else {
        0.0
    };

    Ok(math::linspace(INVOLUTE_POINT_COUNT, t_min, t_max)
        .iter()
        .map(|&t| {
            let point = math::involute_point(base_radius, t);
            Point2::new(point.x, direction * point.y)
        })
        .collect())
}

/// Walks a sorted angle-event sequence and emits the closed tooth-profile
/// outline for one gear centered at `center`.
///
/// Arc events emit a single point on their circle; an involute boundary
/// emits the whole pre-computed flank when its predecessor is the
/// matching boundary of the same pair, and is skipped otherwise.
pub fn generate_gear_profile(
    base_radius: Real,
    dedendum_radius: Real,
    addendum_radius: Real,
    events: &[(Real, CurveType)],
    center: &Point2<Real>,
) -> Result<ProfilePath, Error> {
    if events.len() < 2 {
        return Err(Error::missing("angle event sequence"));
    }

    let rising_profile =
        generate_involute_profile(base_radius, dedendum_radius, addendum_radius, false)?;
    let returning_profile =
        generate_involute_profile(base_radius, dedendum_radius, addendum_radius, true)?;

    let mut samples: Vec<(Real, Point2<Real>)> = Vec::with_capacity(events.len());
    let (mut previous_theta, mut previous_type) = events[0];

    for &(theta, curve) in &events[1..] {
        match curve {
            CurveType::Dedendum => {
                let point =
                    math::translated(&math::cartesian(dedendum_radius, theta), center.x, center.y);
                samples.push((theta, point));
            },
            CurveType::Addendum => {
                let point =
                    math::translated(&math::cartesian(addendum_radius, theta), center.x, center.y);
                samples.push((theta, point));
            },
            CurveType::RisingInvolute => {
                if previous_type == CurveType::RisingInvolute {
                    // The flank root sits at the segment start angle.
                    for (key, point) in math::linspace(INVOLUTE_POINT_COUNT, previous_theta, theta)
                        .iter()
                        .zip(&rising_profile)
                    {
                        let placed = math::rotated_around(
                            &math::translated(point, center.x, center.y),
                            center,
                            previous_theta,
                        );
                        samples.push((*key, placed));
                    }
                }
            },
            CurveType::ReturningInvolute => {
                if previous_type == CurveType::ReturningInvolute {
                    // Mirrored flank, so the tip lands on the segment
                    // start: rotate by the end angle and reverse.
                    for (key, point) in math::linspace(INVOLUTE_POINT_COUNT, previous_theta, theta)
                        .iter()
                        .zip(returning_profile.iter().rev())
                    {
                        let placed = math::rotated_around(
                            &math::translated(point, center.x, center.y),
                            center,
                            theta,
                        );
                        samples.push((*key, placed));
                    }
                }
            },
        }
        previous_theta = theta;
        previous_type = curve;
    }

    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut coordinates: Vec<(Real, Real)> = samples
        .iter()
        .map(|(_, point)| (point.x, point.y))
        .collect();
    if let Some(&first) = coordinates.first() {
        coordinates.push(first);
    }

    Ok(ProfilePath::Polyline(LineString::from(coordinates)))
}

/// The five concentric characteristic circles of one gear, each with its
/// distinguishing stroke style.
pub fn generate_gear_circles_geometry(
    center: &Point2<Real>,
    characteristics: &GearCharacteristics,
) -> Vec<GearGeometry> {
    let circle = |diameter: Real| ProfilePath::Circle {
        center: *center,
        radius: diameter / 2.0,
    };

    vec![
        GearGeometry::new(
            circle(characteristics.dedendum_diameter),
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "0.75"),
            ],
        ),
        GearGeometry::new(
            circle(characteristics.base_diameter),
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "0.75"),
                PathAttribute::new("stroke-dasharray", "1 1"),
            ],
        ),
        GearGeometry::new(
            circle(characteristics.reference_diameter),
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "0.75"),
                PathAttribute::new("stroke-dasharray", "2 1"),
            ],
        ),
        GearGeometry::new(
            circle(characteristics.working_diameter),
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "1"),
            ],
        ),
        GearGeometry::new(
            circle(characteristics.addendum_diameter),
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "0.75"),
            ],
        ),
    ]
}

fn centerline_attributes() -> Vec<PathAttribute> {
    vec![
        PathAttribute::new("stroke", "black"),
        PathAttribute::new("stroke-width", "0.5"),
        PathAttribute::new("stroke-dasharray", "4 1 1 1"),
    ]
}

fn polyline(points: &[(Real, Real)]) -> ProfilePath {
    ProfilePath::Polyline(LineString::from(points.to_vec()))
}

/// Axis centerlines through both gear centers plus the line of action:
/// the pressure line runs through the action point tilted by the
/// operating pressure angle, between its tangency points on the two base
/// circles, each marked with a small filled circle.
///
/// Convention: the pinion drives counter-clockwise, so the line of action
/// leans toward positive y on the gear side.
fn generate_annotation_geometry(data: &MechanismResult) -> Vec<GearGeometry> {
    let margin = ANNOTATION_MARGIN_FACTOR * data.mechanism.module;
    let pinion_tip_radius = data.pinion.addendum_diameter / 2.0;
    let gear_tip_radius = data.gear.addendum_diameter / 2.0;
    let center_distance = data.mechanism.center_distance;

    let mut annotations = vec![
        // Line of centers.
        GearGeometry::new(
            polyline(&[
                (-pinion_tip_radius - margin, 0.0),
                (center_distance + gear_tip_radius + margin, 0.0),
            ]),
            centerline_attributes(),
        ),
        // Vertical centerline of each gear.
        GearGeometry::new(
            polyline(&[
                (0.0, -pinion_tip_radius - margin),
                (0.0, pinion_tip_radius + margin),
            ]),
            centerline_attributes(),
        ),
        GearGeometry::new(
            polyline(&[
                (center_distance, -gear_tip_radius - margin),
                (center_distance, gear_tip_radius + margin),
            ]),
            centerline_attributes(),
        ),
    ];

    let alpha_prime = math::radians(data.mechanism.operating_pressure_angle);
    let direction = Vector2::new(alpha_prime.sin(), alpha_prime.cos());
    let pinion_tangency =
        data.action_point - direction * (data.pinion.working_diameter / 2.0 * alpha_prime.sin());
    let gear_tangency =
        data.action_point + direction * (data.gear.working_diameter / 2.0 * alpha_prime.sin());

    annotations.push(GearGeometry::new(
        polyline(&[
            (pinion_tangency.x, pinion_tangency.y),
            (gear_tangency.x, gear_tangency.y),
        ]),
        vec![
            PathAttribute::new("stroke", "black"),
            PathAttribute::new("stroke-width", "0.75"),
        ],
    ));

    let marker_radius = MARKER_RADIUS_FACTOR * data.mechanism.module;
    for tangency in [pinion_tangency, gear_tangency] {
        annotations.push(GearGeometry::new(
            ProfilePath::Circle {
                center: tangency,
                radius: marker_radius,
            },
            vec![
                PathAttribute::new("stroke", "black"),
                PathAttribute::new("stroke-width", "0.5"),
                PathAttribute::new("fill", "black"),
            ],
        ));
    }

    annotations
}

fn profile_geometry(
    characteristics: &GearCharacteristics,
    center: &Point2<Real>,
    start_angle_offset: Real,
    name: &str,
    stroke: &str,
) -> Result<GearGeometry, Error> {
    let events = generate_angle_data(
        characteristics.teeth,
        math::involute(characteristics.tip_pressure_angle),
        characteristics.tooth_spacing_angle,
        characteristics.tip_tooth_angle,
        start_angle_offset,
    );

    let path = generate_gear_profile(
        characteristics.base_diameter / 2.0,
        characteristics.dedendum_diameter / 2.0,
        characteristics.addendum_diameter / 2.0,
        &events,
        center,
    )?;

    Ok(GearGeometry::named(
        name,
        path,
        vec![
            PathAttribute::new("stroke", stroke),
            PathAttribute::new("stroke-width", "1"),
        ],
    ))
}

/// Fills the geometry list of a solved [`MechanismResult`]: both gears'
/// characteristic circles and tooth profiles plus the axis/pressure-line
/// annotations. Fails with [`Error::MissingData`] when the input scalars
/// never came out of a successful solve.
pub fn generate_mechanism_path(data: MechanismResult) -> Result<MechanismResult, Error> {
    data.ensure_solved()?;

    let operating_angle = math::radians(data.mechanism.operating_pressure_angle);
    let meshing_phase = math::involute(operating_angle);

    let mut geometry = generate_gear_circles_geometry(&data.pinion_center, &data.pinion);
    geometry.extend(generate_gear_circles_geometry(&data.gear_center, &data.gear));

    geometry.push(profile_geometry(
        &data.pinion,
        &data.pinion_center,
        meshing_phase,
        "pinion",
        "orange",
    )?);

    // Half-turn phase less the base tooth width interlocks the gear's
    // gap with the pinion tooth at the nominal orientation.
    let gear_offset = FRAC_PI_2 - data.gear.base_tooth_angle + meshing_phase;
    geometry.push(profile_geometry(
        &data.gear,
        &data.gear_center,
        gear_offset,
        "gear",
        "red",
    )?);

    geometry.extend(generate_annotation_geometry(&data));

    Ok(MechanismResult { geometry, ..data })
}
