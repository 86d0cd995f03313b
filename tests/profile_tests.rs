mod support;

use gearmesh::float_types::{Real, TAU};
use gearmesh::math::{involute, polar, radians};
use gearmesh::mechanism::profile::{
    generate_angle_data, generate_gear_circles_geometry, generate_gear_profile,
    generate_mechanism_path,
};
use gearmesh::{
    CurveType, Error, GearCharacteristics, GearCuttingParameters, MechanismData, MechanismResult,
    ProfilePath, solve,
};
use nalgebra::Point2;

fn pinion_events() -> Vec<(Real, CurveType)> {
    let result = support::solved_sample();
    generate_angle_data(
        result.pinion.teeth,
        involute(result.pinion.tip_pressure_angle),
        result.pinion.tooth_spacing_angle,
        result.pinion.tip_tooth_angle,
        involute(radians(result.mechanism.operating_pressure_angle)),
    )
}

#[test]
fn angle_data_census() {
    let events = pinion_events();
    let teeth = 13usize;
    assert_eq!(events.len(), teeth * 14);

    let count = |kind: CurveType| events.iter().filter(|(_, c)| *c == kind).count();
    assert_eq!(count(CurveType::RisingInvolute), 2 * teeth);
    assert_eq!(count(CurveType::ReturningInvolute), 2 * teeth);
    assert_eq!(count(CurveType::Addendum), 5 * teeth);
    assert_eq!(count(CurveType::Dedendum), 5 * teeth);
}

#[test]
fn angle_data_is_sorted_and_alternates() {
    let events = pinion_events();

    for pair in events.windows(2) {
        assert!(pair[0].0 <= pair[1].0, "events must be sorted by angle");
    }

    // Per tooth: rising pair, tip arc, returning pair, root arc.
    let template = [
        CurveType::RisingInvolute,
        CurveType::RisingInvolute,
        CurveType::Addendum,
        CurveType::Addendum,
        CurveType::Addendum,
        CurveType::Addendum,
        CurveType::Addendum,
        CurveType::ReturningInvolute,
        CurveType::ReturningInvolute,
        CurveType::Dedendum,
        CurveType::Dedendum,
        CurveType::Dedendum,
        CurveType::Dedendum,
        CurveType::Dedendum,
    ];
    for (index, (_, curve)) in events.iter().enumerate() {
        assert_eq!(*curve, template[index % template.len()], "at event {index}");
    }

    // The whole sequence spans one revolution.
    let span = events.last().unwrap().0 - events.first().unwrap().0;
    assert!(span < TAU && span > TAU * 0.95);
}

#[test]
fn gear_profile_is_closed_and_stays_between_its_circles() {
    let result = support::solved_sample();
    let events = pinion_events();
    let center = Point2::new(0.0, 0.0);

    let path = generate_gear_profile(
        result.pinion.base_diameter / 2.0,
        result.pinion.dedendum_diameter / 2.0,
        result.pinion.addendum_diameter / 2.0,
        &events,
        &center,
    )
    .unwrap();

    assert!(path.is_closed());
    assert!(path.segment_count() > 0);

    let ProfilePath::Polyline(line) = &path else {
        panic!("tooth profile must be a polyline");
    };
    let dedendum_radius = result.pinion.dedendum_diameter / 2.0;
    let addendum_radius = result.pinion.addendum_diameter / 2.0;
    for coordinate in line.coords() {
        let (rho, _) = polar(&Point2::new(coordinate.x, coordinate.y));
        assert!(
            rho >= dedendum_radius - 1e-6 && rho <= addendum_radius + 1e-6,
            "profile point radius {rho} escapes [{dedendum_radius}, {addendum_radius}]"
        );
    }
}

#[test]
fn gear_circles_carry_distinct_stroke_styles() {
    let result = support::solved_sample();
    let circles = generate_gear_circles_geometry(&Point2::new(0.0, 0.0), &result.pinion);
    assert_eq!(circles.len(), 5);

    let styles: Vec<String> = circles
        .iter()
        .map(|geometry| {
            geometry
                .attributes
                .iter()
                .map(|attribute| format!("{}={};", attribute.key, attribute.value))
                .collect()
        })
        .collect();
    // Dedendum and addendum circles share a style; the rest are distinct.
    assert_eq!(styles[0], styles[4]);
    assert_ne!(styles[0], styles[1]);
    assert_ne!(styles[1], styles[2]);
    assert_ne!(styles[2], styles[3]);

    for (circle, expected_diameter) in circles.iter().zip([
        result.pinion.dedendum_diameter,
        result.pinion.base_diameter,
        result.pinion.reference_diameter,
        result.pinion.working_diameter,
        result.pinion.addendum_diameter,
    ]) {
        let ProfilePath::Circle { radius, .. } = circle.path else {
            panic!("expected circle geometry");
        };
        assert!(support::approx_eq(radius * 2.0, expected_diameter, 1e-9));
    }
}

#[test]
fn mechanism_path_names_both_profiles() {
    let result = generate_mechanism_path(support::solved_sample()).unwrap();

    // 10 circles, 2 profiles, 3 centerlines, the pressure line, 2 markers.
    assert_eq!(result.geometry.len(), 18);

    for name in ["pinion", "gear"] {
        let profile = result
            .geometry
            .iter()
            .find(|geometry| geometry.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("missing {name} profile"));
        assert!(profile.path.is_closed(), "{name} profile must close");
        assert!(profile.path.segment_count() > 0);
    }

    let unnamed = result
        .geometry
        .iter()
        .filter(|geometry| geometry.name.is_none())
        .count();
    assert_eq!(unnamed, 16);
}

#[test]
fn mechanism_path_requires_solved_scalars() {
    let zeroed_gear = GearCharacteristics {
        teeth: 0,
        shift_coefficient: 0.0,
        tooth_spacing_angle: 0.0,
        dedendum_diameter: 0.0,
        base_diameter: 0.0,
        reference_diameter: 0.0,
        working_diameter: 0.0,
        addendum_diameter: 0.0,
        reference_thickness: 0.0,
        working_thickness: 0.0,
        base_thickness: 0.0,
        tip_thickness: 0.0,
        reference_tooth_angle: 0.0,
        working_tooth_angle: 0.0,
        base_tooth_angle: 0.0,
        tip_tooth_angle: 0.0,
        tip_pressure_angle: 0.0,
    };
    let unsolved = MechanismResult {
        mechanism: MechanismData {
            module: 0.0,
            pressure_angle: 0.0,
            operating_pressure_angle: 0.0,
            center_distance: 0.0,
            center_distance_coefficient: 0.0,
            transmission_ratio: 0.0,
            contact_ratio: 0.0,
            pitch: 0.0,
            fillet_radius: 0.0,
            undercut_minimum_teeth: 0.0,
        },
        pinion: zeroed_gear,
        gear: zeroed_gear,
        pinion_center: Point2::origin(),
        action_point: Point2::origin(),
        gear_center: Point2::origin(),
        geometry: Vec::new(),
    };

    assert!(matches!(
        generate_mechanism_path(unsolved),
        Err(Error::MissingData { .. })
    ));
}

#[test]
fn meshing_phase_differs_between_the_gears() {
    // Same cutting parameters, symmetric pair: the two profiles still
    // start at different phases so the teeth interlock.
    let result =
        generate_mechanism_path(solve(&GearCuttingParameters::new(2.0, 21, 21, 0.0, 0.0)).unwrap())
            .unwrap();

    let first_point = |name: &str| -> (Real, Real) {
        let geometry = result
            .geometry
            .iter()
            .find(|geometry| geometry.name.as_deref() == Some(name))
            .unwrap();
        let ProfilePath::Polyline(line) = &geometry.path else {
            panic!("profile must be a polyline");
        };
        let first = line.coords().next().unwrap();
        (first.x, first.y)
    };

    let pinion_start = first_point("pinion");
    let gear_start = first_point("gear");
    let gear_local = (
        gear_start.0 - result.mechanism.center_distance,
        gear_start.1,
    );
    assert!(
        !(support::approx_eq(pinion_start.0, gear_local.0, 1e-6)
            && support::approx_eq(pinion_start.1, gear_local.1, 1e-6)),
        "gear profile must be phase-shifted against the pinion"
    );
}
