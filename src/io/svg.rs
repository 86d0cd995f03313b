//! SVG export for mechanism geometry.
//!
//! The target document is always passed explicitly — there is no
//! process-wide default drawing surface.

use crate::errors::Error;
use crate::float_types::Real;
use crate::mechanism::data::MechanismResult;
use crate::mechanism::geometry::{GearGeometry, ProfilePath};
use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

/// Extra room around the mechanism in the fitted viewBox, in modules.
const VIEWBOX_MARGIN_FACTOR: Real = 4.0;

fn path_data(path: &ProfilePath) -> Data {
    match path {
        ProfilePath::Circle { center, radius } => {
            // Two half-circle arcs; a single arc command cannot close on
            // its own start point.
            Data::new()
                .move_to((center.x + radius, center.y))
                .elliptical_arc_to((*radius, *radius, 0.0, 1.0, 0.0, center.x - radius, center.y))
                .elliptical_arc_to((*radius, *radius, 0.0, 1.0, 0.0, center.x + radius, center.y))
                .close()
        },
        ProfilePath::Polyline(line) => {
            let mut data = Data::new();
            let mut coordinates = line.coords();
            if let Some(first) = coordinates.next() {
                data = data.move_to((first.x, first.y));
            }
            for coordinate in coordinates {
                data = data.line_to((coordinate.x, coordinate.y));
            }
            if line.is_closed() {
                data = data.close();
            }
            data
        },
    }
}

/// Converts one geometry entry to an SVG `<path>` element, applying its
/// attributes over the stroke defaults.
pub fn to_path(geometry: &GearGeometry) -> Path {
    let mut path = Path::new()
        .set("d", path_data(&geometry.path))
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round");

    for attribute in &geometry.attributes {
        path = path.set(attribute.key.as_str(), attribute.value.as_str());
    }
    path
}

/// Appends every geometry entry to an existing document.
pub fn append_to(mut document: Document, geometry: &[GearGeometry]) -> Document {
    for entry in geometry {
        document = document.add(to_path(entry));
    }
    document
}

/// Builds a standalone document with a viewBox fitted around both gears.
/// Fails when the result carries no geometry (the profile generator has
/// not run).
pub fn document(result: &MechanismResult) -> Result<Document, Error> {
    if result.geometry.is_empty() {
        return Err(Error::missing("mechanism geometry"));
    }

    let margin = VIEWBOX_MARGIN_FACTOR * result.mechanism.module;
    let pinion_tip_radius = result.pinion.addendum_diameter / 2.0;
    let gear_tip_radius = result.gear.addendum_diameter / 2.0;
    let tallest = pinion_tip_radius.max(gear_tip_radius);

    let min_x = -pinion_tip_radius - margin;
    let max_x = result.mechanism.center_distance + gear_tip_radius + margin;
    let min_y = -tallest - margin;
    let max_y = tallest + margin;

    let canvas = Document::new().set("viewBox", (min_x, min_y, max_x - min_x, max_y - min_y));
    Ok(append_to(canvas, &result.geometry))
}
