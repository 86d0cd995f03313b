//! Renderable path geometry produced by the profile generator.

use crate::float_types::Real;
use geo::LineString;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A single rendering attribute, e.g. `stroke: orange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAttribute {
    pub key: String,
    pub value: String,
}

impl PathAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The shape of one geometry entry: either a full circle or a sampled
/// polyline in Cartesian coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfilePath {
    /// Full circle, drawn by the renderer as a pair of arcs.
    Circle {
        center: Point2<Real>,
        radius: Real,
    },
    /// Straight-segment chain. Closed profiles repeat their first point
    /// at the end.
    Polyline(LineString<Real>),
}

impl ProfilePath {
    /// Number of drawable segments in this path.
    pub fn segment_count(&self) -> usize {
        match self {
            ProfilePath::Circle { .. } => 2,
            ProfilePath::Polyline(line) => line.0.len().saturating_sub(1),
        }
    }

    /// Whether the path returns to its starting point.
    pub fn is_closed(&self) -> bool {
        match self {
            ProfilePath::Circle { .. } => true,
            ProfilePath::Polyline(line) => line.is_closed(),
        }
    }
}

/// A named 2D path plus its rendering attributes. `name` tags semantic
/// role (`"pinion"`, `"gear"`); circle and annotation geometry is
/// untagged.
#[derive(Debug, Clone, PartialEq)]
pub struct GearGeometry {
    pub name: Option<String>,
    pub path: ProfilePath,
    pub attributes: Vec<PathAttribute>,
}

impl GearGeometry {
    pub fn new(path: ProfilePath, attributes: Vec<PathAttribute>) -> Self {
        Self {
            name: None,
            path,
            attributes,
        }
    }

    pub fn named(name: impl Into<String>, path: ProfilePath, attributes: Vec<PathAttribute>) -> Self {
        Self {
            name: Some(name.into()),
            path,
            attributes,
        }
    }
}
