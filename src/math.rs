//! Shared math primitives: involute functions, polar conversions, point
//! transforms, and uniform sampling.

use crate::errors::Error;
use crate::float_types::{PI, Real, tolerance};
use nalgebra::Point2;

/// Iteration bound for the inverse-involute fixed point. The iteration
/// contracts by `cos²α` per step, so shallow pressure angles take
/// thousands of steps to reach the tolerance.
const MAX_FIXED_POINT_STEPS: usize = 10_000;
/// Linear march step used to bracket an involute-radius root.
const MARCH_STEP: Real = 0.1;
/// Iteration bound for the bracketing march.
const MAX_MARCH_STEPS: usize = 10_000;
/// Iteration bound for the bisection refinement.
const MAX_BISECTION_STEPS: usize = 200;

/// Converts degrees to radians.
pub fn radians(angle: Real) -> Real {
    (PI / 180.0) * angle
}

/// Converts radians to degrees.
pub fn degrees(angle: Real) -> Real {
    (180.0 / PI) * angle
}

/// The involute function `inv(α) = tan(α) − α`.
pub fn involute(angle: Real) -> Real {
    angle.tan() - angle
}

/// Recovers the angle whose involute equals `value`.
///
/// Fixed-point iteration `α ← atan(α + value)` starting from zero,
/// terminated when the step falls below the crate tolerance.
pub fn inverse_involute(value: Real) -> Result<Real, Error> {
    let tol = tolerance();
    let mut angle: Real = 0.0;

    for _ in 0..MAX_FIXED_POINT_STEPS {
        let next = (angle + value).atan();
        if (next - angle).abs() < tol {
            return Ok(next);
        }
        angle = next;
    }

    Err(Error::Convergence {
        routine: "inverse_involute",
        iterations: MAX_FIXED_POINT_STEPS,
    })
}

/// A point of the involute unwound from a circle of `base_radius`,
/// at curve parameter `t`.
pub fn involute_point(base_radius: Real, t: Real) -> Point2<Real> {
    Point2::new(
        base_radius * (t.cos() + t * t.sin()),
        base_radius * (t.sin() - t * t.cos()),
    )
}

/// Finds the involute parameter `t` at which the curve unwound from
/// `base_radius` crosses `target_radius`.
///
/// Phase one marches outward with a fixed step until the radius exceeds
/// the target, phase two bisects the bracket down to the crate tolerance.
/// The involute is undefined below its base circle, so
/// `target_radius < base_radius` fails immediately.
pub fn find_t_parameter(base_radius: Real, target_radius: Real) -> Result<Real, Error> {
    if target_radius < base_radius {
        return Err(Error::Convergence {
            routine: "find_t_parameter",
            iterations: 0,
        });
    }

    let tol = tolerance();
    let rho_at = |t: Real| polar(&involute_point(base_radius, t)).0;

    let mut t_previous: Real = 0.0;
    let mut t_next: Real = 0.0;
    let mut steps = 0;
    while rho_at(t_next) <= target_radius {
        t_previous = t_next;
        t_next += MARCH_STEP;
        steps += 1;
        if steps > MAX_MARCH_STEPS {
            return Err(Error::Convergence {
                routine: "find_t_parameter",
                iterations: MAX_MARCH_STEPS,
            });
        }
    }

    // Bisection method
    for _ in 0..MAX_BISECTION_STEPS {
        let t = (t_next + t_previous) / 2.0;
        let diff = target_radius - rho_at(t);
        if diff.abs() < tol {
            return Ok(t);
        } else if diff < 0.0 {
            t_next = t;
        } else {
            t_previous = t;
        }
    }

    Err(Error::Convergence {
        routine: "find_t_parameter",
        iterations: MAX_BISECTION_STEPS,
    })
}

/// Cartesian point from polar coordinates.
pub fn cartesian(rho: Real, phi: Real) -> Point2<Real> {
    Point2::new(rho * phi.cos(), rho * phi.sin())
}

/// Polar `(rho, phi)` of a Cartesian point.
pub fn polar(point: &Point2<Real>) -> (Real, Real) {
    (point.coords.norm(), point.y.atan2(point.x))
}

/// Returns `point` shifted by the given offsets.
pub fn translated(point: &Point2<Real>, x_offset: Real, y_offset: Real) -> Point2<Real> {
    Point2::new(point.x + x_offset, point.y + y_offset)
}

/// Rotates `point` counter-clockwise by `angle` (radians) around `origin`.
pub fn rotated_around(point: &Point2<Real>, origin: &Point2<Real>, angle: Real) -> Point2<Real> {
    let (sin, cos) = angle.sin_cos();
    Point2::new(
        cos * (point.x - origin.x) - sin * (point.y - origin.y) + origin.x,
        sin * (point.x - origin.x) + cos * (point.y - origin.y) + origin.y,
    )
}

/// `count` uniformly spaced values from `start` to `stop` inclusive.
///
/// Both endpoints are exact. `linspace(1, a, b)` is `[a]`,
/// `linspace(0, a, b)` is empty.
pub fn linspace(count: usize, start: Real, stop: Real) -> Vec<Real> {
    if count < 2 {
        return if count == 1 { vec![start] } else { Vec::new() };
    }

    let last = (count - 1) as Real;
    (0..count)
        .map(|i| (i as Real * stop + (last - i as Real) * start) / last)
        .collect()
}
