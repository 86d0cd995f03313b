//! Pure rotation timing for animation consumers.
//!
//! The renderer owns the clock; this type only maps elapsed time to a
//! pair of rotation angles. Pause captures the current angles as the new
//! offsets, so resuming with a restarted clock continues seamlessly —
//! the paused position is never recovered from rendered output.

use crate::errors::Error;
use crate::float_types::Real;

/// Degrees per second of the pinion for a given revolution period.
const FULL_TURN_DEG: Real = 360.0;

/// Maps elapsed time to the rotation angles of a meshing pair. The
/// pinion turns counter-clockwise; the gear turns back at `1/i` of the
/// pinion rate.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRotation {
    transmission_ratio: Real,
    /// Seconds per pinion revolution.
    period: Real,
    pinion_offset: Real,
    gear_offset: Real,
    paused: bool,
}

impl MeshRotation {
    pub fn new(transmission_ratio: Real, period_secs: Real) -> Result<Self, Error> {
        if !transmission_ratio.is_finite() || transmission_ratio <= 0.0 {
            return Err(Error::invalid(format!(
                "transmission ratio must be positive, got {transmission_ratio}"
            )));
        }
        if !period_secs.is_finite() || period_secs <= 0.0 {
            return Err(Error::invalid(format!(
                "rotation period must be positive, got {period_secs}"
            )));
        }
        Ok(Self {
            transmission_ratio,
            period: period_secs,
            pinion_offset: 0.0,
            gear_offset: 0.0,
            paused: false,
        })
    }

    /// Rotation angles `(pinion, gear)` in degrees after `elapsed_secs`
    /// on the caller's clock. While paused the captured angles are
    /// returned unchanged.
    pub fn angles_at(&self, elapsed_secs: Real) -> (Real, Real) {
        if self.paused {
            return (self.pinion_offset, self.gear_offset);
        }
        let turn = FULL_TURN_DEG * elapsed_secs / self.period;
        (
            (self.pinion_offset + turn).rem_euclid(FULL_TURN_DEG),
            (self.gear_offset - turn / self.transmission_ratio).rem_euclid(FULL_TURN_DEG),
        )
    }

    /// Freezes the pair at its current position. The angles at
    /// `elapsed_secs` become the new offsets.
    pub fn pause_at(&mut self, elapsed_secs: Real) {
        let (pinion, gear) = self.angles_at(elapsed_secs);
        self.pinion_offset = pinion;
        self.gear_offset = gear;
        self.paused = true;
    }

    /// Continues from the captured offsets. The caller must restart its
    /// clock so the next `angles_at` call sees elapsed time near zero.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
