//! Magnetic fields of circular current loops and of Helmholtz and anti-Helmholtz
//! loop pairs.
//!
//! Functions named `field_*` return the field without the factor $\mu_0 I / (2R)$,
//! so a unit loop has a field of exactly 1 at its center. Functions named
//! `magnetic_field_*` multiply by that factor and return (T).

pub mod math;
pub mod physics;

/// (H/m) vacuum magnetic permeability, $4\pi \times 10^{-7}$.
///
/// Uses the pre-2019 SI defined value rather than the CODATA measurement.
pub const MU_0: f64 = 4e-7 * core::f64::consts::PI; // [H/m]

/// (nondim) Loop radius used for normalized-unit evaluation.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Number of straight segments used by the discretized loop by default.
pub const DEFAULT_SEGMENTS: usize = 360;

/// (T) Scale factor $\mu_0 I / (2R)$ between the dimensionless `field_*` results
/// and the flux density of a loop of radius `r` (m) carrying `current` (A).
#[inline]
pub fn field_scale(r: f64, current: f64) -> f64 {
    MU_0 * current / (2.0 * r)
}
