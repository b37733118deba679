//! Fields of Helmholtz and anti-Helmholtz coil pairs.
//!
//! Two coaxial loops of radius R sit at z = -R/2 and z = +R/2, so the pair is
//! centered on z = 0. In the Helmholtz arrangement both carry the same current
//! and their fields add; in the anti-Helmholtz arrangement the currents are
//! opposed and the field of the loop at z = +R/2 is subtracted.
use crate::field_scale;
use crate::physics::circular_loop::{field_loop_brho, field_loop_bz};

/// Dimensionless on-axis field of a Helmholtz pair,
/// $R^3 / (R^2 + (z + R/2)^2)^{3/2} + R^3 / (R^2 + (z - R/2)^2)^{3/2}$.
///
/// Equal to $2 (4/5)^{3/2} \approx 1.431$ at the midpoint, independent of R.
pub fn field_helmholtz_on_axis(z: f64, r: f64) -> f64 {
    let r3 = r.powi(3);
    let zp = z + 0.5 * r;
    let zm = z - 0.5 * r;
    r3 / r.mul_add(r, zp * zp).powf(1.5) + r3 / r.mul_add(r, zm * zm).powf(1.5)
}

/// Dimensionless on-axis field of an anti-Helmholtz pair,
/// $R^3 / (R^2 + (z + R/2)^2)^{3/2} - R^3 / (R^2 + (z - R/2)^2)^{3/2}$.
///
/// Odd in z and zero at the midpoint.
pub fn field_anti_helmholtz_on_axis(z: f64, r: f64) -> f64 {
    let r3 = r.powi(3);
    let zp = z + 0.5 * r;
    let zm = z - 0.5 * r;
    r3 / r.mul_add(r, zp * zp).powf(1.5) - r3 / r.mul_add(r, zm * zm).powf(1.5)
}

/// Dimensionless axial field Bz of a Helmholtz pair at an off-axis point.
///
/// # Arguments
///
/// * `z`:   (m) axial coordinate of the observation point, relative to the midpoint of the pair
/// * `rho`: (m) radial coordinate of the observation point
/// * `r`:   (m) loop radius and loop separation
pub fn field_helmholtz_bz(z: f64, rho: f64, r: f64) -> f64 {
    field_loop_bz(z + 0.5 * r, rho, r) + field_loop_bz(z - 0.5 * r, rho, r)
}

/// Dimensionless radial field Bρ of a Helmholtz pair at an off-axis point.
/// Arguments as for [`field_helmholtz_bz`].
pub fn field_helmholtz_brho(z: f64, rho: f64, r: f64) -> f64 {
    field_loop_brho(z + 0.5 * r, rho, r) + field_loop_brho(z - 0.5 * r, rho, r)
}

/// Dimensionless axial field Bz of an anti-Helmholtz pair at an off-axis point.
/// Arguments as for [`field_helmholtz_bz`].
pub fn field_anti_helmholtz_bz(z: f64, rho: f64, r: f64) -> f64 {
    field_loop_bz(z + 0.5 * r, rho, r) - field_loop_bz(z - 0.5 * r, rho, r)
}

/// Dimensionless radial field Bρ of an anti-Helmholtz pair at an off-axis point.
/// Arguments as for [`field_helmholtz_bz`].
pub fn field_anti_helmholtz_brho(z: f64, rho: f64, r: f64) -> f64 {
    field_loop_brho(z + 0.5 * r, rho, r) - field_loop_brho(z - 0.5 * r, rho, r)
}

/// (T) On-axis flux density of a Helmholtz pair with loops of radius `r` (m)
/// each carrying `current` (A).
pub fn magnetic_field_helmholtz_on_axis(z: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_helmholtz_on_axis(z, r)
}

/// (T) Axial flux density Bz of a Helmholtz pair.
pub fn magnetic_field_helmholtz_bz(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_helmholtz_bz(z, rho, r)
}

/// (T) Radial flux density Bρ of a Helmholtz pair.
pub fn magnetic_field_helmholtz_brho(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_helmholtz_brho(z, rho, r)
}

/// (T) On-axis flux density of an anti-Helmholtz pair with loops of radius `r` (m)
/// carrying `current` (A) in opposite senses.
pub fn magnetic_field_anti_helmholtz_on_axis(z: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_anti_helmholtz_on_axis(z, r)
}

/// (T) Axial flux density Bz of an anti-Helmholtz pair.
pub fn magnetic_field_anti_helmholtz_bz(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_anti_helmholtz_bz(z, rho, r)
}

/// (T) Radial flux density Bρ of an anti-Helmholtz pair.
pub fn magnetic_field_anti_helmholtz_brho(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_anti_helmholtz_brho(z, rho, r)
}
