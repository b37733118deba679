//! Analytic fields of a single circular current loop.
//!
//! The loop lies in the z = 0 plane, centered on the axis. The `field_*` functions
//! are normalized so that the field at the center of the loop is 1; the
//! `magnetic_field_*` functions scale by [`field_scale`](crate::field_scale).
use core::f64::consts::PI;

use crate::field_scale;
use crate::math::{ellipe, ellipk};

/// Geometric terms shared by the off-axis Bz and Bρ formulas.
///
/// Returns `(k2, q, p)` with $k^2 = 4R\rho / q$, $q = (R+\rho)^2 + z^2$
/// and $p = (R-\rho)^2 + z^2$.
#[inline]
fn loop_geometry(z: f64, rho: f64, r: f64) -> (f64, f64, f64) {
    let z2 = z * z; // [m^2]
    let rpr = r + rho; // [m]
    let rmr = r - rho; // [m]
    let q = rpr.mul_add(rpr, z2); // [m^2]
    let p = rmr.mul_add(rmr, z2); // [m^2]
    let k2 = 4.0 * r * rho / q; // [nondim]

    (k2, q, p)
}

/// Dimensionless axial field Bz of a circular loop at an off-axis point.
///
/// # Arguments
///
/// * `z`:   (m) axial coordinate of the observation point, relative to the loop plane
/// * `rho`: (m) radial coordinate of the observation point
/// * `r`:   (m) loop radius, [`DEFAULT_RADIUS`](crate::DEFAULT_RADIUS) for normalized units
///
/// # Commentary
///
/// $$
/// B_z = \frac{R}{\pi \sqrt{(R+\rho)^2 + z^2}}
///       \left[ K(k^2) + E(k^2) \frac{R^2 - \rho^2 - z^2}{(R-\rho)^2 + z^2} \right]
/// $$
///
/// with the elliptic integrals taking the parameter $k^2 = 4R\rho / ((R+\rho)^2 + z^2)$.
///
/// On the wire itself ($\rho = R$, $z = 0$) the parameter is exactly 1 and the
/// result is non-finite (NaN or infinite); the physical field diverges there.
///
/// # References
///
///   \[1\] J. C. Simpson, J. E. Lane, C. D. Immer, R. C. Youngquist, and T. Steinrock,
///         “Simple Analytic Expressions for the Magnetic Field of a Circular Current Loop,”
///         Jan. 01, 2001. Accessed: Sep. 06, 2022. [Online]. Available: <https://ntrs.nasa.gov/citations/20010038494>
///
///   \[2\] Eric Dennyson, "Magnet Formulas". Available: <https://tiggerntatie.github.io/emagnet-py/offaxis/off_axis_loop.html>
pub fn field_loop_bz(z: f64, rho: f64, r: f64) -> f64 {
    let (k2, q, p) = loop_geometry(z, rho, r);
    let k = ellipk(k2);
    let e = ellipe(k2);

    let numer = r.mul_add(r, -rho.mul_add(rho, z * z)); // R^2 - rho^2 - z^2
    r / (PI * q.sqrt()) * (e / p).mul_add(numer, k)
}

/// Dimensionless radial field Bρ of a circular loop at an off-axis point.
///
/// Returns exactly 0.0 when `rho` is 0.0. The closed form has a removable
/// $1/\rho$ singularity on the axis, where the radial field vanishes by symmetry.
///
/// # Commentary
///
/// $$
/// B_\rho = \frac{R z}{\pi \rho \sqrt{(R+\rho)^2 + z^2}}
///          \left[ -K(k^2) + E(k^2) \frac{R^2 + \rho^2 + z^2}{(R-\rho)^2 + z^2} \right]
/// $$
///
/// See [`field_loop_bz`] for arguments and references.
pub fn field_loop_brho(z: f64, rho: f64, r: f64) -> f64 {
    if rho == 0.0 {
        return 0.0;
    }

    let (k2, q, p) = loop_geometry(z, rho, r);
    let k = ellipk(k2);
    let e = ellipe(k2);

    let numer = r.mul_add(r, rho.mul_add(rho, z * z)); // R^2 + rho^2 + z^2
    (r * z) / (PI * rho * q.sqrt()) * (e / p).mul_add(numer, -k)
}

/// Dimensionless axial field of a circular loop on its axis, $R^3 / (R^2 + z^2)^{3/2}$.
///
/// Only valid at $\rho = 0$; needs no elliptic integrals.
#[inline]
pub fn field_loop_on_axis(z: f64, r: f64) -> f64 {
    r.powi(3) / r.mul_add(r, z * z).powf(1.5)
}

/// (T) Axial flux density Bz of a loop of radius `r` (m) carrying `current` (A).
pub fn magnetic_field_loop_bz(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_loop_bz(z, rho, r)
}

/// (T) Radial flux density Bρ of a loop of radius `r` (m) carrying `current` (A).
pub fn magnetic_field_loop_brho(z: f64, rho: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_loop_brho(z, rho, r)
}

/// (T) On-axis flux density of a loop of radius `r` (m) carrying `current` (A).
pub fn magnetic_field_loop_on_axis(z: f64, r: f64, current: f64) -> f64 {
    field_scale(r, current) * field_loop_on_axis(z, r)
}
