//! Biot-Savart approximation of loop fields by straight current segments.
use core::f64::consts::{FRAC_1_PI, PI};
use std::num::NonZeroUsize;

use nalgebra::Vector3;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};
use tracing::{debug, trace};

use crate::field_scale;
use crate::math::{cross3, dot3};

/// Factor taking $\oint d\vec{l} \times \vec{s} / |\vec{s}|^3$ to units of $\mu_0 I / (2R)$ for a unit loop.
const NORMALIZATION: f64 = 0.5 * FRAC_1_PI;

/// Start point and length delta of segment `i` of the unit loop divided into `n`
/// straight segments.
///
/// Segment `i` runs from angle $2\pi i / n$ to $2\pi (i + 1) / n$, counter-clockwise
/// seen from +z, so every vertex lies on the circle.
#[inline]
fn loop_segment(i: usize, n: usize) -> ((f64, f64, f64), (f64, f64, f64)) {
    let dtheta = 2.0 * PI / n as f64; // [rad]
    let theta0 = i as f64 * dtheta;
    let theta1 = theta0 + dtheta;
    let (sin0, cos0) = theta0.sin_cos();
    let (sin1, cos1) = theta1.sin_cos();

    let start = (cos0, sin0, 0.0);
    let dl = (cos1 - cos0, sin1 - sin0, 0.0);

    (start, dl)
}

/// $d\vec{l} \times \vec{s} / |\vec{s}|^3$ for one segment, with $\vec{s}$ measured
/// from the segment's start point to the observation point.
#[inline]
fn segment_contribution(
    p: (f64, f64, f64),
    start: (f64, f64, f64),
    dl: (f64, f64, f64),
) -> (f64, f64, f64) {
    let rx = p.0 - start.0;
    let ry = p.1 - start.1;
    let rz = p.2 - start.2;

    let sumsq = dot3(rx, ry, rz, rx, ry, rz);
    let rnorm3_inv = sumsq.powf(-1.5);

    let (cx, cy, cz) = cross3(dl.0, dl.1, dl.2, rx, ry, rz);

    (cx * rnorm3_inv, cy * rnorm3_inv, cz * rnorm3_inv)
}

/// Dimensionless field of a unit circular loop approximated by `n` straight segments.
///
/// # Arguments
///
/// * `z`:   axial coordinate of the observation point, in units of the loop radius
/// * `rho`: radial coordinate of the observation point, in units of the loop radius
/// * `n`:   number of segments, [`DEFAULT_SEGMENTS`](crate::DEFAULT_SEGMENTS) by default
///
/// Returns the field as $(f_\rho, f_\phi, f_z)$, normalized like
/// [`field_loop_bz`](super::circular_loop::field_loop_bz) so that the z-component
/// converges on the analytic result as `n` grows.
///
/// # Commentary
///
/// Each segment contributes $d\vec{l} \times \vec{s} / |\vec{s}|^3$ with $\vec{s}$
/// taken from the segment's start vertex, and the sum is divided by $2\pi$.
/// Evaluating at the start vertex rather than the midpoint rotates the result
/// slightly about the axis, which shows up as a small nonzero $f_\phi$.
///
/// A point exactly on the loop (`z == 0` and `|rho| == 1`) returns the zero vector.
/// The true field is singular there; zero is a placeholder, not a physical value.
/// `n == 0` also gives the zero vector.
pub fn field_loop_discrete(z: f64, rho: f64, n: usize) -> Vector3<f64> {
    if z == 0.0 && rho.abs() == 1.0 {
        trace!(z, rho, "observation point on the loop; returning zero field");
        return Vector3::zeros();
    }

    let p = (rho, 0.0, z);
    let (mut fx, mut fy, mut fz) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let (start, dl) = loop_segment(i, n);
        let (cx, cy, cz) = segment_contribution(p, start, dl);
        fx += cx;
        fy += cy;
        fz += cz;
    }

    NORMALIZATION * Vector3::new(fx, fy, fz)
}

/// (T) Discretized flux density $(B_\rho, B_\phi, B_z)$ of a loop of radius `r` (m)
/// carrying `current` (A), approximated by `n` straight segments.
///
/// Evaluates [`field_loop_discrete`] at $(z/R, \rho/R)$ and scales by
/// [`field_scale`](crate::field_scale).
pub fn magnetic_field_loop_discrete(
    z: f64,
    rho: f64,
    r: f64,
    current: f64,
    n: usize,
) -> Vector3<f64> {
    field_scale(r, current) * field_loop_discrete(z / r, rho / r, n)
}

/// Dimensionless discretized unit-loop field at many observation points.
/// This variant of the function is parallelized over chunks of observation points.
///
/// # Arguments
///
/// * `zprime`: axial coord of each observation point, in units of the loop radius, length `m`
/// * `rprime`: radial coord of each observation point, in units of the loop radius, length `m`
/// * `n`:      number of segments
/// * `out`:    $f_\rho$, $f_\phi$, $f_z$ at observation points, each length `m`, overwritten
///
/// Matches [`field_loop_discrete`] point by point, including the zero vector on the loop.
pub fn field_loop_discrete_par(
    zprime: &[f64],
    rprime: &[f64],
    n: usize,
    out: (&mut [f64], &mut [f64], &mut [f64]),
) -> Result<(), &'static str> {
    let m = zprime.len();
    let (out_rho, out_phi, out_z) = out;
    if rprime.len() != m || out_rho.len() != m || out_phi.len() != m || out_z.len() != m {
        return Err("Length mismatch");
    }

    // Chunk inputs
    let ncores = std::thread::available_parallelism()
        .unwrap_or(NonZeroUsize::MIN)
        .get();

    let chunk = (m / ncores).max(1);
    debug!(npoints = m, nsegments = n, chunk, "evaluating discretized loop field in parallel");

    let zc = zprime.par_chunks(chunk);
    let rc = rprime.par_chunks(chunk);
    let frhoc = out_rho.par_chunks_mut(chunk);
    let fphic = out_phi.par_chunks_mut(chunk);
    let fzc = out_z.par_chunks_mut(chunk);

    // Run calcs
    frhoc
        .zip(fphic.zip(fzc))
        .zip(zc.zip(rc))
        .for_each(|((frho, (fphi, fz)), (z, rho))| {
            for i in 0..z.len() {
                let f = field_loop_discrete(z[i], rho[i], n);
                (frho[i], fphi[i], fz[i]) = (f.x, f.y, f.z);
            }
        });

    Ok(())
}
