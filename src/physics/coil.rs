//! Batched evaluation of loop and loop-pair fields over many observation points.
use std::fmt;
use std::num::NonZeroUsize;

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};
use tracing::debug;

use crate::field_scale;
use crate::physics::circular_loop::{field_loop_brho, field_loop_bz, field_loop_on_axis};
use crate::physics::helmholtz::{
    field_anti_helmholtz_brho, field_anti_helmholtz_bz, field_anti_helmholtz_on_axis,
    field_helmholtz_brho, field_helmholtz_bz, field_helmholtz_on_axis,
};

/// Arrangement of circular loops sharing one axis, all of radius R.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Coil {
    /// A single loop in the z = 0 plane.
    Loop,
    /// Two loops at z = ±R/2 carrying the same current.
    Helmholtz,
    /// Two loops at z = ±R/2 carrying opposed currents.
    AntiHelmholtz,
}

impl Coil {
    /// Dimensionless axial field at `(z, rho)` for loops of radius `r`.
    #[inline]
    pub fn field_bz(&self, z: f64, rho: f64, r: f64) -> f64 {
        match self {
            Coil::Loop => field_loop_bz(z, rho, r),
            Coil::Helmholtz => field_helmholtz_bz(z, rho, r),
            Coil::AntiHelmholtz => field_anti_helmholtz_bz(z, rho, r),
        }
    }

    /// Dimensionless radial field at `(z, rho)` for loops of radius `r`.
    #[inline]
    pub fn field_brho(&self, z: f64, rho: f64, r: f64) -> f64 {
        match self {
            Coil::Loop => field_loop_brho(z, rho, r),
            Coil::Helmholtz => field_helmholtz_brho(z, rho, r),
            Coil::AntiHelmholtz => field_anti_helmholtz_brho(z, rho, r),
        }
    }

    /// Dimensionless on-axis field at `z` for loops of radius `r`.
    #[inline]
    pub fn field_on_axis(&self, z: f64, r: f64) -> f64 {
        match self {
            Coil::Loop => field_loop_on_axis(z, r),
            Coil::Helmholtz => field_helmholtz_on_axis(z, r),
            Coil::AntiHelmholtz => field_anti_helmholtz_on_axis(z, r),
        }
    }
}

impl fmt::Display for Coil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coil::Loop => "loop",
            Coil::Helmholtz => "helmholtz",
            Coil::AntiHelmholtz => "anti-helmholtz",
        };
        f.write_str(name)
    }
}

/// Off-axis Bz, Bρ of a coil at many observation points.
/// This variant of the function is parallelized over chunks of observation points.
///
/// # Arguments
///
/// * `coil`:     loop arrangement
/// * `r`:        (m) loop radius
/// * `current`:  (A) current in each loop
/// * `zprime`:   (m) z-coord of each observation point, length `n`
/// * `rprime`:   (m) r-coord of each observation point, length `n`
/// * `out_bz`:   (T) z-component of magnetic flux density at observation locations, length `n`
/// * `out_brho`: (T) r-component of magnetic flux density at observation locations, length `n`
pub fn flux_density_coil_par(
    coil: Coil,
    r: f64,
    current: f64,
    zprime: &[f64],
    rprime: &[f64],
    out_bz: &mut [f64],
    out_brho: &mut [f64],
) -> Result<(), &'static str> {
    let n = zprime.len();
    if rprime.len() != n || out_bz.len() != n || out_brho.len() != n {
        return Err("Length mismatch");
    }

    // Chunk inputs
    let ncores = std::thread::available_parallelism()
        .unwrap_or(NonZeroUsize::MIN)
        .get();

    let chunk = (n / ncores).max(1);
    debug!(%coil, npoints = n, chunk, "evaluating coil flux density in parallel");

    let zc = zprime.par_chunks(chunk);
    let rc = rprime.par_chunks(chunk);
    let bzc = out_bz.par_chunks_mut(chunk);
    let brhoc = out_brho.par_chunks_mut(chunk);

    // Run calcs
    bzc.zip(brhoc)
        .zip(zc.zip(rc))
        .try_for_each(|((bz, brho), (z, rho))| {
            flux_density_coil(coil, r, current, z, rho, bz, brho)
        })?;

    Ok(())
}

/// Off-axis Bz, Bρ of a coil at many observation points.
///
/// # Arguments
///
/// * `coil`:     loop arrangement
/// * `r`:        (m) loop radius
/// * `current`:  (A) current in each loop
/// * `zprime`:   (m) z-coord of each observation point, length `n`
/// * `rprime`:   (m) r-coord of each observation point, length `n`
/// * `out_bz`:   (T) z-component of magnetic flux density at observation locations, length `n`
/// * `out_brho`: (T) r-component of magnetic flux density at observation locations, length `n`
///
/// # Commentary
///
/// Outputs are overwritten. Points on a wire produce non-finite values,
/// and points on the axis have exactly zero radial component.
pub fn flux_density_coil(
    coil: Coil,
    r: f64,
    current: f64,
    zprime: &[f64],
    rprime: &[f64],
    out_bz: &mut [f64],
    out_brho: &mut [f64],
) -> Result<(), &'static str> {
    // Check lengths; Error if they do not match
    let n = zprime.len();
    if rprime.len() != n || out_bz.len() != n || out_brho.len() != n {
        return Err("Length mismatch");
    }

    let scale = field_scale(r, current); // [T]
    for i in 0..n {
        out_bz[i] = scale * coil.field_bz(zprime[i], rprime[i], r);
        out_brho[i] = scale * coil.field_brho(zprime[i], rprime[i], r);
    }

    Ok(())
}

/// Dimensionless on-axis field of a coil at many axial positions.
///
/// # Arguments
///
/// * `coil`:   loop arrangement
/// * `r`:      (m) loop radius
/// * `zprime`: (m) z-coord of each observation point, length `n`
/// * `out`:    (nondim) on-axis field, length `n`, overwritten
pub fn field_coil_on_axis(
    coil: Coil,
    r: f64,
    zprime: &[f64],
    out: &mut [f64],
) -> Result<(), &'static str> {
    if out.len() != zprime.len() {
        return Err("Length mismatch");
    }

    debug!(%coil, npoints = zprime.len(), "evaluating on-axis coil field");
    for (b, &z) in out.iter_mut().zip(zprime) {
        *b = coil.field_on_axis(z, r);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::circular_loop::magnetic_field_loop_bz;
    use crate::physics::helmholtz::{magnetic_field_anti_helmholtz_brho, magnetic_field_helmholtz_bz};
    use assert_approx_eq::assert_approx_eq;

    const COILS: [Coil; 3] = [Coil::Loop, Coil::Helmholtz, Coil::AntiHelmholtz];

    fn grid(n: usize) -> (Vec<f64>, Vec<f64>) {
        let zprime = (0..n).map(|i| -0.08 + 0.16 * i as f64 / n as f64).collect();
        let rprime = (0..n).map(|i| 0.001 + 0.04 * (i % 7) as f64 / 7.0).collect();
        (zprime, rprime)
    }

    #[test]
    fn dispatch() {
        let (z, rho, r) = (0.2, 0.3, 1.0);
        assert_eq!(Coil::Loop.field_bz(z, rho, r), field_loop_bz(z, rho, r));
        assert_eq!(Coil::Helmholtz.field_brho(z, rho, r), field_helmholtz_brho(z, rho, r));
        assert_eq!(
            Coil::AntiHelmholtz.field_on_axis(z, r),
            field_anti_helmholtz_on_axis(z, r)
        );
        assert_eq!(Coil::Helmholtz.to_string(), "helmholtz");
        assert_eq!(Coil::AntiHelmholtz.to_string(), "anti-helmholtz");
    }

    #[test]
    fn batch_matches_scalar() {
        let (r, current) = (0.05, 2.0);
        let (zprime, rprime) = grid(50);
        let mut bz = vec![0.0; 50];
        let mut brho = vec![0.0; 50];

        flux_density_coil(Coil::Loop, r, current, &zprime, &rprime, &mut bz, &mut brho).unwrap();
        for i in 0..50 {
            assert_eq!(bz[i], magnetic_field_loop_bz(zprime[i], rprime[i], r, current));
        }

        flux_density_coil(Coil::Helmholtz, r, current, &zprime, &rprime, &mut bz, &mut brho)
            .unwrap();
        for i in 0..50 {
            assert_eq!(bz[i], magnetic_field_helmholtz_bz(zprime[i], rprime[i], r, current));
        }

        flux_density_coil(Coil::AntiHelmholtz, r, current, &zprime, &rprime, &mut bz, &mut brho)
            .unwrap();
        for i in 0..50 {
            assert_eq!(
                brho[i],
                magnetic_field_anti_helmholtz_brho(zprime[i], rprime[i], r, current)
            );
        }
    }

    #[test]
    fn serial_and_parallel_agree() {
        let (r, current) = (0.05, -1.0);
        let n = 101;
        let (zprime, rprime) = grid(n);
        for coil in COILS {
            let (mut bz0, mut brho0) = (vec![0.0; n], vec![0.0; n]);
            let (mut bz1, mut brho1) = (vec![0.0; n], vec![0.0; n]);
            flux_density_coil(coil, r, current, &zprime, &rprime, &mut bz0, &mut brho0).unwrap();
            flux_density_coil_par(coil, r, current, &zprime, &rprime, &mut bz1, &mut brho1)
                .unwrap();
            assert_eq!(bz0, bz1);
            assert_eq!(brho0, brho1);
        }
    }

    #[test]
    fn on_axis_batch() {
        let zprime = [-0.3, 0.0, 0.25, 1.0];
        let mut out = [0.0; 4];
        for coil in COILS {
            field_coil_on_axis(coil, 0.5, &zprime, &mut out).unwrap();
            for (b, z) in out.iter().zip(zprime) {
                assert_eq!(*b, coil.field_on_axis(z, 0.5));
                assert_approx_eq!(*b, coil.field_bz(z, 0.0, 0.5), 1e-13);
            }
        }
    }

    #[test]
    fn length_mismatch() {
        let (mut bz, mut brho) = (vec![0.0; 3], vec![0.0; 3]);
        let z = [0.0, 0.1, 0.2];
        let rho = [0.1, 0.2];
        assert!(flux_density_coil(Coil::Loop, 1.0, 1.0, &z, &rho, &mut bz, &mut brho).is_err());
        assert!(
            flux_density_coil_par(Coil::Loop, 1.0, 1.0, &z, &rho, &mut bz, &mut brho).is_err()
        );
        let mut out = [0.0; 2];
        assert!(field_coil_on_axis(Coil::Helmholtz, 1.0, &z, &mut out).is_err());
    }

    #[test]
    fn empty_inputs() {
        let empty: [f64; 0] = [];
        let (mut bz, mut brho) = (vec![0.0; 0], vec![0.0; 0]);
        assert!(
            flux_density_coil_par(Coil::Loop, 1.0, 1.0, &empty, &empty, &mut bz, &mut brho).is_ok()
        );
    }
}
