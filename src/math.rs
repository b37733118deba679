//! Pure-math functions supporting physics calculations.
use core::f64::consts::PI;

/// Iteration cap for the arithmetic-geometric mean; convergence is quadratic
/// so this is only reached for NaN inputs.
const AGM_MAX_ITER: usize = 32;

/// Relative tolerance on `|a - b|` for AGM convergence.
const AGM_RTOL: f64 = 1e-15;

/// Arithmetic-geometric mean of 1 and $\sqrt{1 - m}$.
///
/// Returns the converged mean along with the weighted sum
/// $\sum_{n \ge 0} 2^{n-1} c_n^2$, with $c_0^2 = m$, used to recover $E(m)$ from $K(m)$.
#[inline]
fn agm(m: f64) -> (f64, f64) {
    let mut a: f64 = 1.0;
    let mut b: f64 = (1.0 - m).sqrt();
    let mut weight: f64 = 0.5;
    let mut sum: f64 = 0.5 * m;

    for _ in 0..AGM_MAX_ITER {
        if (a - b).abs() <= AGM_RTOL * a {
            break;
        }
        let c = 0.5 * (a - b);
        let a_next = 0.5 * (a + b);
        b = (a * b).sqrt();
        a = a_next;
        weight *= 2.0;
        sum = (weight * c).mul_add(c, sum);
    }

    (a, sum)
}

/// Complete elliptic integral of the first kind,
/// $K(m) = \int_0^{\pi/2} (1 - m \sin^2\theta)^{-1/2} d\theta$.
///
/// Takes the parameter $m = k^2$, the same convention as `scipy.special.ellipk`.
/// Passing the modulus $k$ instead produces a wrong but finite value.
///
/// # Commentary
///
/// Evaluated with the arithmetic-geometric mean, $K(m) = \pi / (2\,\mathrm{AGM}(1, \sqrt{1-m}))$.
/// The recurrence terminates immediately at $m = 0$, so $K(0) = \pi/2$ exactly.
///
/// * $m = 1$: returns `+inf` (logarithmic divergence)
/// * $m > 1$ or NaN: returns NaN
///
/// # References
///
///   \[1\] NIST Digital Library of Mathematical Functions, §19.8(i).
///         Available: <https://dlmf.nist.gov/19.8>
#[inline]
pub fn ellipk(m: f64) -> f64 {
    if m == 1.0 {
        return f64::INFINITY;
    }
    let (a, _) = agm(m);
    PI / (2.0 * a)
}

/// Complete elliptic integral of the second kind,
/// $E(m) = \int_0^{\pi/2} (1 - m \sin^2\theta)^{1/2} d\theta$.
///
/// Takes the parameter $m = k^2$, the same convention as `scipy.special.ellipe`.
///
/// # Commentary
///
/// Evaluated alongside $K$ by the arithmetic-geometric mean,
/// $E(m) = K(m) \left(1 - \sum_{n \ge 0} 2^{n-1} c_n^2\right)$.
///
/// * $m = 0$: returns $\pi/2$ exactly
/// * $m = 1$: returns 1
/// * $m > 1$ or NaN: returns NaN
///
/// # References
///
///   \[1\] NIST Digital Library of Mathematical Functions, §19.8(i).
///         Available: <https://dlmf.nist.gov/19.8>
///
///   \[2\] M. Abramowitz and I. A. Stegun, *Handbook of mathematical functions: with formulas, graphs, and mathematical tables*. 1970. Section 17.6.
#[inline]
pub fn ellipe(m: f64) -> f64 {
    if m == 1.0 {
        return 1.0;
    }
    let (a, sum) = agm(m);
    PI / (2.0 * a) * (1.0 - sum)
}

/// Evaluate the cross products for each axis component
/// separately using `mul_add` which would not be assumed usable
/// in a more general implementation.
#[inline]
pub fn cross3(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> (f64, f64, f64) {
    let xy = -x1 * y0;
    let yz = -y1 * z0;
    let zx = -z1 * x0;
    let cx = y0.mul_add(z1, yz);
    let cy = z0.mul_add(x1, zx);
    let cz = x0.mul_add(y1, xy);

    (cx, cy, cz)
}

/// Scalar dot product using `mul_add`.
#[inline]
pub fn dot3(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> f64 {
    x0.mul_add(x1, y0.mul_add(y1, z0 * z1))
}
