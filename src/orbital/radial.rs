//! The radial part of hydrogen-like orbitals: a generalized Laguerre
//! polynomial against an exponential-power envelope.
//!
//! [General form](http://staff.ustc.edu.cn/~zqj/posts/Hydrogen-Wavefunction/),
//! separated into radial and angular parts.

use ndarray::Array1;

/// Generalized Laguerre polynomial L_k^α over a batch of points, via the
/// three-term recurrence
/// L_j = ((2j + α − 1 − x)·L_{j−1} − (j + α − 1)·L_{j−2}) / j.
/// k = 0 and k = 1 have closed forms; no recurrence needed.
pub(crate) fn laguerre(k: u16, α: f64, x: &Array1<f64>) -> Array1<f64> {
    match k {
        0 => Array1::ones(x.len()),
        1 => x.mapv(|v| α + 1. - v),
        _ => {
            let mut l_prev: Array1<f64> = Array1::ones(x.len());
            let mut l_cur = x.mapv(|v| α + 1. - v);

            for j in 2..=k {
                let jf = j as f64;
                let l_next = (x.mapv(|v| 2. * jf + α - 1. - v) * &l_cur
                    - l_prev.mapv(|v| (jf + α - 1.) * v))
                    / jf;
                l_prev = l_cur;
                l_cur = l_next;
            }

            l_cur
        }
    }
}

/// Radial wavefunction R(n, l, r) over a batch of radius samples. With
/// ρ = 2r/n: ρ^l · L_{n−l−1}^{2l+1}(ρ) · exp(−ρ/2).
///
/// Proportional to the true radial part only: the normalization constant is
/// dropped, since sampling needs relative density, not amplitudes.
pub fn radial(n: u16, l: u16, r: &Array1<f64>) -> Array1<f64> {
    assert!(l < n);

    let ρ = r.mapv(|v| 2. * v / n as f64);
    let poly = laguerre(n - l - 1, (2 * l + 1) as f64, &ρ);

    ρ.mapv(|v| v.powi(l as i32)) * poly * ρ.mapv(|v| (-v / 2.).exp())
}
