//! The angular part of the wavefunction: real, chemistry-convention
//! harmonics for the s through g shells, hand-enumerated per orbital with
//! their canonical names.
//!
//! These are the textbook real combinations (pz, px, py, dz2, ...) rather
//! than the complex Y_lm. Like the radial part they carry no normalization
//! constants, so each is just its trigonometric shape factor.
//! [Table of real spherical harmonics](https://en.wikipedia.org/wiki/Table_of_spherical_harmonics)

use ndarray::Array1;

use super::OrbitalError;

/// One real angular factor, keyed by its conventional orbital label. The
/// generator addresses these by (l, sub-orbital index); the index ordering
/// within each shell below is part of the naming contract and must not be
/// reshuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harmonic {
    S,
    Pz,
    Px,
    Py,
    Dz2,
    Dxz,
    Dyz,
    Dx2y2,
    Dxy,
    Fz3,
    Fxz2,
    Fyz2,
    Fzx2y2,
    Fxyz,
    Fxx23y2,
    Fyy23x2,
    Gz4,
    Gxz3,
    Gyz3,
    Gz2x2y2,
    Gxyz2,
    Gxzx23y2,
    Gyzy23x2,
    Gx4y4,
    Gxyx2y2,
}

use Harmonic::*;

/// Shell membership, indexed by l. Degeneracy is 2l + 1.
const SHELLS: [&[Harmonic]; 5] = [
    &[S],
    &[Pz, Px, Py],
    &[Dz2, Dxz, Dyz, Dx2y2, Dxy],
    &[Fz3, Fxz2, Fyz2, Fzx2y2, Fxyz, Fxx23y2, Fyy23x2],
    &[
        Gz4, Gxz3, Gyz3, Gz2x2y2, Gxyz2, Gxzx23y2, Gyzy23x2, Gx4y4, Gxyx2y2,
    ],
];

impl Harmonic {
    /// Look up the harmonic for a shell and sub-orbital index. Anything
    /// outside the enumerated s–g shells is an error, never a placeholder.
    pub fn from_lm(l: u16, m_idx: u16) -> Result<Self, OrbitalError> {
        let shell = SHELLS
            .get(l as usize)
            .ok_or(OrbitalError::UnsupportedL { l })?;

        shell
            .get(m_idx as usize)
            .copied()
            .ok_or(OrbitalError::InvalidMIdx { l, m_idx })
    }

    pub fn l(&self) -> u16 {
        match self {
            S => 0,
            Pz | Px | Py => 1,
            Dz2 | Dxz | Dyz | Dx2y2 | Dxy => 2,
            Fz3 | Fxz2 | Fyz2 | Fzx2y2 | Fxyz | Fxx23y2 | Fyy23x2 => 3,
            _ => 4,
        }
    }

    /// Canonical lowercase label, orbital letter included.
    pub fn name(&self) -> &'static str {
        match self {
            S => "s",
            Pz => "pz",
            Px => "px",
            Py => "py",
            Dz2 => "dz2",
            Dxz => "dxz",
            Dyz => "dyz",
            Dx2y2 => "dx2-y2",
            Dxy => "dxy",
            Fz3 => "fz3",
            Fxz2 => "fxz2",
            Fyz2 => "fyz2",
            Fzx2y2 => "fzx2-y2",
            Fxyz => "fxyz",
            Fxx23y2 => "fxx2-3y2",
            Fyy23x2 => "fyy2-3x2",
            Gz4 => "gz4",
            Gxz3 => "gxz3",
            Gyz3 => "gyz3",
            Gz2x2y2 => "gz2x2-y2",
            Gxyz2 => "gxyz2",
            Gxzx23y2 => "gxzx2-3y2",
            Gyzy23x2 => "gyzy2-3x2",
            Gx4y4 => "gx4+y4",
            Gxyx2y2 => "gxyx2-y2",
        }
    }

    /// Evaluate the angular factor over a batch of directions. θ is
    /// inclination from +z on [0, τ/2]; φ is azimuth on [0, τ).
    pub fn value(&self, θ: &Array1<f64>, φ: &Array1<f64>) -> Array1<f64> {
        let cos_t = θ.mapv(f64::cos);
        let sin_t = θ.mapv(f64::sin);

        match self {
            S => Array1::ones(θ.len()),

            Pz => cos_t,
            Px => sin_t * φ.mapv(f64::cos),
            Py => sin_t * φ.mapv(f64::sin),

            Dz2 => cos_t.mapv(|c| 3. * c * c - 1.),
            Dxz => &sin_t * &cos_t * φ.mapv(f64::cos),
            Dyz => &sin_t * &cos_t * φ.mapv(f64::sin),
            Dx2y2 => sin_t.mapv(|s| s * s) * φ.mapv(|p| (2. * p).cos()),
            Dxy => sin_t.mapv(|s| s * s) * φ.mapv(|p| (2. * p).sin()),

            Fz3 => cos_t.mapv(|c| c * (5. * c * c - 3.)),
            Fxz2 => sin_t * cos_t.mapv(|c| 5. * c * c - 1.) * φ.mapv(f64::cos),
            Fyz2 => sin_t * cos_t.mapv(|c| 5. * c * c - 1.) * φ.mapv(f64::sin),
            Fzx2y2 => cos_t * sin_t.mapv(|s| s * s) * φ.mapv(|p| (2. * p).cos()),
            Fxyz => cos_t * sin_t.mapv(|s| s * s) * φ.mapv(|p| (2. * p).sin()),
            Fxx23y2 => sin_t.mapv(|s| s.powi(3)) * φ.mapv(|p| (3. * p).cos()),
            Fyy23x2 => sin_t.mapv(|s| s.powi(3)) * φ.mapv(|p| (3. * p).sin()),

            Gz4 => cos_t.mapv(|c| 35. * c.powi(4) - 30. * c * c + 3.),
            Gxz3 => &sin_t * &cos_t.mapv(|c| c * (7. * c * c - 3.)) * φ.mapv(f64::cos),
            Gyz3 => &sin_t * &cos_t.mapv(|c| c * (7. * c * c - 3.)) * φ.mapv(f64::sin),
            Gz2x2y2 => {
                sin_t.mapv(|s| s * s) * cos_t.mapv(|c| 7. * c * c - 1.) * φ.mapv(|p| (2. * p).cos())
            }
            Gxyz2 => {
                sin_t.mapv(|s| s * s) * cos_t.mapv(|c| 7. * c * c - 1.) * φ.mapv(|p| (2. * p).sin())
            }
            Gxzx23y2 => sin_t.mapv(|s| s.powi(3)) * cos_t * φ.mapv(|p| (3. * p).cos()),
            Gyzy23x2 => sin_t.mapv(|s| s.powi(3)) * cos_t * φ.mapv(|p| (3. * p).sin()),
            Gx4y4 => sin_t.mapv(|s| s.powi(4)) * φ.mapv(|p| (4. * p).cos()),
            Gxyx2y2 => sin_t.mapv(|s| s.powi(4)) * φ.mapv(|p| (4. * p).sin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use scilib::quantum::spherical_harmonics;
    use std::f64::consts::TAU;

    use super::*;

    fn value_at(harm: Harmonic, θ: f64, φ: f64) -> f64 {
        harm.value(&Array1::from_vec(vec![θ]), &Array1::from_vec(vec![φ]))[0]
    }

    #[test]
    fn lookup_covers_shells_and_rejects_the_rest() {
        assert_eq!(Harmonic::from_lm(0, 0), Ok(S));
        assert_eq!(Harmonic::from_lm(1, 0), Ok(Pz));
        assert_eq!(Harmonic::from_lm(2, 3), Ok(Dx2y2));
        assert_eq!(Harmonic::from_lm(4, 8), Ok(Gxyx2y2));

        assert_eq!(
            Harmonic::from_lm(5, 0),
            Err(OrbitalError::UnsupportedL { l: 5 })
        );
        assert_eq!(
            Harmonic::from_lm(1, 3),
            Err(OrbitalError::InvalidMIdx { l: 1, m_idx: 3 })
        );
        assert_eq!(
            Harmonic::from_lm(4, 9),
            Err(OrbitalError::InvalidMIdx { l: 4, m_idx: 9 })
        );
    }

    #[test]
    fn names_match_published_labels() {
        assert_eq!(Harmonic::from_lm(2, 0).unwrap().name(), "dz2");
        assert_eq!(Harmonic::from_lm(3, 5).unwrap().name(), "fxx2-3y2");
        assert_eq!(Harmonic::from_lm(4, 7).unwrap().name(), "gx4+y4");
    }

    /// The cos(kφ)/sin(kφ) pairs within each shell share a θ prefactor, so
    /// the sum of squares over a full shell must not depend on φ.
    #[test]
    fn shell_density_is_azimuthally_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for l in 0..5u16 {
            for θ in [0.3, 1.1, 2.4] {
                let φs: Vec<f64> = (0..64).map(|_| rng.gen::<f64>() * TAU).collect();

                let sums: Vec<f64> = φs
                    .iter()
                    .map(|&φ| {
                        (0..2 * l + 1)
                            .map(|m_idx| {
                                value_at(Harmonic::from_lm(l, m_idx).unwrap(), θ, φ).powi(2)
                            })
                            .sum()
                    })
                    .collect();

                let max = sums.iter().cloned().fold(f64::MIN, f64::max);
                let min = sums.iter().cloned().fold(f64::MAX, f64::min);
                assert!(
                    max - min < 1e-9 * max.max(1.),
                    "l = {l}, θ = {θ}: shell density varies with φ ({min}..{max})"
                );
            }
        }
    }

    /// Our m = 0 entries are unnormalized, so against scilib's Y_l0 they
    /// should differ by a constant factor only.
    #[test]
    fn m0_entries_track_scilib() {
        let θ_ref = 0.4;

        for (harm, l) in [(Pz, 1), (Dz2, 2), (Fz3, 3), (Gz4, 4)] {
            let ours_ref = value_at(harm, θ_ref, 0.);
            let scilib_ref = spherical_harmonics(l, 0, θ_ref, 0.).re;

            for θ in [0.7, 1.3, 2.1, 2.9] {
                let ours = value_at(harm, θ, 0.);
                let theirs = spherical_harmonics(l, 0, θ, 0.).re;

                // Cross-multiplied to dodge division near nodes.
                assert!(
                    (ours * scilib_ref - theirs * ours_ref).abs() < 1e-9,
                    "{harm:?} deviates from Y_{l}0 at θ = {θ}"
                );
            }
        }
    }
}
