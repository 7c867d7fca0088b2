//! Hydrogen-like orbital wavefunctions: a radial part built from generalized
//! Laguerre polynomials, and a real angular part per orbital, combined into ψ
//! over batches of spherical sample points.
//!
//! Everything here is proportional to the true wavefunction rather than
//! normalized: the sampler compares densities against each other, so overall
//! scale factors cancel.

use std::{error::Error, fmt};

use ndarray::Array1;

pub mod angular;
pub mod radial;

pub use angular::Harmonic;

/// Number of distinct sub-orbitals in a shell.
pub fn degeneracy(l: u16) -> u16 {
    2 * l + 1
}

/// Quantum-number combinations the generator does not support. These are
/// hard failures; no placeholder wavefunction is ever substituted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitalError {
    /// n must be at least 1, with l strictly below n.
    InvalidN { n: u16, l: u16 },
    /// Only the s, p, d, f and g shells are enumerated.
    UnsupportedL { l: u16 },
    /// The sub-orbital index must be below the shell's degeneracy.
    InvalidMIdx { l: u16, m_idx: u16 },
}

impl fmt::Display for OrbitalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidN { n, l } => {
                write!(f, "invalid quantum numbers: n = {n}, l = {l} (need n ≥ 1 and l < n)")
            }
            Self::UnsupportedL { l } => {
                write!(f, "unsupported shell l = {l}; only s, p, d, f and g are available")
            }
            Self::InvalidMIdx { l, m_idx } => {
                write!(
                    f,
                    "sub-orbital index {m_idx} out of range for l = {l} (degeneracy {})",
                    degeneracy(*l)
                )
            }
        }
    }
}

impl Error for OrbitalError {}

/// A single hydrogen-like orbital. Construction validates the quantum
/// numbers and resolves the angular harmonic, so a held `Orbital` is always
/// evaluatable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orbital {
    pub n: u16,
    pub l: u16,
    pub m_idx: u16,
    pub harmonic: Harmonic,
}

impl Orbital {
    pub fn new(n: u16, l: u16, m_idx: u16) -> Result<Self, OrbitalError> {
        if n == 0 || l >= n {
            return Err(OrbitalError::InvalidN { n, l });
        }

        let harmonic = Harmonic::from_lm(l, m_idx)?;

        Ok(Self { n, l, m_idx, harmonic })
    }

    /// ψ over a batch of spherical sample points: the radial part at r times
    /// the angular part at (θ, φ).
    pub fn psi(&self, r: &Array1<f64>, θ: &Array1<f64>, φ: &Array1<f64>) -> Array1<f64> {
        radial::radial(self.n, self.l, r) * self.harmonic.value(θ, φ)
    }

    /// ψ at a single point. Convenience for spot checks; batch callers should
    /// go through `psi`.
    pub fn psi_at(&self, r: f64, θ: f64, φ: f64) -> f64 {
        self.psi(
            &Array1::from_vec(vec![r]),
            &Array1::from_vec(vec![θ]),
            &Array1::from_vec(vec![φ]),
        )[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_quantum_numbers() {
        assert!(Orbital::new(1, 0, 0).is_ok());
        assert!(Orbital::new(2, 1, 2).is_ok());
        assert!(Orbital::new(5, 4, 8).is_ok());

        assert_eq!(
            Orbital::new(0, 0, 0),
            Err(OrbitalError::InvalidN { n: 0, l: 0 })
        );
        assert_eq!(
            Orbital::new(2, 2, 0),
            Err(OrbitalError::InvalidN { n: 2, l: 2 })
        );
        assert_eq!(
            Orbital::new(6, 5, 0),
            Err(OrbitalError::UnsupportedL { l: 5 })
        );
        assert_eq!(
            Orbital::new(3, 2, 5),
            Err(OrbitalError::InvalidMIdx { l: 2, m_idx: 5 })
        );
    }

    #[test]
    fn degeneracy_per_shell() {
        assert_eq!(
            (0..5u16).map(degeneracy).collect::<Vec<_>>(),
            vec![1, 3, 5, 7, 9]
        );
    }

    #[test]
    fn psi_separates_into_radial_and_angular() {
        // 2pz at a point off both nodes: ψ = R(2, 1, r)·cosθ.
        let orbital = Orbital::new(2, 1, 0).unwrap();
        let (r, θ) = (1.5, 0.6);

        let radial_only = radial::radial(2, 1, &Array1::from_vec(vec![r]))[0];
        let ψ = orbital.psi_at(r, θ, 0.);

        assert!((ψ - radial_only * θ.cos()).abs() < 1e-12);
    }
}
