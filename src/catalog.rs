//! The orbital catalog: every (n, l, m) combination the generator emits,
//! the canonical names and directory layout their files use, and the driver
//! that samples and writes the whole set.
//!
//! Naming follows the conventions the viewer's model registry expects:
//! `1s`, `2pz`, `3d_z2`, `4f_z3`, `5g_z4` and friends, filed under
//! `{root}/{shell letter}/{name}/{name}.ply`.

use std::{
    error::Error,
    fmt, fs, io,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use itertools::iproduct;
use log::info;
use rayon::prelude::*;

use crate::{
    orbital::{degeneracy, Orbital},
    ply,
    sampler::{SampleError, Sampler},
    types::ComputationDevice,
};

/// Point budget per orbital, matching the published model files.
pub const DEFAULT_NUM_POINTS: usize = 250_000;

/// Shells to generate, as (n range, l) pairs. s runs 1–7; the higher shells
/// trail off where the models stop being instructive.
const TASKS: [(RangeInclusive<u16>, u16); 5] = [
    (1..=7, 0),
    (2..=6, 1),
    (3..=6, 2),
    (4..=5, 3),
    (5..=5, 4),
];

pub fn l_char(l: u16) -> char {
    match l {
        0 => 's',
        1 => 'p',
        2 => 'd',
        3 => 'f',
        4 => 'g',
        _ => panic!("shell letter requested for unsupported l = {l}"),
    }
}

/// Every catalog entry, in generation order.
pub fn all_orbitals() -> Vec<Orbital> {
    let mut result = Vec::new();

    for (n_range, l) in TASKS {
        for (n, m_idx) in iproduct!(n_range, 0..degeneracy(l)) {
            result.push(Orbital::new(n, l, m_idx).expect("catalog entry within supported shells"));
        }
    }

    result
}

/// Canonical file/directory stem for an orbital: `2pz`, `3d_z2`, ...
/// s and p names keep the bare harmonic label; d and above strip the shell
/// letter off the label and attach the rest as a suffix.
pub fn full_name(orbital: &Orbital) -> String {
    let label = orbital.harmonic.name();

    match orbital.l {
        0 => format!("{}s", orbital.n),
        1 => format!("{}{label}", orbital.n),
        _ => {
            // The two cubic-set f orbitals ship with hand-mapped suffixes.
            // `y(x2-z2)` does not match its formula's variables (sin³θ·sin3φ
            // is the y(3x2-y2) orbital), but it is the name the published
            // model files carry, so it stays.
            let suffix = match label {
                "fxx2-3y2" => "x(x2-3y2)",
                "fyy2-3x2" => "y(x2-z2)",
                _ => &label[1..],
            };

            format!("{}{}_{suffix}", orbital.n, l_char(orbital.l))
        }
    }
}

/// `{root}/{shell letter}/{name}/{name}.ply`
pub fn cloud_path(root: &Path, orbital: &Orbital) -> PathBuf {
    let name = full_name(orbital);

    root.join(l_char(orbital.l).to_string())
        .join(&name)
        .join(format!("{name}.ply"))
}

/// A failed generation run, tagged with the orbital it died on.
#[derive(Debug)]
pub enum GenError {
    Sample { name: String, source: SampleError },
    Io { name: String, source: io::Error },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sample { name, source } => write!(f, "{name}: {source}"),
            Self::Io { name, source } => write!(f, "{name}: {source}"),
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sample { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Sample one orbital and write its cloud beneath `root`. Returns the
/// written path.
pub fn generate_orbital(
    dev: &ComputationDevice,
    root: &Path,
    orbital: &Orbital,
    num_points: usize,
) -> Result<PathBuf, GenError> {
    let name = full_name(orbital);
    let path = cloud_path(root, orbital);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| GenError::Io {
            name: name.clone(),
            source,
        })?;
    }

    let mut sampler = Sampler::new(dev.clone());
    let points = sampler
        .sample(orbital, num_points)
        .map_err(|source| GenError::Sample {
            name: name.clone(),
            source,
        })?;

    ply::write_cloud(&path, &points).map_err(|source| GenError::Io {
        name: name.clone(),
        source,
    })?;

    info!("{name}: {} points -> {}", points.len(), path.display());

    Ok(path)
}

/// Generate the complete catalog. Each orbital's run is independent and
/// writes to its own directory, so the set fans out across the thread pool
/// with no shared state.
pub fn generate_all(
    dev: &ComputationDevice,
    root: &Path,
    num_points: usize,
) -> Result<(), GenError> {
    all_orbitals()
        .par_iter()
        .try_for_each(|orbital| generate_orbital(dev, root, orbital, num_points).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn naming_matches_published_models() {
        let cases = [
            ((1, 0, 0), "1s"),
            ((2, 1, 0), "2pz"),
            ((2, 1, 1), "2px"),
            ((2, 1, 2), "2py"),
            ((3, 2, 0), "3d_z2"),
            ((3, 2, 3), "3d_x2-y2"),
            ((4, 3, 0), "4f_z3"),
            ((4, 3, 5), "4f_x(x2-3y2)"),
            ((4, 3, 6), "4f_y(x2-z2)"),
            ((5, 4, 0), "5g_z4"),
            ((5, 4, 7), "5g_x4+y4"),
        ];

        for ((n, l, m_idx), expected) in cases {
            let orbital = Orbital::new(n, l, m_idx).unwrap();
            assert_eq!(full_name(&orbital), expected);
        }
    }

    #[test]
    fn catalog_covers_all_shells() {
        let orbitals = all_orbitals();
        assert_eq!(orbitals.len(), 65);

        for (l, expected) in [(0, 7), (1, 15), (2, 20), (3, 14), (4, 9)] {
            let count = orbitals.iter().filter(|o| o.l == l).count();
            assert_eq!(count, expected, "shell l = {l}");
        }
    }

    #[test]
    fn cloud_paths_follow_the_layout() {
        let orbital = Orbital::new(2, 1, 0).unwrap();
        let path = cloud_path(Path::new("model++"), &orbital);
        assert_eq!(path, Path::new("model++/p/2pz/2pz.ply"));
    }

    #[test]
    fn end_to_end_generates_a_readable_cloud() {
        let root = std::env::temp_dir().join(format!("orbital_gen_e2e_{}", std::process::id()));
        let orbital = Orbital::new(2, 1, 0).unwrap();

        let path = generate_orbital(&ComputationDevice::Cpu, &root, &orbital, 5_000).unwrap();
        assert!(path.ends_with("p/2pz/2pz.ply"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("element vertex 5000"));
        assert_eq!(ply::read_rows(&path).unwrap().len(), 5_000);

        fs::remove_dir_all(&root).unwrap();
    }
}
