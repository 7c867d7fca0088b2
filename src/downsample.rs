//! Uniform down-sampling of an existing cloud file, for lightweight viewer
//! pages.
//!
//! The cloud is treated as an opaque bag of vertex rows: we keep a uniform
//! random subset with no regard to local density. The result approximates
//! the original density field statistically; it does not preserve it
//! exactly.

use std::{io, path::Path};

use rand::{seq::SliceRandom, Rng};

use crate::ply;

/// Default target size for lightweight clouds.
pub const DEFAULT_TARGET: usize = 18_000;

/// Vertex counts of a completed down-sampling run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub read: usize,
    pub written: usize,
}

/// Down-sample `input` into `output`, keeping at most `target` rows. An
/// input already at or below the target is rewritten whole (row order may
/// change). A missing input is an error; rows are never fabricated.
pub fn run<R: Rng>(input: &Path, output: &Path, target: usize, rng: &mut R) -> io::Result<Report> {
    let rows = ply::read_rows(input)?;
    let read = rows.len();

    let kept: Vec<String> = if read > target {
        rows.choose_multiple(rng, target).cloned().collect()
    } else {
        rows
    };
    let written = kept.len();

    ply::write_rows(output, kept, written)?;

    Ok(Report { read, written })
}
