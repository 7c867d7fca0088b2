//! ASCII PLY export for sampled clouds, plus the row-level reader the
//! down-sampler builds on.
//!
//! The format is the minimal vertex-only dialect the viewer loads: xyz as
//! floats with 4 decimal digits, rgb as 0–255 integers, one vertex per line.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::sampler::SamplePoint;

/// Write a sampled cloud. Overwrites any existing file; there is no
/// partial-write recovery; an interrupted run is simply regenerated.
pub fn write_cloud(path: &Path, points: &[SamplePoint]) -> io::Result<()> {
    let rows = points.iter().map(|p| {
        let [red, green, blue] = p.sign.color();
        format!(
            "{:.4} {:.4} {:.4} {red} {green} {blue}",
            p.posit.x, p.posit.y, p.posit.z
        )
    });

    write_rows(path, rows, points.len())
}

/// Write the PLY header, followed by pre-formatted vertex rows.
pub fn write_rows<I>(path: &Path, rows: I, count: usize) -> io::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut f = BufWriter::new(File::create(path)?);

    writeln!(f, "ply")?;
    writeln!(f, "format ascii 1.0")?;
    writeln!(f, "element vertex {count}")?;
    writeln!(f, "property float x")?;
    writeln!(f, "property float y")?;
    writeln!(f, "property float z")?;
    writeln!(f, "property uchar red")?;
    writeln!(f, "property uchar green")?;
    writeln!(f, "property uchar blue")?;
    writeln!(f, "end_header")?;

    for row in rows {
        writeln!(f, "{row}")?;
    }

    f.flush()
}

/// Read the vertex rows of an ASCII PLY file as opaque records. Rows with
/// fewer than the 6 x/y/z/r/g/b fields are skipped.
pub fn read_rows(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut rows = Vec::new();
    let mut in_body = false;

    for line in reader.lines() {
        let line = line?;

        if !in_body {
            if line.trim() == "end_header" {
                in_body = true;
            }
            continue;
        }

        let row = line.trim();
        if !row.is_empty() && row.split_whitespace().count() >= 6 {
            rows.push(row.to_owned());
        }
    }

    Ok(rows)
}
