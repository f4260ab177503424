//! Tour output file writer.
//!
//! Persists a solved tour next to its instance file as `<input>.tour`:
//! the total distance, then each node's 1-indexed id on its own line,
//! terminated by `-1`.

use crate::models::Tour;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Derives the output path for an instance file: `<input>.tour`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tsp_approx::io::writer::tour_file_path;
///
/// let out = tour_file_path(Path::new("data/berlin52.tsp"));
/// assert_eq!(out, Path::new("data/berlin52.tsp.tour"));
/// ```
pub fn tour_file_path(instance_path: &Path) -> PathBuf {
    let mut name = instance_path.as_os_str().to_os_string();
    name.push(".tour");
    PathBuf::from(name)
}

/// Writes a solved tour to the given path.
pub fn write_tour_file(path: impl AsRef<Path>, tour: &Tour) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "TOUR_DISTANCE : {}", tour.total_distance())?;
    writeln!(out, "TOUR_NODES :")?;
    for &node in tour.nodes() {
        writeln!(out, "{}", node + 1)?;
    }
    writeln!(out, "-1")?;
    out.flush()
}
