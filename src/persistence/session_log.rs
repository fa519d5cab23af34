use std::fs::{self, File};
use std::io::{BufWriter, Error, Write};
use std::path::{Path, PathBuf};

pub fn log_file_name(timestamp: &str) -> String {
    format!("{timestamp}_log.txt")
}

/// Writes one estimate per line to `<dir>/<timestamp>_log.txt`, creating
/// `dir` if needed. Returns the path written.
pub fn write_session_log<P: AsRef<Path>>(
    dir: P,
    timestamp: &str,
    pi_results: &[f64],
) -> Result<PathBuf, Error> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(log_file_name(timestamp));
    let mut w = BufWriter::new(File::create_new(&path)?);
    for pi in pi_results {
        writeln!(w, "{pi}")?;
    }
    w.flush()?;
    Ok(path)
}
