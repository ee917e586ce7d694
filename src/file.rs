// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{self, Delim};

/// Write one dataset file: optional header row, then all rows. Parent
/// directories are created on demand; the file is truncated if present.
pub fn write_dataset(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: Delim,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        csv::write_row(&mut out, h, delim)?;
    }
    for row in rows {
        csv::write_row(&mut out, row, delim)?;
    }
    out.flush()?;
    Ok(())
}

/// Resolve a user-supplied output hint against a default file name.
/// A trailing separator (or an existing directory) means "put the default
/// file name inside"; otherwise the hint is the file path itself.
pub fn resolve_out_path(hint: &Path, default_name: &str) -> Result<PathBuf, Box<dyn Error>> {
    if looks_like_dir_hint(hint) || hint.is_dir() {
        ensure_directory(hint)?;
        Ok(hint.join(default_name))
    } else {
        Ok(hint.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
