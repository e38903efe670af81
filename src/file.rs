// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::GridError;

/// Write the layout text to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_layout(path: &Path, text: &str) -> Result<PathBuf, GridError> {
    let io_err = |source: std::io::Error| GridError::Write { path: path.to_path_buf(), source };

    if path.is_dir() || looks_like_dir_hint(path) {
        return Err(io_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path is a directory",
        )));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    fs::write(path, text).map_err(io_err)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
