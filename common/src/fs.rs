use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait FsExt {
    /// Resolves a relative path against the current working directory. Absolute paths are
    /// returned as is.
    fn relative_to_cwd(&self) -> Result<PathBuf>;
}

impl<P: AsRef<Path>> FsExt for P {
    fn relative_to_cwd(&self) -> Result<PathBuf> {
        let path = self.as_ref();
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(cwd.join(path))
    }
}
