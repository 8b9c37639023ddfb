use anyhow::Result;
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Prefix of temporary download files.
pub const TEMP_PREFIX: &str = "unibin-dep-";

/// RAII guard owning a temporary download.
///
/// The file is removed when the guard drops, unless it has already been
/// moved away. Every exit path of a run therefore leaves no temp file.
pub struct TempFile<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> TempFile<'a, R> {
    /// Create a fresh temporary file and take ownership of it.
    pub fn create(runtime: &'a R) -> Result<Self> {
        let path = runtime.create_temp_file(TEMP_PREFIX)?;
        debug!("Created temporary file {:?}", path);
        Ok(Self { runtime, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Runtime> Drop for TempFile<'_, R> {
    fn drop(&mut self) {
        if !self.runtime.exists(&self.path) {
            return;
        }
        debug!("Cleaning up: {:?}", self.path);
        if let Err(e) = self.runtime.remove_file(&self.path) {
            warn!("Failed to remove temporary file {:?}: {:#}", self.path, e);
        }
    }
}
