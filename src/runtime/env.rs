//! Temporary files and host information.

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::RealRuntime;
use crate::platform::Platform;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn create_temp_file_impl(&self, prefix: &str) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .tempfile()
            .context("Failed to create temporary file")?;
        let (_, path) = file.keep().context("Failed to keep temporary file")?;
        Ok(path)
    }

    pub(crate) fn host_platform_impl(&self) -> Platform {
        Platform::host()
    }
}
