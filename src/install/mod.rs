//! Placing a classified download at its destination.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::binary::Verdict;
use crate::runtime::Runtime;

/// Mode applied to installed executables.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// What the installer did with a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file now lives at `path`. `executable` is false for plain files
    /// and for binaries whose permissions could not be set.
    Installed { path: PathBuf, executable: bool },
    /// An incompatible binary; nothing was written.
    Rejected,
}

pub struct Installer<'a, R: Runtime> {
    runtime: &'a R,
    dest_dir: PathBuf,
    file_name: String,
}

impl<'a, R: Runtime> Installer<'a, R> {
    pub fn new(runtime: &'a R, dest_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            runtime,
            dest_dir: dest_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Final location of the installed file.
    pub fn destination(&self) -> PathBuf {
        self.dest_dir.join(&self.file_name)
    }

    /// Carry out `verdict` for the download at `temp_path`.
    ///
    /// Failures to create the directory or move the file are errors. A failure
    /// to mark a binary executable is reported but leaves the file installed.
    /// Nothing is rolled back. The temp file itself is never removed here.
    #[tracing::instrument(skip(self))]
    pub fn install(&self, temp_path: &Path, verdict: &Verdict) -> Result<Outcome> {
        match verdict {
            Verdict::Executable(descriptor) => {
                println!(
                    "The binary ({}) is compatible with the current system.",
                    descriptor
                );
                let dest = self.place(temp_path)?;

                match self.runtime.set_permissions(&dest, EXECUTABLE_MODE) {
                    Ok(()) => {
                        println!(
                            "File moved to: {} and execution permissions granted.",
                            dest.display()
                        );
                        Ok(Outcome::Installed {
                            path: dest,
                            executable: true,
                        })
                    }
                    Err(e) => {
                        warn!("Failed to set permissions on {:?}: {:#}", dest, e);
                        println!("Error setting executable permissions: {:#}", e);
                        Ok(Outcome::Installed {
                            path: dest,
                            executable: false,
                        })
                    }
                }
            }
            Verdict::Incompatible { binary, host } => {
                println!(
                    "The binary ({}) is not compatible with the current system ({}).",
                    binary, host
                );
                println!("Temporary file will be removed.");
                Ok(Outcome::Rejected)
            }
            Verdict::PlainFile => {
                let dest = self.place(temp_path)?;
                println!("Text file moved to: {}", dest.display());
                Ok(Outcome::Installed {
                    path: dest,
                    executable: false,
                })
            }
        }
    }

    /// Create the destination directory and move the file into it. Falls back
    /// to copying when a rename is impossible, e.g. across filesystems.
    fn place(&self, temp_path: &Path) -> Result<PathBuf> {
        self.runtime
            .create_dir_all(&self.dest_dir)
            .with_context(|| format!("Failed to create save directory {:?}", self.dest_dir))?;

        let dest = self.destination();
        if let Err(e) = self.runtime.rename(temp_path, &dest) {
            debug!("Rename to {:?} failed ({:#}), copying instead", dest, e);
            self.runtime
                .copy(temp_path, &dest)
                .with_context(|| format!("Failed to move file to {:?}", dest))?;
        }
        Ok(dest)
    }
}
