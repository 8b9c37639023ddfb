//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the filesystem and
//! host facts, so the download pipeline can be tested without touching disk.
//!
//! # Structure
//!
//! - `fs` - File system operations (open, move, copy, permissions)
//! - `env` - Temporary files and host platform

mod env;
mod fs;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::platform::Platform;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>>;
    fn open(&self, path: &Path) -> Result<Box<dyn std::io::Read + Send>>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Environment
    /// Create an empty file in the system temp directory and return its path.
    /// The caller owns the file and must remove it.
    fn create_temp_file(&self, prefix: &str) -> Result<PathBuf>;

    /// The `(os, arch)` pair of the running machine.
    fn host_platform(&self) -> Platform;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn create_file(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>> {
        self.create_file_impl(path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn std::io::Read + Send>> {
        self.open_impl(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.rename_impl(from, to)
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        self.copy_impl(from, to)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    fn create_temp_file(&self, prefix: &str) -> Result<PathBuf> {
        self.create_temp_file_impl(prefix)
    }

    fn host_platform(&self) -> Platform {
        self.host_platform_impl()
    }
}
