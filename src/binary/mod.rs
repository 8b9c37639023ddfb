//! Binary classification
//!
//! Decides what a downloaded file is and whether it may run here:
//!
//! - `sniff` - text vs. binary from the leading bytes
//! - `detect` - target `(os, arch)` from ELF, Mach-O or PE headers
//! - `gate` - exact match against the host platform

mod detect;
mod gate;
mod sniff;

#[cfg(test)]
pub(crate) mod fixtures;

use log::info;
use std::path::Path;

use crate::platform::{BinaryDescriptor, Platform};
use crate::runtime::Runtime;

pub use detect::{detect, detect_bytes};
pub use gate::{CompatibilityGate, is_compatible};
pub use sniff::{SNIFF_LEN, is_binary, looks_binary};

/// What should happen to a downloaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A binary built for this host.
    Executable(BinaryDescriptor),
    /// A binary built for some other platform, or one we could not identify.
    Incompatible {
        binary: BinaryDescriptor,
        host: Platform,
    },
    /// Not a binary at all.
    PlainFile,
}

/// Run the sniff, detect and gate stages over the file at `path`.
pub fn classify<R: Runtime>(runtime: &R, path: &Path, gate: &CompatibilityGate) -> Verdict {
    if !is_binary(runtime, path) {
        info!("{:?} is a text file", path);
        return Verdict::PlainFile;
    }

    let descriptor = detect(runtime, path);
    info!("{:?} is a binary for {}", path, descriptor);

    if gate.is_compatible(&descriptor) {
        Verdict::Executable(descriptor)
    } else {
        Verdict::Incompatible {
            binary: descriptor,
            host: gate.host(),
        }
    }
}
