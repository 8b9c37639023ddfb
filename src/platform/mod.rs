//! Platform descriptors
//!
//! This module defines the `(os, arch)` pair used both for the machine
//! running the tool and for the target a downloaded binary was built for.

mod detection;

use std::fmt;

/// Operating system family a binary targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Os {
    Linux,
    Darwin,
    Windows,
    #[default]
    Unknown,
}

/// CPU instruction set a binary targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arch {
    Amd64,
    Arm64,
    X86,
    #[default]
    Unknown,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
            Os::Windows => "windows",
            Os::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
            Arch::X86 => "x86",
            Arch::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// An `(os, arch)` pair.
///
/// The default value is fully unknown. `Unknown` is never produced by a
/// successful header match, so it stays distinguishable from real targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

/// What the format detector reports for a downloaded binary.
pub type BinaryDescriptor = Platform;

impl Platform {
    pub const UNKNOWN: Platform = Platform {
        os: Os::Unknown,
        arch: Arch::Unknown,
    };

    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Both fields are known.
    pub fn is_resolved(&self) -> bool {
        self.os != Os::Unknown && self.arch != Arch::Unknown
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
