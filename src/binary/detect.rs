use goblin::elf::Elf;
use goblin::elf::header::{EM_AARCH64, EM_X86_64};
use goblin::mach::Mach;
use goblin::mach::cputype::{CPU_TYPE_ARM64, CPU_TYPE_X86_64};
use goblin::pe::header::{COFF_MACHINE_X86, COFF_MACHINE_X86_64, Header as PeHeader};
use log::debug;
use std::io::Read;
use std::path::Path;

use crate::platform::{Arch, BinaryDescriptor, Os, Platform};
use crate::runtime::Runtime;

/// A probe opens `bytes` as one container format. `Err` means the bytes are
/// not that format; `Ok` carries the descriptor read from its header.
type Probe = fn(&[u8]) -> goblin::error::Result<BinaryDescriptor>;

/// Probes in the order they are attempted. Container magics are mutually
/// exclusive, so the order only decides which parser runs first.
const PROBES: [(&str, Probe); 3] = [
    ("ELF", probe_elf),
    ("Mach-O", probe_macho),
    ("PE", probe_pe),
];

fn probe_elf(bytes: &[u8]) -> goblin::error::Result<BinaryDescriptor> {
    let header = Elf::parse_header(bytes)?;
    let arch = match header.e_machine {
        EM_X86_64 => Arch::Amd64,
        EM_AARCH64 => Arch::Arm64,
        other => {
            debug!("Unsupported ELF machine {}", other);
            return Ok(Platform::UNKNOWN);
        }
    };
    Ok(Platform::new(Os::Linux, arch))
}

fn probe_macho(bytes: &[u8]) -> goblin::error::Result<BinaryDescriptor> {
    let macho = match Mach::parse(bytes)? {
        Mach::Binary(macho) => macho,
        Mach::Fat(_) => {
            debug!("Universal Mach-O binaries are not supported");
            return Ok(Platform::UNKNOWN);
        }
    };
    let arch = match macho.header.cputype {
        CPU_TYPE_X86_64 => Arch::Amd64,
        CPU_TYPE_ARM64 => Arch::Arm64,
        other => {
            debug!("Unsupported Mach-O cputype {:#x}", other);
            return Ok(Platform::UNKNOWN);
        }
    };
    Ok(Platform::new(Os::Darwin, arch))
}

fn probe_pe(bytes: &[u8]) -> goblin::error::Result<BinaryDescriptor> {
    let header = PeHeader::parse(bytes)?;
    let arch = match header.coff_header.machine {
        COFF_MACHINE_X86_64 => Arch::Amd64,
        COFF_MACHINE_X86 => Arch::X86,
        other => {
            debug!("Unsupported PE machine {:#x}", other);
            return Ok(Platform::UNKNOWN);
        }
    };
    Ok(Platform::new(Os::Windows, arch))
}

/// Identify the target platform of an in-memory executable.
///
/// The first probe that recognizes the container decides the result; a
/// machine type outside the supported table yields [`Platform::UNKNOWN`].
pub fn detect_bytes(bytes: &[u8]) -> BinaryDescriptor {
    for (name, probe) in PROBES {
        match probe(bytes) {
            Ok(descriptor) => {
                debug!("Parsed as {}: {}", name, descriptor);
                return descriptor;
            }
            Err(e) => debug!("Not {}: {}", name, e),
        }
    }
    Platform::UNKNOWN
}

/// Identify the target platform of the executable at `path`.
/// Unreadable files are reported as [`Platform::UNKNOWN`].
#[tracing::instrument(skip(runtime))]
pub fn detect<R: Runtime>(runtime: &R, path: &Path) -> BinaryDescriptor {
    let mut file = match runtime.open(path) {
        Ok(f) => f,
        Err(e) => {
            debug!("Cannot open {:?} for format detection: {:#}", path, e);
            return Platform::UNKNOWN;
        }
    };

    let mut buffer = Vec::new();
    if let Err(e) = file.read_to_end(&mut buffer) {
        debug!("Cannot read {:?} for format detection: {}", path, e);
        return Platform::UNKNOWN;
    }

    detect_bytes(&buffer)
}
