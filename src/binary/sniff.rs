use log::debug;
use std::io::Read;
use std::path::Path;

use crate::runtime::Runtime;

/// Number of leading bytes inspected when sniffing a file.
pub const SNIFF_LEN: usize = 1024;

/// True if `prefix` holds a NUL byte within its first [`SNIFF_LEN`] bytes.
pub fn looks_binary(prefix: &[u8]) -> bool {
    prefix.iter().take(SNIFF_LEN).any(|&b| b == 0)
}

/// Check whether the file at `path` is binary content rather than text.
///
/// Only the first [`SNIFF_LEN`] bytes are read. A file that cannot be opened
/// or read is reported as text, so it takes the plain-file route.
#[tracing::instrument(skip(runtime))]
pub fn is_binary<R: Runtime>(runtime: &R, path: &Path) -> bool {
    let reader = match runtime.open(path) {
        Ok(r) => r,
        Err(e) => {
            debug!("Cannot open {:?} for sniffing: {:#}", path, e);
            return false;
        }
    };

    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    if let Err(e) = reader.take(SNIFF_LEN as u64).read_to_end(&mut prefix) {
        debug!("Cannot read {:?} for sniffing: {}", path, e);
        return false;
    }

    looks_binary(&prefix)
}
