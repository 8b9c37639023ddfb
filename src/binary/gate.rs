use crate::platform::{BinaryDescriptor, Platform};

/// Exact `(os, arch)` match. Descriptors with an unknown field never match,
/// and there is no allowance for emulation.
pub fn is_compatible(descriptor: &BinaryDescriptor, host: &Platform) -> bool {
    descriptor.is_resolved() && descriptor == host
}

/// Decides whether binaries may be installed on a given host.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityGate {
    host: Platform,
}

impl CompatibilityGate {
    pub fn new(host: Platform) -> Self {
        Self { host }
    }

    pub fn host(&self) -> Platform {
        self.host
    }

    pub fn is_compatible(&self, descriptor: &BinaryDescriptor) -> bool {
        is_compatible(descriptor, &self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    const OSES: [Os; 4] = [Os::Linux, Os::Darwin, Os::Windows, Os::Unknown];
    const ARCHES: [Arch; 4] = [Arch::Amd64, Arch::Arm64, Arch::X86, Arch::Unknown];

    fn all_platforms() -> impl Iterator<Item = Platform> {
        OSES.into_iter()
            .flat_map(|os| ARCHES.into_iter().map(move |arch| Platform::new(os, arch)))
    }

    #[test]
    fn test_gate_is_reflexive_for_resolved_hosts() {
        for host in all_platforms().filter(Platform::is_resolved) {
            assert!(is_compatible(&host, &host), "{} vs itself", host);
        }
    }

    #[test]
    fn test_unknown_never_compatible() {
        for host in all_platforms() {
            assert!(!is_compatible(&Platform::UNKNOWN, &host), "unknown vs {}", host);
        }
    }

    #[test]
    fn test_partial_descriptor_is_not_a_wildcard() {
        let host = Platform::new(Os::Linux, Arch::Amd64);
        assert!(!is_compatible(&Platform::new(Os::Linux, Arch::Unknown), &host));
        assert!(!is_compatible(&Platform::new(Os::Unknown, Arch::Amd64), &host));

        let partial_host = Platform::new(Os::Linux, Arch::Unknown);
        assert!(!is_compatible(&partial_host, &partial_host));
    }

    #[test]
    fn test_no_cross_arch_or_cross_os_match() {
        let host = Platform::new(Os::Darwin, Arch::Amd64);
        assert!(!is_compatible(&Platform::new(Os::Darwin, Arch::Arm64), &host));
        assert!(!is_compatible(&Platform::new(Os::Linux, Arch::Amd64), &host));
    }

    #[test]
    fn test_gate_uses_injected_host() {
        let gate = CompatibilityGate::new(Platform::new(Os::Windows, Arch::X86));
        assert_eq!(gate.host(), Platform::new(Os::Windows, Arch::X86));
        assert!(gate.is_compatible(&Platform::new(Os::Windows, Arch::X86)));
        assert!(!gate.is_compatible(&Platform::new(Os::Windows, Arch::Amd64)));
    }
}
