use super::{Arch, Os, Platform};

impl Platform {
    /// Detect the platform this process was compiled for.
    pub fn host() -> Self {
        Self {
            os: Self::host_os(),
            arch: Self::host_arch(),
        }
    }

    fn host_os() -> Os {
        #[cfg(target_os = "macos")]
        {
            Os::Darwin
        }
        #[cfg(target_os = "linux")]
        {
            Os::Linux
        }
        #[cfg(target_os = "windows")]
        {
            Os::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            Os::Unknown
        }
    }

    fn host_arch() -> Arch {
        #[cfg(target_arch = "x86_64")]
        {
            Arch::Amd64
        }
        #[cfg(target_arch = "aarch64")]
        {
            Arch::Arm64
        }
        #[cfg(target_arch = "x86")]
        {
            Arch::X86
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "x86")))]
        {
            Arch::Unknown
        }
    }
}
