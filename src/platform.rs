use std::fmt;

/// Platform family of the machine the vendored premake binaries were built for.
///
/// The variant names follow the directory names used by the vendor tree
/// (`vendor/bin/premake/Windows`, `.../Darwin`, `.../Linux`).
#[derive(clap::ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    Windows,
    Darwin,
    Linux,
}

impl Platform {
    /// Detects the platform family of the host.
    pub fn detect() -> anyhow::Result<Self> {
        Self::from_os(std::env::consts::OS)
            .ok_or_else(|| anyhow::anyhow!("Unsupported platform `{}`", std::env::consts::OS))
    }

    /// Maps an OS name as reported by `std::env::consts::OS` to a platform family
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "windows" => Some(Self::Windows),
            "macos" => Some(Self::Darwin),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Returns the name of the per-platform directory in the vendor tree
    pub fn vendor_dir(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Darwin => "Darwin",
            Self::Linux => "Linux",
        }
    }

    /// Returns the file name of the premake executable on this platform
    pub fn executable_name(self) -> &'static str {
        match self {
            Self::Windows => "premake5.exe",
            Self::Darwin | Self::Linux => "premake5",
        }
    }

    /// Whether the executable permission bits must be set before execution.
    ///
    /// Windows does not gate executability on a POSIX permission bit.
    pub fn needs_executable_bit(self) -> bool {
        !matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vendor_dir())
    }
}
