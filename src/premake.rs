use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::Context;

use crate::platform::Platform;

/// Wrapper around the vendored `premake5` executable of one platform
pub struct Premake {
    path: PathBuf,
    platform: Platform,
}

impl Premake {
    /// Locates the premake executable for `platform` under the vendor directory
    pub fn locate(vendor_dir: &Path, platform: Platform) -> Self {
        let path = vendor_dir
            .join(platform.vendor_dir())
            .join(platform.executable_name());

        Self { path, platform }
    }

    /// Returns the default vendor directory, next to the launcher itself
    pub fn default_vendor_dir() -> anyhow::Result<PathBuf> {
        let exe = std::env::current_exe().context("Failed to locate the launcher executable")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("The launcher executable has no parent directory"))?;

        Ok(dir.join("vendor").join("bin").join("premake"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets the executable permission bits where the platform requires them.
    ///
    /// The vendored binaries are checked out without the executable bit,
    /// so on Darwin and Linux it has to be set before the first run.
    pub fn ensure_executable(&self) -> anyhow::Result<()> {
        if !self.platform.needs_executable_bit() {
            return Ok(());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = self.path.metadata().with_context(|| {
                format!("Failed to find the premake executable `{}`", self.path.display())
            })?;
            let mut permissions = metadata.permissions();
            permissions.set_mode(0o777);

            std::fs::set_permissions(&self.path, permissions).with_context(|| {
                format!(
                    "Failed to make the premake executable `{}` executable",
                    self.path.display()
                )
            })?;
        }

        Ok(())
    }

    /// Runs premake with the given action and waits for it to exit
    pub fn run(&self, action: &str) -> anyhow::Result<ExitStatus> {
        Command::new(&self.path)
            .arg(action)
            .status()
            .with_context(|| format!("Failed to execute `{}`", self.path.display()))
    }
}
