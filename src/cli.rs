use std::path::PathBuf;

use clap::ColorChoice;

use crate::platform::Platform;

#[derive(clap::Parser)]
#[command(name = "projectgen", version, author, about, long_about)]
pub struct Args {
    /// Build environment given to premake (e.g., `vs2022`, `gmake2`, `xcode4`)
    #[clap(value_name = "ACTION")]
    pub action: String,

    /// Run the premake binary of this platform instead of the detected host platform
    #[clap(long, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Look for the vendored premake binaries in this directory
    #[clap(long, value_name = "PATH")]
    pub premake_dir: Option<PathBuf>,

    /// Color preferences for program output
    #[clap(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,
}

impl Args {
    /// Returns the platform given on the command line or the detected host platform if none is provided
    pub fn platform(&self) -> anyhow::Result<Platform> {
        self.platform.map_or_else(Platform::detect, Ok)
    }
}
