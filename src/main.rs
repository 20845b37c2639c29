use std::process::ExitStatus;

use clap::ColorChoice;
use clap::Parser;

use console::style;

mod cli;
mod platform;
mod premake;

use crate::cli::Args;
use crate::premake::Premake;

struct ProjectGen {
    premake: Premake,
    action: String,
}

impl TryFrom<Args> for ProjectGen {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let platform = args.platform()?;

        let vendor_dir = match args.premake_dir {
            Some(dir) => dir,
            None => Premake::default_vendor_dir()?,
        };

        let premake = Premake::locate(&vendor_dir, platform);

        Ok(Self {
            premake,
            action: args.action,
        })
    }
}

impl ProjectGen {
    pub fn run(&self) -> anyhow::Result<ExitStatus> {
        println!(
            "{:>12} {} {}",
            style("Running").bold().green(),
            self.premake.path().display(),
            self.action
        );

        self.premake.ensure_executable()?;
        self.premake.run(&self.action)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.color {
        ColorChoice::Always => console::set_colors_enabled(true),
        ColorChoice::Never => console::set_colors_enabled(false),
        ColorChoice::Auto => (),
    }

    let projectgen = ProjectGen::try_from(args)?;
    let status = projectgen.run()?;

    std::process::exit(status.code().unwrap_or_default());
}
