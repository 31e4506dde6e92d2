use clap::CommandFactory;
use crate::commands;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "gqlbind", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Path to a TOML config file with `[synthesis]` and/or \
             `[extraction]` tables. Flags override values from the file.",
        long,
    )]
    pub config: Option<PathBuf>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
