mod extract;
mod synthesize;

use crate::Cli;
use crate::CommandResult;
use extract::ExtractCmd;
use synthesize::SynthesizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlbind")]
pub(crate) enum CommandEnum {
    /// Read a transport response and print the operation's result as JSON.
    Extract(Box<ExtractCmd>),

    /// Build a request envelope for a single operation call.
    Synthesize(Box<SynthesizeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Extract(cmd) => cmd.run(cli).await,
            Self::Synthesize(cmd) => cmd.run(cli).await,
        }
    }
}

fn read_json_file(path: &std::path::Path) -> anyhow::Result<serde_json::Value> {
    use anyhow::Context;

    log::debug!("Reading {path:#?}.");
    let file =
        std::fs::File::open(path)
            .with_context(|| format!("Failed to open {path:#?}"))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {path:#?} as JSON"))
}
