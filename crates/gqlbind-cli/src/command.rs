use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports what to print and the
/// process exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
