use anyhow::Context;
use crate::config;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlbind::response::ResponseExtractor;
use gqlbind::types::ScalarKind;
use gqlbind::types::TypeShape;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractCmd {
    #[arg(
        help="Name of the operation whose result should be extracted.",
        long,
    )]
    operation: String,

    #[arg(
        default_value_t=200,
        help="Transport status code the response arrived with.",
        long,
    )]
    status: u16,

    #[arg(
        help="Path to a JSON shape descriptor to check the result against.",
        long,
    )]
    shape: Option<PathBuf>,

    #[arg(
        help="Key leading from the payload root toward the object holding \
             per-operation results (e.g. `data`). Repeat for deeper paths.",
        long,
    )]
    response_path: Option<Vec<String>>,

    #[arg(
        help="Fail with the server's reported errors when the payload has \
             no data for the operation.",
        long,
    )]
    surface_server_errors: bool,

    #[arg(
        help="File holding the response body. Reads stdin when omitted.",
        name="RESPONSE_FILE",
    )]
    response_file: Option<PathBuf>,
}
impl ExtractCmd {
    fn extract(&self, cli: &Cli) -> anyhow::Result<String> {
        let mut options = config::load(cli.config.as_deref())?.extraction;
        if let Some(response_path) = &self.response_path {
            options.response_path = response_path.to_owned();
        }
        if self.surface_server_errors {
            options.surface_server_errors = true;
        }

        let result_shape = match &self.shape {
            Some(path) => TypeShape::from_descriptor(&super::read_json_file(path)?)?,
            None => TypeShape::Scalar(ScalarKind::Any),
        };

        let body: Box<dyn Read> = match &self.response_file {
            Some(path) => Box::new(
                std::fs::File::open(path)
                    .with_context(|| format!("Failed to open {path:#?}"))?,
            ),
            None => Box::new(std::io::stdin().lock()),
        };

        let extractor = ResponseExtractor::new(options);
        match extractor.extract_value(self.status, Some(body), &self.operation, &result_shape)? {
            Some(result) => Ok(serde_json::to_string_pretty(&result)?),
            None => {
                log::debug!("No result for `{}` in the response.", self.operation);
                Ok("null".to_string())
            },
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExtractCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self.extract(&cli) {
            Ok(result) => CommandResult::stdout(format_args!("{result}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to extract `{}`: {err:#}",
                output_utils::RED_X,
                self.operation,
            )),
        }
    }
}
