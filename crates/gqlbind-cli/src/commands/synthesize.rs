use anyhow::Context;
use crate::config;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlbind::operation::DocumentSynthesizer;
use gqlbind::operation::OperationCall;
use gqlbind::operation::OperationKind;
use gqlbind::operation::VarMarkers;
use gqlbind::operation::Variable;
use gqlbind::types::ScalarKind;
use gqlbind::types::TypeShape;
use gqlbind::Value;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SynthesizeCmd {
    #[arg(
        help="Kind of operation: `query`, `mutation` or `subscription`.",
        long,
    )]
    kind: OperationKind,

    #[arg(
        help="Name of the operation to call.",
        long,
    )]
    operation: String,

    #[arg(
        help="Path to a JSON array of arguments, each an object with `name` \
             and `value` plus optional `alias`, `ignore` and `raw` markers.",
        long,
    )]
    variables: Option<PathBuf>,

    #[arg(
        help="Path to a JSON shape descriptor for the operation's result.",
        long,
        required_unless_present="selection_set",
    )]
    shape: Option<PathBuf>,

    #[arg(
        help="Literal selection set to use instead of one generated from \
             --shape.",
        long,
    )]
    selection_set: Option<String>,

    #[arg(
        help="Name of the envelope's single field.",
        long,
    )]
    envelope_field: Option<String>,

    #[arg(
        help="Pretty-print the envelope JSON.",
        long,
    )]
    pretty: bool,
}
impl SynthesizeCmd {
    fn synthesize(&self, cli: &Cli) -> anyhow::Result<String> {
        let mut options = config::load(cli.config.as_deref())?.synthesis;
        if let Some(envelope_field) = &self.envelope_field {
            options.envelope_field = envelope_field.to_owned();
        }
        if self.pretty {
            options.pretty_envelope = true;
        }

        let result_shape = match &self.shape {
            Some(path) => TypeShape::from_descriptor(&super::read_json_file(path)?)?,
            // Only reachable with --selection-set, which replaces the
            // generated selection set entirely.
            None => TypeShape::Scalar(ScalarKind::Any),
        };

        let mut call = OperationCall::with_result_shape(
            self.kind,
            self.operation.as_str(),
            result_shape,
        );
        if let Some(literal) = &self.selection_set {
            call = call.with_selection_set(literal.as_str());
        }

        if let Some(path) = &self.variables {
            let specs: Vec<VariableSpec> =
                serde_json::from_value(super::read_json_file(path)?)
                    .with_context(|| format!(
                        "{path:#?} must hold an array of `{{name, value}}` objects",
                    ))?;
            log::debug!("Loaded {} arguments from {path:#?}.", specs.len());
            for spec in specs {
                call = call.add_variable(spec.into_variable())?;
            }
        }

        let envelope = DocumentSynthesizer::new(options).synthesize(&call)?;
        Ok(String::from_utf8(envelope)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for SynthesizeCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        match self.synthesize(&cli) {
            Ok(envelope) => CommandResult::stdout(format_args!("{envelope}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to synthesize `{}`: {err:#}",
                output_utils::RED_X,
                self.operation,
            )),
        }
    }
}

/// One entry of a `--variables` file.
#[derive(Debug, serde::Deserialize)]
struct VariableSpec {
    name: String,
    value: serde_json::Value,
    #[serde(flatten)]
    markers: VarMarkers,
}
impl VariableSpec {
    fn into_variable(self) -> Variable {
        let value = Value::from(self.value);
        let declared_shape = TypeShape::inferred_from(&value);
        Variable::from_parts(self.name, value, declared_shape)
            .with_markers(self.markers)
    }
}
