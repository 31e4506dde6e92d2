use crate::operation::argument_encoder;
use crate::operation::selection_set;
use crate::operation::OperationCall;
use crate::operation::SynthesisError;
use crate::SynthesisOptions;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Turns [`OperationCall`]s into request envelopes.
///
/// Holds nothing but its options, so a single instance can be shared across
/// threads and reused for any number of calls. Output is a pure function of
/// the options and the call.
#[derive(Clone, Debug, Default)]
pub struct DocumentSynthesizer {
    options: SynthesisOptions,
}
impl DocumentSynthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        Self {
            options,
        }
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Render the document string for `call`:
    /// `<kind>{<name>(<arguments>) <selection set>}`.
    pub fn document(&self, call: &OperationCall) -> Result<String> {
        validate_name(call.name(), "an operation name")?;
        for variable in call.variables() {
            validate_name(variable.argument_name(), "an argument name")?;
        }

        let selection_set = selection_set::generate(
            call.result_shape(),
            call.selection_set_override(),
        )?;
        let arguments = argument_encoder::encode_arguments(call.variables())?;

        Ok(format!(
            "{}{{{}{arguments} {selection_set}}}",
            call.kind().keyword(),
            call.name(),
        ))
    }

    /// Render `call` and wrap it in the request envelope: a JSON object whose
    /// single field holds the document.
    pub fn synthesize(&self, call: &OperationCall) -> Result<Vec<u8>> {
        let document = self.document(call)?;
        log::trace!(
            "Synthesized {} `{}` document ({} bytes): {document}",
            call.kind(),
            call.name(),
            document.len(),
        );

        let mut envelope = serde_json::Map::with_capacity(1);
        envelope.insert(
            self.options.envelope_field.to_owned(),
            serde_json::Value::String(document),
        );

        Ok(if self.options.pretty_envelope {
            serde_json::to_vec_pretty(&envelope)?
        } else {
            serde_json::to_vec(&envelope)?
        })
    }
}

/// Lexical check against GraphQL's `Name` production:
/// `[_A-Za-z][_0-9A-Za-z]*`.
fn validate_name(name: &str, context: &'static str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() =>
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric()),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(SynthesisError::InvalidName {
            context,
            name: name.to_string(),
        })
    }
}
