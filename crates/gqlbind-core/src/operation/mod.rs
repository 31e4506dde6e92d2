pub mod argument_encoder;
mod document_synthesizer;
mod operation_call;
mod operation_kind;
pub mod selection_set;
mod selection_set_error;
mod synthesis_error;
mod var_markers;
mod variable;

pub use document_synthesizer::DocumentSynthesizer;
pub use operation_call::OperationCall;
pub use operation_kind::OperationKind;
pub use operation_kind::UnknownOperationKind;
pub use selection_set_error::SelectionSetError;
pub use synthesis_error::SynthesisError;
pub use var_markers::VarMarkers;
pub use variable::Variable;

#[cfg(test)]
mod tests;
