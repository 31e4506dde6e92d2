use crate::DotPath;
use crate::operation::SelectionSetError;
use thiserror::Error;

/// Failures detected while synthesizing a document. All of them are raised
/// before any bytes leave the process.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Found multiple arguments named `{argument_name}` on this operation")]
    DuplicateArgumentName {
        argument_name: String,
    },

    #[error("Failed to serialize the request envelope: {0}")]
    EnvelopeSerialization(#[from] serde_json::Error),

    #[error("`{name}` is not a valid GraphQL name for {context}")]
    InvalidName {
        context: &'static str,
        name: String,
    },

    #[error("Argument `{argument_name}` holds a non-finite float at `{path}`")]
    NonFiniteFloat {
        argument_name: String,
        path: DotPath,
    },

    #[error(transparent)]
    SelectionSet(#[from] SelectionSetError),
}
