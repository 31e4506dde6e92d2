//! Translate strongly-typed calls into GraphQL request documents, and pull
//! typed results for a named operation back out of the response.
//!
//! ```rust
//! use gqlbind_core::operation::OperationCall;
//! use gqlbind_core::operation::OperationKind;
//! use gqlbind_core::operation::Variable;
//!
//! let call =
//!     OperationCall::new::<Vec<String>>(OperationKind::Query, "tags")
//!         .with_selection_set("{name}")
//!         .add_variable(Variable::new("prefix", "gq"))
//!         .unwrap();
//!
//! let envelope = gqlbind_core::synthesize(&call).unwrap();
//! assert_eq!(
//!     String::from_utf8(envelope).unwrap(),
//!     r#"{"query":"query{tags(prefix: \"gq\") {name}}"}"#,
//! );
//! ```

pub mod _macro_runtime;
mod dot_path;
pub mod introspect;
pub mod operation;
mod options;
pub mod response;
pub mod types;
mod value;

pub use dot_path::DotPath;
pub use options::ExtractionOptions;
pub use options::GqlbindConfig;
pub use options::SynthesisOptions;
pub use value::Value;

use operation::DocumentSynthesizer;
use operation::OperationCall;
use operation::SynthesisError;
use response::ExtractError;
use response::ResponseExtractor;
use serde::de::DeserializeOwned;
use std::io::Read;
use types::FieldEnumerable;

/// Synthesize the request envelope for `call` using default
/// [`SynthesisOptions`].
pub fn synthesize(call: &OperationCall) -> Result<Vec<u8>, SynthesisError> {
    DocumentSynthesizer::default().synthesize(call)
}

/// Extract the result of `operation_name` using default
/// [`ExtractionOptions`].
pub fn extract<T, R>(
    status: u16,
    body: Option<R>,
    operation_name: &str,
) -> Result<Option<T>, ExtractError>
where
    T: DeserializeOwned + FieldEnumerable,
    R: Read,
{
    ResponseExtractor::default().extract(status, body, operation_name)
}

#[cfg(test)]
mod tests;
