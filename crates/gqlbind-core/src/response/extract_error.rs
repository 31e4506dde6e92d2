use thiserror::Error;

/// Failures while pulling an operation's result out of a response. Each one
/// carries enough context (status code, or the path that failed to decode)
/// to be logged or surfaced as-is.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to decode the result at `{path}`: {reason}")]
    DecodeMismatch {
        path: String,
        reason: String,
    },

    #[error("Response does not contain a payload")]
    EmptyPayload,

    #[error("Failed to read the response body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response payload is not valid JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error(
        "Server reported errors and no data for operation `{operation_name}`: {}",
        .messages.join("; ")
    )]
    ServerErrors {
        messages: Vec<String>,
        operation_name: String,
    },

    #[error("Unexpected HTTP response status code: {status}")]
    UnexpectedStatus {
        status: u16,
    },
}
