/// Controls how a synthesized document is wrapped for transport.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SynthesisOptions {
    /// Name of the envelope's single field, conventionally `query`.
    pub envelope_field: String,

    /// Pretty-print the envelope JSON instead of emitting it compactly.
    pub pretty_envelope: bool,
}
impl std::default::Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            envelope_field: "query".to_string(),
            pretty_envelope: false,
        }
    }
}

/// Controls where and how a response payload is searched for an
/// operation's result.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Keys leading from the payload root to the object that holds one entry
    /// per operation name. Empty means the payload root itself; servers that
    /// wrap results use `["data"]`.
    pub response_path: Vec<String>,

    /// Transport status codes treated as success.
    pub success_statuses: Vec<u16>,

    /// Fail with the server's reported errors (instead of returning an empty
    /// result) when the payload carries a non-empty `errors` list and no
    /// data for the operation.
    pub surface_server_errors: bool,
}
impl std::default::Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            response_path: vec![],
            success_statuses: vec![200],
            surface_server_errors: false,
        }
    }
}

/// Aggregate configuration, as loaded from a config file.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GqlbindConfig {
    pub extraction: ExtractionOptions,
    pub synthesis: SynthesisOptions,
}
