use crate::ExtractionOptions;
use crate::response::ExtractError;
use crate::response::shape_check;
use crate::types::FieldEnumerable;
use crate::types::TypeShape;
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;
use std::io::Read;

type Result<T> = std::result::Result<T, ExtractError>;

/// Pulls the result of one named operation out of a response payload.
///
/// Like [`DocumentSynthesizer`](crate::operation::DocumentSynthesizer) it
/// holds only its options and can be shared freely. Response bodies are
/// taken by value, so whatever reader backs them is dropped on every exit
/// path.
#[derive(Clone, Debug, Default)]
pub struct ResponseExtractor {
    options: ExtractionOptions,
}
impl ResponseExtractor {
    pub fn new(options: ExtractionOptions) -> Self {
        Self {
            options,
        }
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Decode the result of `operation_name` into `T`.
    ///
    /// Returns `Ok(None)` when the operation's entry is missing or null: the
    /// operation ran but produced no data.
    ///
    /// ```rust
    /// use gqlbind_core::response::ResponseExtractor;
    ///
    /// let body = br#"{"getCount": 3, "other": null}"#;
    /// let count: Option<i32> =
    ///     ResponseExtractor::default()
    ///         .extract(200, Some(&body[..]), "getCount")
    ///         .unwrap();
    /// assert_eq!(count, Some(3));
    /// ```
    pub fn extract<T, R>(
        &self,
        status: u16,
        body: Option<R>,
        operation_name: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned + FieldEnumerable,
        R: Read,
    {
        let result_shape = T::type_shape();
        let Some(result) = self.extract_value(status, body, operation_name, &result_shape)? else {
            return Ok(None);
        };

        decode(result, operation_name).map(Some)
    }

    /// Like [`extract()`](Self::extract), but for callers that only have a
    /// [`TypeShape`]: returns the operation's JSON sub-tree once it has been
    /// checked against `result_shape`.
    pub fn extract_value<R: Read>(
        &self,
        status: u16,
        body: Option<R>,
        operation_name: &str,
        result_shape: &TypeShape,
    ) -> Result<Option<serde_json::Value>> {
        let payload = self.read_payload(status, body)?;
        let Some(result) = self.locate_result(payload, operation_name)? else {
            return Ok(None);
        };

        shape_check::check(result_shape, &result, operation_name)?;
        Ok(Some(result))
    }

    fn read_payload<R: Read>(
        &self,
        status: u16,
        body: Option<R>,
    ) -> Result<serde_json::Value> {
        if !self.options.success_statuses.contains(&status) {
            return Err(ExtractError::UnexpectedStatus {
                status,
            });
        }

        let mut body = body.ok_or(ExtractError::EmptyPayload)?;
        let mut bytes = vec![];
        body.read_to_end(&mut bytes)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ExtractError::EmptyPayload);
        }

        serde_json::from_slice(&bytes).map_err(ExtractError::MalformedPayload)
    }

    fn locate_result(
        &self,
        mut payload: serde_json::Value,
        operation_name: &str,
    ) -> Result<Option<serde_json::Value>> {
        let server_errors = server_error_messages(&payload);

        let result =
            self.locate_container(&mut payload)?
                .and_then(|container| container.get_mut(operation_name))
                .map(serde_json::Value::take)
                .filter(|result| !result.is_null());

        match result {
            Some(result) => {
                if !server_errors.is_empty() {
                    log::warn!(
                        "Operation `{operation_name}` returned data alongside \
                        server errors: {server_errors:?}",
                    );
                }
                Ok(Some(result))
            },

            None if !server_errors.is_empty() && self.options.surface_server_errors =>
                Err(ExtractError::ServerErrors {
                    messages: server_errors,
                    operation_name: operation_name.to_string(),
                }),

            None => {
                if !server_errors.is_empty() {
                    log::warn!(
                        "Discarding server errors for operation \
                        `{operation_name}`: {server_errors:?}",
                    );
                }
                log::debug!("Operation `{operation_name}` returned no data.");
                Ok(None)
            },
        }
    }

    /// Follow `response_path` to the object holding per-operation entries.
    /// A missing or null container means no data; anything else that is not
    /// an object is a mismatch.
    fn locate_container<'payload>(
        &self,
        payload: &'payload mut serde_json::Value,
    ) -> Result<Option<&'payload mut serde_json::Value>> {
        let response_path = &self.options.response_path;
        let mut container = payload;
        for (depth, segment) in response_path.iter().enumerate() {
            if !is_container(container, &response_path[..depth])? {
                return Ok(None);
            }
            let Some(next) = container.get_mut(segment.as_str()) else {
                return Ok(None);
            };
            container = next;
        }

        Ok(is_container(container, response_path)?.then_some(container))
    }
}

fn is_container(json: &serde_json::Value, path: &[String]) -> Result<bool> {
    match json {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Object(_) => Ok(true),
        other => {
            let path =
                if path.is_empty() {
                    "<root>".to_string()
                } else {
                    path.join(".")
                };
            Err(shape_check::mismatch(&path, format!(
                "expected an object, found {}",
                shape_check::json_kind(other),
            )))
        },
    }
}

/// Decode through [`serde_path_to_error`] so a failure names the field that
/// could not be decoded, rooted at the operation name.
fn decode<T: DeserializeOwned>(
    result: serde_json::Value,
    operation_name: &str,
) -> Result<T> {
    serde_path_to_error::deserialize(result).map_err(|err| {
        let mut path = operation_name.to_string();
        for segment in err.path().iter() {
            match segment {
                Segment::Seq { index } => path.push_str(&format!("[{index}]")),
                Segment::Map { key } => path.push_str(&format!(".{key}")),
                Segment::Enum { variant } => path.push_str(&format!(".{variant}")),
                Segment::Unknown => path.push_str(".?"),
            }
        }

        let reason = err.into_inner().to_string();
        // Missing fields are reported on their enclosing object.
        if let Some(field_name) = missing_field_name(&reason) {
            path.push('.');
            path.push_str(field_name);
        }
        ExtractError::DecodeMismatch {
            path,
            reason,
        }
    })
}

fn missing_field_name(reason: &str) -> Option<&str> {
    reason.strip_prefix("missing field `")?.strip_suffix('`')
}

fn server_error_messages(payload: &serde_json::Value) -> Vec<String> {
    payload.get("errors")
        .and_then(serde_json::Value::as_array)
        .map(|errors| errors.iter()
            .map(|error| error.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()))
            .collect())
        .unwrap_or_default()
}
