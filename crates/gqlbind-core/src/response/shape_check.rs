use crate::response::ExtractError;
use crate::types::TypeShape;

type Result<T> = std::result::Result<T, ExtractError>;

/// Walk `json` alongside `shape` and report the first place where the
/// response's structure disagrees with the declared result type.
///
/// Nulls are accepted everywhere and fields the response leaves out are not
/// reported; whether either is acceptable is for the decoder to decide.
pub(crate) fn check(
    shape: &TypeShape,
    json: &serde_json::Value,
    path: &str,
) -> Result<()> {
    if json.is_null() {
        return Ok(());
    }

    match shape {
        TypeShape::Scalar(kind) =>
            if kind.accepts(json) {
                Ok(())
            } else {
                Err(mismatch(path, format!(
                    "expected {}, found {}",
                    kind.graphql_name(),
                    json_kind(json),
                )))
            },

        TypeShape::List(inner) => {
            let items = json.as_array().ok_or_else(|| mismatch(path, format!(
                "expected a list, found {}",
                json_kind(json),
            )))?;
            for (idx, item) in items.iter().enumerate() {
                check(inner, item, &format!("{path}[{idx}]"))?;
            }
            Ok(())
        },

        TypeShape::Object(object_shape) => {
            let entries = json.as_object().ok_or_else(|| mismatch(path, format!(
                "expected an object, found {}",
                json_kind(json),
            )))?;
            for field in object_shape.fields() {
                if let Some(field_json) = entries.get(field.name()) {
                    check(
                        &field.shape(),
                        field_json,
                        &format!("{path}.{}", field.name()),
                    )?;
                }
            }
            Ok(())
        },
    }
}

pub(crate) fn mismatch(path: &str, reason: String) -> ExtractError {
    ExtractError::DecodeMismatch {
        path: path.to_string(),
        reason,
    }
}

pub(crate) fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(num) if num.is_f64() => "a float",
        serde_json::Value::Number(_) => "an integer",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
