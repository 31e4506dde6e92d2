use crate::types::FieldShape;
use crate::types::ObjectShape;
use crate::types::ScalarKind;
use crate::types::TypeShape;
use thiserror::Error;

impl TypeShape {
    /// Build a [`TypeShape`] from an explicit JSON schema descriptor, for
    /// callers that have no Rust type to derive one from.
    ///
    /// * A JSON object describes an (anonymous) structured type; each entry
    ///   describes one field.
    /// * A single-element JSON array describes a list of its element.
    /// * `true` or `null` describe a scalar of unknown kind.
    /// * One of the strings `"Boolean"`, `"Float"`, `"ID"`, `"Int"`,
    ///   `"String"` or `"Any"` describes that scalar kind.
    ///
    /// ```rust
    /// use gqlbind_core::types::TypeShape;
    ///
    /// let shape = TypeShape::from_descriptor(&serde_json::json!({
    ///     "foo": "String",
    ///     "nested": { "inner": true },
    /// })).unwrap();
    /// assert!(shape.is_structured());
    /// ```
    pub fn from_descriptor(
        descriptor: &serde_json::Value,
    ) -> Result<Self, ShapeDescriptorError> {
        Self::from_descriptor_impl(descriptor, "$")
    }

    fn from_descriptor_impl(
        descriptor: &serde_json::Value,
        path: &str,
    ) -> Result<Self, ShapeDescriptorError> {
        match descriptor {
            serde_json::Value::Null | serde_json::Value::Bool(true) =>
                Ok(Self::Scalar(ScalarKind::Any)),

            serde_json::Value::String(name) =>
                ScalarKind::from_graphql_name(name)
                    .map(Self::Scalar)
                    .ok_or_else(|| ShapeDescriptorError {
                        path: path.to_string(),
                        reason: format!("unknown scalar kind `{name}`"),
                    }),

            serde_json::Value::Array(items) => match items.as_slice() {
                [element] => Ok(Self::list(
                    Self::from_descriptor_impl(element, &format!("{path}[]"))?,
                )),
                _ => Err(ShapeDescriptorError {
                    path: path.to_string(),
                    reason: format!(
                        "list descriptors take exactly one element, found {}",
                        items.len(),
                    ),
                }),
            },

            serde_json::Value::Object(entries) => {
                let mut fields = Vec::with_capacity(entries.len());
                for (name, field_descriptor) in entries {
                    let field_shape = Self::from_descriptor_impl(
                        field_descriptor,
                        &format!("{path}.{name}"),
                    )?;
                    fields.push(FieldShape::resolved(name.as_str(), field_shape));
                }
                Ok(Self::Object(ObjectShape::anonymous(fields)))
            },

            other => Err(ShapeDescriptorError {
                path: path.to_string(),
                reason: format!("unsupported descriptor value `{other}`"),
            }),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Invalid shape descriptor at `{path}`: {reason}")]
pub struct ShapeDescriptorError {
    pub path: String,
    pub reason: String,
}
