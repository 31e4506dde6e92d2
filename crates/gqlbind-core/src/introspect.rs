//! Ordered field enumeration over runtime values and declared shapes.
//!
//! Both directions of a call (argument encoding and selection set
//! derivation) walk fields through this module, so both observe the same
//! ordering: ascending by field name, independent of declaration order.

use crate::types::TypeShape;
use crate::Value;
use std::borrow::Cow;

/// One field of a structured [`Value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldEntry<'a> {
    pub name: &'a str,
    pub value: &'a Value,
}
impl FieldEntry<'_> {
    /// Absent fields are still enumerated; whether absence means omission
    /// is left to the caller.
    pub fn is_absent(&self) -> bool {
        self.value.is_null()
    }
}

/// The fields of `value` in ascending order of name. Values without
/// sub-fields of their own enumerate as empty.
pub fn value_fields(value: &Value) -> Vec<FieldEntry<'_>> {
    match value {
        Value::Object(fields) =>
            fields.iter()
                .map(|(name, value)| FieldEntry {
                    name: name.as_str(),
                    value,
                })
                .collect(),
        _ => vec![],
    }
}

/// The declared fields of `shape` (or of its list element type) in
/// ascending order of name, with each field's shape resolved.
pub fn shape_fields(shape: &TypeShape) -> Vec<(&str, Cow<'_, TypeShape>)> {
    match shape.innermost() {
        TypeShape::Object(object_shape) =>
            object_shape.fields()
                .iter()
                .map(|field| (field.name(), field.shape()))
                .collect(),
        _ => vec![],
    }
}
