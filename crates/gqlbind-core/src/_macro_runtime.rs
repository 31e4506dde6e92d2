//! Support functions for code emitted by `#[derive(FieldEnumerable)]`. Not
//! part of the public API.

use crate::types::FieldShape;
use crate::types::ObjectShape;
use crate::types::TypeShape;
use crate::Value;

pub fn object_shape(type_name: &'static str, fields: Vec<FieldShape>) -> TypeShape {
    TypeShape::Object(ObjectShape::named(type_name, fields))
}

pub fn object_value(fields: Vec<(&'static str, Value)>) -> Value {
    Value::object(fields)
}
