use crate::types::FieldShape;
use std::borrow::Cow;

/// The shape of a structured type: an optional type name plus its fields,
/// always held in ascending order of field name.
///
/// Shapes produced by `#[derive(FieldEnumerable)]` are named after the Rust
/// type; shapes built from descriptors or inferred from values are
/// anonymous. Only named shapes can participate in a cycle.
#[derive(Clone, Debug)]
pub struct ObjectShape {
    fields: Vec<FieldShape>,
    type_name: Option<Cow<'static, str>>,
}
impl ObjectShape {
    pub fn anonymous(fields: Vec<FieldShape>) -> Self {
        Self::new(None, fields)
    }

    pub fn named(type_name: &'static str, fields: Vec<FieldShape>) -> Self {
        Self::new(Some(Cow::Borrowed(type_name)), fields)
    }

    fn new(
        type_name: Option<Cow<'static, str>>,
        mut fields: Vec<FieldShape>,
    ) -> Self {
        fields.sort_by(|a, b| a.name().cmp(b.name()));
        Self {
            fields,
            type_name,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields
            .binary_search_by(|field| field.name().cmp(name))
            .ok()
            .map(|idx| &self.fields[idx])
    }

    pub fn fields(&self) -> &[FieldShape] {
        self.fields.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}
