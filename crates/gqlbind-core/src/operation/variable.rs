use crate::DotPath;
use crate::operation::VarMarkers;
use crate::types::FieldEnumerable;
use crate::types::TypeShape;
use crate::Value;

/// One named argument of an operation call: its runtime value, its declared
/// shape, and the markers that control how it is encoded.
///
/// A `Variable` is built per call and consumed by a single synthesis.
#[derive(Clone, Debug)]
pub struct Variable {
    pub(crate) declared_shape: TypeShape,
    pub(crate) markers: VarMarkers,
    pub(crate) name: String,
    pub(crate) value: Value,
}
impl Variable {
    /// Lower `value` into a `Variable` named `name`, keeping `T`'s declared
    /// shape.
    pub fn new<T: FieldEnumerable + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        Self::from_parts(name, value.to_value(), T::type_shape())
    }

    pub fn from_parts(
        name: impl Into<String>,
        value: Value,
        declared_shape: TypeShape,
    ) -> Self {
        Self {
            declared_shape,
            markers: VarMarkers::default(),
            name: name.into(),
            value,
        }
    }

    /// Exclude the field at `path` (relative to this argument's root) from
    /// the encoded literal.
    pub fn ignore(mut self, path: impl Into<DotPath>) -> Self {
        self.markers.ignore.insert(path.into());
        self
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.markers.raw = raw;
        self
    }

    pub fn with_explicit_name(mut self, name: impl Into<String>) -> Self {
        self.markers.explicit_name = Some(name.into());
        self
    }

    pub fn with_markers(mut self, markers: VarMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// The name this argument is rendered under: the explicit name from its
    /// markers if one was given, otherwise its inferred name.
    pub fn argument_name(&self) -> &str {
        self.markers.explicit_name
            .as_deref()
            .unwrap_or(self.name.as_str())
    }

    pub fn declared_shape(&self) -> &TypeShape {
        &self.declared_shape
    }

    pub fn markers(&self) -> &VarMarkers {
        &self.markers
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
