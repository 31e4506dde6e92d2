use crate::types::FieldEnumerable;
use crate::types::TypeShape;
use std::borrow::Cow;

/// How a [`FieldShape`] refers to the shape of its type.
///
/// Derived code always emits [`ShapeRef::Deferred`] so that describing a
/// type never has to describe its field types first. That is what allows a
/// type to (transitively) contain itself without the description recursing
/// forever.
#[derive(Clone, Debug)]
pub enum ShapeRef {
    Deferred(fn() -> TypeShape),
    Resolved(TypeShape),
}

#[derive(Clone, Debug)]
pub struct FieldShape {
    name: String,
    shape: ShapeRef,
}
impl FieldShape {
    pub fn deferred(name: impl Into<String>, shape_fn: fn() -> TypeShape) -> Self {
        Self {
            name: name.into(),
            shape: ShapeRef::Deferred(shape_fn),
        }
    }

    /// A field whose shape is that of `T`, resolved lazily.
    pub fn of<T: FieldEnumerable + ?Sized>(name: impl Into<String>) -> Self {
        Self::deferred(name, T::type_shape)
    }

    pub fn resolved(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape: ShapeRef::Resolved(shape),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn shape(&self) -> Cow<'_, TypeShape> {
        match &self.shape {
            ShapeRef::Deferred(shape_fn) => Cow::Owned(shape_fn()),
            ShapeRef::Resolved(shape) => Cow::Borrowed(shape),
        }
    }

    pub fn shape_ref(&self) -> &ShapeRef {
        &self.shape
    }
}
