use crate::types::FieldEnumerable;
use crate::types::FieldShape;
use crate::types::ObjectShape;
use crate::types::ScalarKind;
use crate::Value;

/// The declared shape of a type: what a value of that type looks like
/// without needing an actual value in hand.
///
/// Shapes drive selection set derivation for result types and the
/// structural check that precedes response decoding.
#[derive(Clone, Debug)]
pub enum TypeShape {
    List(Box<TypeShape>),
    Object(ObjectShape),
    Scalar(ScalarKind),
}
impl TypeShape {
    /// The shape declared by `T`'s [`FieldEnumerable`] implementation.
    pub fn of<T: FieldEnumerable + ?Sized>() -> Self {
        T::type_shape()
    }

    pub fn list(inner: TypeShape) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn as_object(&self) -> Option<&ObjectShape> {
        if let Self::Object(object_shape) = self {
            Some(object_shape)
        } else {
            None
        }
    }

    /// Peel off any number of [`TypeShape::List`] wrappers.
    pub fn innermost(&self) -> &TypeShape {
        let mut shape = self;
        while let Self::List(inner) = shape {
            shape = inner;
        }
        shape
    }

    /// A shape is structured when it (or the element type of a list, at any
    /// list depth) has enumerable sub-fields of its own.
    pub fn is_structured(&self) -> bool {
        matches!(self.innermost(), Self::Object(_))
    }

    /// Human-readable rendition used in log lines and error messages, e.g.
    /// `[String]` or `ComplexSampleType`.
    pub fn describe(&self) -> String {
        match self {
            Self::List(inner) => format!("[{}]", inner.describe()),
            Self::Object(object_shape) =>
                object_shape.type_name()
                    .unwrap_or("{..}")
                    .to_string(),
            Self::Scalar(kind) => kind.graphql_name().to_string(),
        }
    }

    /// Best-effort shape for a value that arrived without a declared type
    /// (e.g. variables loaded from a JSON file).
    pub fn inferred_from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Scalar(ScalarKind::Any),
            Value::Bool(_) => Self::Scalar(ScalarKind::Boolean),
            Value::Int(_) => Self::Scalar(ScalarKind::Int),
            Value::Float(_) => Self::Scalar(ScalarKind::Float),
            Value::String(_) => Self::Scalar(ScalarKind::String),
            Value::List(items) => Self::list(
                items.iter()
                    .find(|item| !item.is_null())
                    .map(Self::inferred_from)
                    .unwrap_or(Self::Scalar(ScalarKind::Any)),
            ),
            Value::Object(fields) => Self::Object(ObjectShape::anonymous(
                fields.iter()
                    .map(|(name, value)| FieldShape::resolved(
                        name.as_str(),
                        Self::inferred_from(value),
                    ))
                    .collect(),
            )),
        }
    }
}
