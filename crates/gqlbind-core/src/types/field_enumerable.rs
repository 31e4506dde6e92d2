use crate::types::ScalarKind;
use crate::types::TypeShape;
use crate::Value;

/// The introspection capability every type participating in a call
/// implements: it can describe its shape without a value, and lower a value
/// of itself into a [`Value`].
///
/// Structured types are usually implemented with
/// `#[derive(FieldEnumerable)]` (see `gqlbind::macros`). Implementations
/// for scalars, `Option`, `Box`, `Vec` and slices are provided here.
///
/// ```rust
/// use gqlbind_core::types::FieldEnumerable;
/// use gqlbind_core::Value;
///
/// assert_eq!(Some(7_i32).to_value(), Value::Int(7));
/// assert_eq!(None::<String>.to_value(), Value::Null);
/// ```
pub trait FieldEnumerable {
    fn type_shape() -> TypeShape;
    fn to_value(&self) -> Value;
}

macro_rules! int_field_enumerable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldEnumerable for $ty {
                fn type_shape() -> TypeShape {
                    TypeShape::Scalar(ScalarKind::Int)
                }

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}
int_field_enumerable!(i8, i16, i32, i64, u8, u16, u32);

impl FieldEnumerable for f32 {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::Float)
    }

    fn to_value(&self) -> Value {
        // Widen from the shortest decimal form so `0.1_f32` stays `0.1`.
        Value::Float(self.to_string().parse().unwrap_or(f64::from(*self)))
    }
}

impl FieldEnumerable for f64 {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::Float)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FieldEnumerable for bool {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::Boolean)
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldEnumerable for char {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::String)
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FieldEnumerable for str {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::String)
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl FieldEnumerable for String {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::String)
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FieldEnumerable for serde_json::Value {
    fn type_shape() -> TypeShape {
        TypeShape::Scalar(ScalarKind::Any)
    }

    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl<T: FieldEnumerable + ?Sized> FieldEnumerable for &T {
    fn type_shape() -> TypeShape {
        T::type_shape()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldEnumerable + ?Sized> FieldEnumerable for Box<T> {
    fn type_shape() -> TypeShape {
        T::type_shape()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: FieldEnumerable> FieldEnumerable for Option<T> {
    fn type_shape() -> TypeShape {
        T::type_shape()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FieldEnumerable> FieldEnumerable for [T] {
    fn type_shape() -> TypeShape {
        TypeShape::list(T::type_shape())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(T::to_value).collect())
    }
}

impl<T: FieldEnumerable> FieldEnumerable for Vec<T> {
    fn type_shape() -> TypeShape {
        TypeShape::list(T::type_shape())
    }

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}
