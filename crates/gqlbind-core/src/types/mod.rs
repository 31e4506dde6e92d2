mod field_enumerable;
mod field_shape;
mod object_shape;
mod scalar_kind;
mod shape_descriptor;
mod type_shape;

pub use field_enumerable::FieldEnumerable;
pub use field_shape::FieldShape;
pub use field_shape::ShapeRef;
pub use object_shape::ObjectShape;
pub use scalar_kind::ScalarKind;
pub use shape_descriptor::ShapeDescriptorError;
pub use type_shape::TypeShape;
