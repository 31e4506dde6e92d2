use crate::introspect;
use crate::operation::SelectionSetError;
use crate::types::TypeShape;

type Result<T> = std::result::Result<T, SelectionSetError>;

/// Render the selection set requested for a result of shape `result_shape`.
///
/// When `override_literal` is given it is returned verbatim, without looking
/// at `result_shape` at all. Otherwise every field of the result type is
/// selected (ascending by name), and structured fields are expanded into
/// nested selection sets:
///
/// ```rust
/// use gqlbind_core::operation::selection_set;
/// use gqlbind_core::types::TypeShape;
///
/// let shape = TypeShape::from_descriptor(&serde_json::json!({
///     "foo": "String",
///     "bar": { "baz": "Int" },
/// })).unwrap();
/// assert_eq!(selection_set::generate(&shape, None).unwrap(), "{bar {baz} foo}");
/// assert_eq!(selection_set::generate(&shape, Some("{foo}")).unwrap(), "{foo}");
/// ```
pub fn generate(
    result_shape: &TypeShape,
    override_literal: Option<&str>,
) -> Result<String> {
    if let Some(literal) = override_literal {
        return Ok(literal.to_string());
    }

    let mut type_chain = vec![];
    generate_impl(result_shape, "", &mut type_chain)
}

fn generate_impl(
    shape: &TypeShape,
    path: &str,
    type_chain: &mut Vec<String>,
) -> Result<String> {
    let object_shape = match shape.innermost() {
        TypeShape::Object(object_shape) => object_shape,
        TypeShape::List(_) | TypeShape::Scalar(_) =>
            return Err(SelectionSetError::EmptySelectionSet {
                path: display_path(path),
            }),
    };

    if object_shape.is_empty() {
        return Err(SelectionSetError::EmptySelectionSet {
            path: display_path(path),
        });
    }

    let type_name = object_shape.type_name().map(str::to_string);
    if let Some(type_name) = &type_name {
        if type_chain.contains(type_name) {
            return Err(SelectionSetError::CyclicSelectionSet {
                path: display_path(path),
                type_name: type_name.to_owned(),
            });
        }
        type_chain.push(type_name.to_owned());
    }

    let mut selections = vec![];
    for (field_name, field_shape) in introspect::shape_fields(shape) {
        if field_shape.is_structured() {
            let field_path = if path.is_empty() {
                field_name.to_string()
            } else {
                format!("{path}.{field_name}")
            };
            let nested = generate_impl(&field_shape, &field_path, type_chain)?;
            selections.push(format!("{field_name} {nested}"));
        } else {
            selections.push(field_name.to_string());
        }
    }

    if type_name.is_some() {
        type_chain.pop();
    }

    Ok(format!("{{{}}}", selections.join(" ")))
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
