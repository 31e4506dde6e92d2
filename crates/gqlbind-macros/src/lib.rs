mod field_enumerable_derive;
mod serde_attrs;

use syn::DeriveInput;
use syn::parse_macro_input;

/// Implements `gqlbind::types::FieldEnumerable` for a struct with named
/// fields, so values of the struct can be passed as call arguments and the
/// struct can be used as a call's result type.
///
/// Field names follow the same `#[serde(...)]` attributes serde would use to
/// decode the struct, so requests and responses agree on naming:
///
/// * `#[serde(rename_all = "...")]` on the struct (`camelCase`,
///   `PascalCase`, `snake_case` or `lowercase`)
/// * `#[serde(rename = "...")]` on a field
/// * `#[serde(skip)]` on a field leaves it out entirely
///
/// Example usage:
///
/// ```rust
/// use gqlbind::macros::FieldEnumerable;
/// use gqlbind::operation::selection_set;
/// use gqlbind::types::TypeShape;
///
/// #[derive(FieldEnumerable, serde::Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Beer {
///     brand_name: String,
///     alcohol_pct: Option<f32>,
/// }
///
/// let shape = TypeShape::of::<Beer>();
/// assert_eq!(
///     selection_set::generate(&shape, None).unwrap(),
///     "{alcoholPct brandName}",
/// );
/// ```
#[proc_macro_derive(FieldEnumerable, attributes(serde))]
pub fn derive_field_enumerable(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match field_enumerable_derive::expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
