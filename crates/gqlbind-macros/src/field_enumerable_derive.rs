use crate::serde_attrs::SerdeAttrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::parse_quote;

pub(crate) fn expand(mut input: DeriveInput) -> syn::Result<TokenStream> {
    let container_attrs = SerdeAttrs::parse(&input.attrs)?;

    let named_fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.clone(),
            Fields::Unnamed(_) | Fields::Unit => return Err(syn::Error::new_spanned(
                &input.ident,
                "`FieldEnumerable` can only be derived for structs with named fields",
            )),
        },
        Data::Enum(_) | Data::Union(_) => return Err(syn::Error::new_spanned(
            &input.ident,
            "`FieldEnumerable` can only be derived for structs with named fields",
        )),
    };

    let mut shape_entries = vec![];
    let mut value_entries = vec![];
    for field in named_fields.iter() {
        let field_attrs = SerdeAttrs::parse(&field.attrs)?;
        if !field_attrs.in_shape() && !field_attrs.in_value() {
            continue;
        }

        // Named fields always carry an ident.
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let rust_name = field_ident.to_string();
        let rust_name = rust_name.strip_prefix("r#").unwrap_or(&rust_name);
        let graphql_name = match (&field_attrs.rename, container_attrs.rename_all) {
            (Some(rename), _) => rename.to_owned(),
            (None, Some(rule)) => rule.apply(rust_name),
            (None, None) => rust_name.to_string(),
        };

        let field_ty = &field.ty;
        if field_attrs.in_shape() {
            shape_entries.push(quote! {
                gqlbind::types::FieldShape::of::<#field_ty>(#graphql_name)
            });
        }
        if field_attrs.in_value() {
            value_entries.push(quote! {
                (#graphql_name, gqlbind::types::FieldEnumerable::to_value(&self.#field_ident))
            });
        }
    }

    let type_params: Vec<_> =
        input.generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();
    let where_clause = input.generics.make_where_clause();
    for type_param in type_params {
        where_clause.predicates.push(parse_quote! {
            #type_param: gqlbind::types::FieldEnumerable
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics gqlbind::types::FieldEnumerable for #ident #ty_generics #where_clause {
            fn type_shape() -> gqlbind::types::TypeShape {
                gqlbind::_macro_runtime::object_shape(
                    ::std::any::type_name::<Self>(),
                    vec![#(#shape_entries),*],
                )
            }

            fn to_value(&self) -> gqlbind::Value {
                gqlbind::_macro_runtime::object_value(vec![#(#value_entries),*])
            }
        }
    })
}
