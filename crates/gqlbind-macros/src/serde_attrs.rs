use syn::Attribute;
use syn::LitStr;
use syn::meta::ParseNestedMeta;

/// The subset of `#[serde(...)]` attributes that affect field naming.
///
/// `rename` and `rename_all` may name serialize and deserialize forms
/// separately; the deserialize form wins since it is what response decoding
/// expects.
#[derive(Debug, Default)]
pub(crate) struct SerdeAttrs {
    pub rename: Option<String>,
    pub rename_all: Option<RenameRule>,
    pub skip: bool,
    pub skip_deserializing: bool,
    pub skip_serializing: bool,
}
impl SerdeAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(name) = parse_name(&meta)? {
                        parsed.rename = Some(name.value());
                    }
                } else if meta.path.is_ident("rename_all") {
                    if let Some(rule) = parse_name(&meta)? {
                        parsed.rename_all = Some(RenameRule::parse(&rule)?);
                    }
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                } else if meta.path.is_ident("skip_deserializing") {
                    parsed.skip_deserializing = true;
                } else if meta.path.is_ident("skip_serializing") {
                    parsed.skip_serializing = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // Other serde attributes don't affect naming; consume
                    // their values so parsing can continue.
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    let _content;
                    syn::parenthesized!(_content in meta.input);
                }
                Ok(())
            })?;
        }
        Ok(parsed)
    }

    /// Whether the field is part of the declared (response) shape.
    pub fn in_shape(&self) -> bool {
        !self.skip && !self.skip_deserializing
    }

    /// Whether the field is part of the runtime (argument) value.
    pub fn in_value(&self) -> bool {
        !self.skip && !self.skip_serializing
    }
}

/// Read `name = "..."` or `name(serialize = "...", deserialize = "...")`,
/// keeping the deserialize form of the latter.
fn parse_name(meta: &ParseNestedMeta<'_>) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(syn::Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }

    let mut deserialize_name = None;
    meta.parse_nested_meta(|inner| {
        let name: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("deserialize") {
            deserialize_name = Some(name);
        } else if !inner.path.is_ident("serialize") {
            return Err(inner.error("expected `serialize` or `deserialize`"));
        }
        Ok(())
    })?;
    Ok(deserialize_name)
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum RenameRule {
    CamelCase,
    LowerCase,
    PascalCase,
    SnakeCase,
}
impl RenameRule {
    fn parse(rule: &LitStr) -> syn::Result<Self> {
        match rule.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "lowercase" => Ok(Self::LowerCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            other => Err(syn::Error::new(
                rule.span(),
                format!(
                    "`FieldEnumerable` does not support `rename_all = \"{other}\"`; \
                    expected one of camelCase, PascalCase, snake_case, lowercase",
                ),
            )),
        }
    }

    /// Apply this rule to a snake_case Rust field name.
    pub fn apply(&self, field_name: &str) -> String {
        match self {
            Self::LowerCase => field_name.to_ascii_lowercase(),
            Self::SnakeCase => field_name.to_string(),
            Self::CamelCase | Self::PascalCase => {
                let mut renamed = String::with_capacity(field_name.len());
                let mut capitalize_next = matches!(self, Self::PascalCase);
                for ch in field_name.chars() {
                    if ch == '_' {
                        capitalize_next = true;
                    } else if capitalize_next {
                        renamed.push(ch.to_ascii_uppercase());
                        capitalize_next = false;
                    } else {
                        renamed.push(ch);
                    }
                }
                renamed
            },
        }
    }
}
