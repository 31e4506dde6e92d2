//! Renders [`Variable`]s into GraphQL argument literal syntax.
//!
//! Object fields are emitted in ascending order of name. A field is left out
//! entirely (no key, no value) when its path is listed in the variable's
//! ignore markers, or when its value is null.

use crate::DotPath;
use crate::introspect;
use crate::operation::SynthesisError;
use crate::operation::Variable;
use crate::Value;

type Result<T> = std::result::Result<T, SynthesisError>;

struct EncodeContext<'var> {
    argument_name: &'var str,
    variable: &'var Variable,
}

/// Render the parenthesized argument list for `variables`, preserving their
/// order. Renders as an empty string when no argument survives omission.
pub fn encode_arguments<'var>(
    variables: impl IntoIterator<Item = &'var Variable>,
) -> Result<String> {
    let mut encoded = vec![];
    for variable in variables {
        if let Some(argument) = encode_variable(variable)? {
            encoded.push(argument);
        }
    }

    Ok(if encoded.is_empty() {
        String::new()
    } else {
        format!("({})", encoded.join(", "))
    })
}

/// Render one argument as `name: literal`, or `None` if its value is null.
pub fn encode_variable(variable: &Variable) -> Result<Option<String>> {
    let argument_name = variable.argument_name();
    if variable.value().is_null() {
        log::debug!(
            "Omitting argument `{argument_name}` (declared as `{}`) because \
            its value is null.",
            variable.declared_shape().describe(),
        );
        return Ok(None);
    }

    let ctx = EncodeContext {
        argument_name,
        variable,
    };
    let literal = encode_literal(&ctx, variable.value(), &DotPath::root())?;
    Ok(Some(format!("{argument_name}: {literal}")))
}

fn encode_field(
    ctx: &EncodeContext<'_>,
    name: &str,
    value: &Value,
    path: &DotPath,
) -> Result<Option<String>> {
    if ctx.variable.markers().is_ignored(path) {
        log::debug!(
            "Omitting `{path}` from argument `{}` per its ignore markers.",
            ctx.argument_name,
        );
        return Ok(None);
    }

    if value.is_null() {
        return Ok(None);
    }

    let literal = encode_literal(ctx, value, path)?;
    Ok(Some(format!("{name}: {literal}")))
}

fn encode_literal(
    ctx: &EncodeContext<'_>,
    value: &Value,
    path: &DotPath,
) -> Result<String> {
    Ok(match value {
        // Only reachable for list elements; object fields that are null are
        // omitted by `encode_field`.
        Value::Null => "null".to_string(),

        Value::Bool(bool) => bool.to_string(),

        Value::Int(int) => int.to_string(),

        Value::Float(float) =>
            format_float(*float).ok_or_else(|| SynthesisError::NonFiniteFloat {
                argument_name: ctx.argument_name.to_string(),
                path: path.to_owned(),
            })?,

        Value::String(str) =>
            if ctx.variable.markers().raw {
                str.to_owned()
            } else {
                quote_string(str)
            },

        // List elements share the list's path, so an ignore path reaches
        // into every element.
        Value::List(items) => {
            let mut encoded = Vec::with_capacity(items.len());
            for item in items {
                encoded.push(encode_literal(ctx, item, path)?);
            }
            format!("[{}]", encoded.join(", "))
        },

        Value::Object(_) => {
            let mut encoded = vec![];
            for field in introspect::value_fields(value) {
                let field_path = path.child(field.name);
                if let Some(entry) = encode_field(ctx, field.name, field.value, &field_path)? {
                    encoded.push(entry);
                }
            }
            format!("{{{}}}", encoded.join(", "))
        },
    })
}

/// Shortest round-trip rendition, always carrying a decimal point so the
/// literal reads as a Float. `None` for NaN and infinities, which GraphQL
/// cannot express.
pub(crate) fn format_float(float: f64) -> Option<String> {
    if !float.is_finite() {
        return None;
    }

    let mut text = float.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    Some(text)
}

pub(crate) fn quote_string(str: &str) -> String {
    let mut quoted = String::with_capacity(str.len() + 2);
    quoted.push('"');
    for ch in str.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0C}' => quoted.push_str("\\f"),
            ch if ch.is_control() =>
                quoted.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
