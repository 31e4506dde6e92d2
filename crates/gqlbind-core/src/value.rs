use std::collections::BTreeMap;

/// A runtime argument value, already lowered from whatever Rust type it was
/// produced from.
///
/// [`Value::Null`] marks an absent value. Object fields are held in a
/// [`BTreeMap`] so they always enumerate in ascending order of field name,
/// no matter what order they were inserted in.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}
impl Value {
    /// Build a [`Value::Object`] from `(name, value)` pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect()
        )
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short lower-case label for the variant, used in log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}
impl std::convert::From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(num) => match num.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Float(num.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(str) => Self::String(str),
            serde_json::Value::Array(items) =>
                Self::List(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(entries) =>
                Self::Object(
                    entries.into_iter()
                        .map(|(name, value)| (name, Value::from(value)))
                        .collect()
                ),
        }
    }
}
