/// The leaf kinds a [`TypeShape`](crate::types::TypeShape) can bottom out
/// in.
///
/// `Any` is used for leaves whose concrete kind is unknown (e.g. a
/// `serde_json::Value` field, or a leaf in an untyped shape descriptor) and
/// accepts every JSON value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarKind {
    Any,
    Boolean,
    Float,
    Id,
    Int,
    String,
}
impl ScalarKind {
    pub fn from_graphql_name(name: &str) -> Option<Self> {
        match name {
            "Any" => Some(Self::Any),
            "Boolean" => Some(Self::Boolean),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::Id),
            "Int" => Some(Self::Int),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn graphql_name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    /// Whether a (non-null) JSON response value can stand in for this kind.
    pub fn accepts(&self, json: &serde_json::Value) -> bool {
        match self {
            Self::Any => true,
            Self::Boolean => json.is_boolean(),
            Self::Float => json.is_number(),
            Self::Id => json.is_string() || json.is_i64() || json.is_u64(),
            Self::Int => json.is_i64() || json.is_u64(),
            Self::String => json.is_string(),
        }
    }
}
