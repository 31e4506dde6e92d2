/// The kind of operation a document performs. Only determines the
/// document's leading keyword.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
impl std::str::FromStr for OperationKind {
    type Err = UnknownOperationKind;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str.to_ascii_lowercase().as_str() {
            "mutation" => Ok(Self::Mutation),
            "query" => Ok(Self::Query),
            "subscription" => Ok(Self::Subscription),
            _ => Err(UnknownOperationKind(str.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Unknown operation kind `{0}`. Expected one of: query, mutation, subscription")]
pub struct UnknownOperationKind(pub String);
