use crate::DotPath;
use std::collections::BTreeSet;

/// Per-argument encoding markers, supplied alongside the argument's value.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VarMarkers {
    /// Argument name to use in the document instead of the inferred one.
    #[serde(rename = "alias")]
    pub explicit_name: Option<String>,

    /// Paths (relative to the argument root) of fields to leave out of the
    /// encoded literal. Paths that match nothing are ignored.
    pub ignore: BTreeSet<DotPath>,

    /// Emit text values verbatim instead of as quoted strings (e.g. for enum
    /// tokens the caller has already rendered).
    pub raw: bool,
}
impl VarMarkers {
    pub fn is_ignored(&self, path: &DotPath) -> bool {
        self.ignore.contains(path)
    }
}
