/// A `.`-joined path identifying one field at a specific nesting location
/// within a structured argument (e.g. `complexField.innerStringVar`).
///
/// Paths are relative to the argument root: the root itself is the empty
/// path and its direct fields have single-segment paths.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct DotPath(String);
impl DotPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Produce the path of the field named `name` nested directly under this
    /// path.
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }
}
impl std::convert::From<&str> for DotPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}
impl std::convert::From<String> for DotPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
impl std::fmt::Display for DotPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
