use crate::operation::OperationKind;
use crate::operation::SynthesisError;
use crate::operation::Variable;
use crate::types::FieldEnumerable;
use crate::types::TypeShape;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SynthesisError>;

/// Everything needed to synthesize one operation document: the operation's
/// kind and name, its arguments in caller order, and the shape of the
/// result it asks for.
#[derive(Clone, Debug)]
pub struct OperationCall {
    kind: OperationKind,
    name: String,
    result_shape: TypeShape,
    selection_set_override: Option<String>,
    variables: IndexMap<String, Variable>,
}
impl OperationCall {
    /// Describe a call to `name` whose result decodes into `R`.
    pub fn new<R: FieldEnumerable + ?Sized>(
        kind: OperationKind,
        name: impl Into<String>,
    ) -> Self {
        Self::with_result_shape(kind, name, R::type_shape())
    }

    pub fn with_result_shape(
        kind: OperationKind,
        name: impl Into<String>,
        result_shape: TypeShape,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            result_shape,
            selection_set_override: None,
            variables: IndexMap::new(),
        }
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Result<Self> {
        let argument_name = variable.argument_name().to_string();
        if self.variables.contains_key(&argument_name) {
            return Err(SynthesisError::DuplicateArgumentName {
                argument_name,
            });
        }
        self.variables.insert(argument_name, variable);
        Ok(self)
    }

    /// Replace the derived selection set with `literal`, used verbatim.
    pub fn with_selection_set(mut self, literal: impl Into<String>) -> Self {
        self.selection_set_override = Some(literal.into());
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn result_shape(&self) -> &TypeShape {
        &self.result_shape
    }

    pub fn selection_set_override(&self) -> Option<&str> {
        self.selection_set_override.as_deref()
    }

    /// Arguments in the order they were added.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }
}
