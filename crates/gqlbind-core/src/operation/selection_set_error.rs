use thiserror::Error;

/// A result shape that cannot be turned into a selection set.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionSetError {
    #[error(
        "Type `{type_name}` contains itself at `{path}`, so its selection set \
        would never terminate. Supply a selection set override instead.",
    )]
    CyclicSelectionSet {
        path: String,
        type_name: String,
    },

    #[error("No fields to select at `{path}`: a selection set must request at least one field")]
    EmptySelectionSet {
        path: String,
    },
}
