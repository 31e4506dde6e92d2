pub use gqlbind_core::*;

/// Helpful macros for describing call arguments and results at Rust
/// compile-time (e.g. deriving
/// [`FieldEnumerable`](crate::types::FieldEnumerable) for a struct).
#[cfg(feature = "macros")]
pub mod macros {
    pub use gqlbind_macros::*;
}

#[cfg(test)]
mod tests;
