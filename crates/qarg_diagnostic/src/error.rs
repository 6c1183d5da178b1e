//! Failures while applying a validation error.
//!
//! These signal a broken error producer, not a problem with the caller's
//! arguments: nothing is mutated and no message is added when one occurs.

/// Error when a validation error cannot be applied to a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// A field-targeting error arrived with no path to split a field name from.
    #[error("`{kind}` validation error has an empty selection path")]
    EmptySelectionPath { kind: &'static str },
    #[error("`UnknownArgument` validation error has an empty argument path")]
    EmptyArgumentPath,
}
