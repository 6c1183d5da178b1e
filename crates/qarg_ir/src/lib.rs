//! Query Argument IR
//!
//! Data model for rendering diagnostics against the arguments of a query:
//! - [`Value`] nodes: scalars, arrays and objects
//! - [`ObjectField`] and [`ObjectFieldSuggestion`] entries inside an [`ObjectValue`]
//! - Selection-path navigation through `select` / `include` wrappers
//! - [`ValidationError`], the tagged error reported by the validator
//! - [`build_arguments_tree`] for turning JSON arguments into a tree
//!
//! # Ownership
//!
//! A tree is exclusively owned by whoever renders it. Nodes have no parent
//! pointers; every lookup starts at the root and walks a path of field names,
//! handing back a borrow into the same tree so mutations land in place.

mod build;
mod object;
pub mod validation;
mod value;

pub use build::{build_arguments_tree, scalar_from_json, JsonArguments};
pub use object::{
    ObjectEntry, ObjectField, ObjectFieldSuggestion, ObjectValue, SelectionKind, SelectionParent,
};
pub use validation::{
    ArgumentDescription, ArgumentsDescription, InputTypeDescription, InputTypeDescriptionField,
    OutputTypeDescription, OutputTypeDescriptionField, ParseError, ValidationError,
};
pub use value::{ArrayValue, Scalar, Value};
