//! Validation errors reported against query arguments.
//!
//! The validator sends a JSON object tagged by `kind`. Each variant carries
//! a `selectionPath` locating the affected selection from the root, and some
//! carry a `meta` payload describing the model or arguments involved.
//!
//! Parse untrusted input with [`ValidationError::from_json`]: an unknown tag
//! is reported as [`ParseError::UnsupportedKind`] instead of a generic serde
//! failure.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Error when decoding a [`ValidationError`] from JSON.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("validation error has no `kind` tag")]
    MissingKind,
    #[error("validation error kind `{0}` is not supported")]
    UnsupportedKind(String),
    #[error("malformed `{kind}` validation error: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A validation error, tagged by `kind` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    #[serde(rename = "includeAndSelect")]
    IncludeAndSelect(IncludeAndSelectError),
    #[serde(rename = "includeOnScalar")]
    IncludeOnScalar(IncludeOnScalarError),
    EmptySelection(EmptySelectionError),
    UnknownSelectionField(UnknownSelectionFieldError),
    SelectionSetOnScalar(SelectionSetOnScalarError),
    UnknownArgument(UnknownArgumentError),
    MissingRequiredArgument(MissingRequiredArgumentError),
}

impl ValidationError {
    /// Every wire tag this type understands.
    pub const KINDS: [&'static str; 7] = [
        "includeAndSelect",
        "includeOnScalar",
        "EmptySelection",
        "UnknownSelectionField",
        "SelectionSetOnScalar",
        "UnknownArgument",
        "MissingRequiredArgument",
    ];

    /// Decode an error, separating unknown kinds from malformed payloads.
    pub fn from_json(value: JsonValue) -> Result<Self, ParseError> {
        let kind = value
            .get("kind")
            .and_then(JsonValue::as_str)
            .ok_or(ParseError::MissingKind)?
            .to_owned();
        if !Self::KINDS.contains(&kind.as_str()) {
            return Err(ParseError::UnsupportedKind(kind));
        }
        serde_json::from_value(value).map_err(|source| ParseError::Malformed { kind, source })
    }

    /// The wire tag of this error.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::IncludeAndSelect(_) => "includeAndSelect",
            ValidationError::IncludeOnScalar(_) => "includeOnScalar",
            ValidationError::EmptySelection(_) => "EmptySelection",
            ValidationError::UnknownSelectionField(_) => "UnknownSelectionField",
            ValidationError::SelectionSetOnScalar(_) => "SelectionSetOnScalar",
            ValidationError::UnknownArgument(_) => "UnknownArgument",
            ValidationError::MissingRequiredArgument(_) => "MissingRequiredArgument",
        }
    }

    pub fn selection_path(&self) -> &[String] {
        match self {
            ValidationError::IncludeAndSelect(error) => &error.selection_path,
            ValidationError::IncludeOnScalar(error) => &error.selection_path,
            ValidationError::EmptySelection(error) => &error.selection_path,
            ValidationError::UnknownSelectionField(error) => &error.selection_path,
            ValidationError::SelectionSetOnScalar(error) => &error.selection_path,
            ValidationError::UnknownArgument(error) => &error.selection_path,
            ValidationError::MissingRequiredArgument(error) => &error.selection_path,
        }
    }
}

/// Both `include` and `select` were given for the same selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeAndSelectError {
    pub selection_path: Vec<String>,
}

/// A scalar field appeared inside an `include`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeOnScalarError {
    pub selection_path: Vec<String>,
    #[serde(default)]
    pub meta: IncludeOnScalarMeta,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeOnScalarMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<OutputTypeDescription>,
}

/// A selection was empty or had only falsy values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptySelectionError {
    pub selection_path: Vec<String>,
    pub meta: OutputTypeMeta,
}

/// A selected field does not exist on the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownSelectionFieldError {
    pub selection_path: Vec<String>,
    pub meta: OutputTypeMeta,
}

/// A scalar field was given a nested selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSetOnScalarError {
    pub selection_path: Vec<String>,
}

/// An argument name is not accepted by the operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownArgumentError {
    pub selection_path: Vec<String>,
    pub argument_path: Vec<String>,
    pub meta: ArgumentsMeta,
}

/// A required argument was not supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRequiredArgumentError {
    pub selection_path: Vec<String>,
    pub meta: MissingRequiredArgumentMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTypeMeta {
    pub output_type: OutputTypeDescription,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentsMeta {
    pub arguments: ArgumentsDescription,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRequiredArgumentMeta {
    pub argument_name: String,
    pub argument_type: InputTypeDescription,
}

/// A model's output fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTypeDescription {
    pub name: String,
    pub fields: Vec<OutputTypeDescriptionField>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTypeDescriptionField {
    pub name: String,
    pub type_name: String,
    pub is_relation: bool,
}

/// An input object type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTypeDescription {
    pub name: String,
    #[serde(default, rename = "field")]
    pub fields: Vec<InputTypeDescriptionField>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTypeDescriptionField {
    pub name: String,
    pub type_names: Vec<String>,
    pub required: bool,
}

/// The arguments an operation accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentsDescription {
    pub args: Vec<ArgumentDescription>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDescription {
    pub name: String,
    pub type_names: Vec<String>,
}

#[cfg(test)]
mod tests;
