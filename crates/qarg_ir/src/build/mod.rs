//! Building an argument tree from JSON arguments.

use serde_json::{Map, Value as JsonValue};

use crate::{ArrayValue, ObjectField, ObjectValue, Scalar, Value};

/// A caller's arguments, as decoded JSON.
pub type JsonArguments = Map<String, JsonValue>;

/// Build the tree for a caller's arguments object.
///
/// Every key becomes an [`ObjectField`] in input order, recursively.
pub fn build_arguments_tree(args: &JsonArguments) -> ObjectValue {
    args.iter()
        .map(|(name, value)| ObjectField::new(name.as_str(), build_value(value)))
        .collect()
}

fn build_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Object(object) => Value::Object(build_arguments_tree(object)),
        JsonValue::Array(items) => {
            Value::Array(items.iter().map(build_value).collect::<ArrayValue>())
        }
        literal => Value::Scalar(scalar_from_json(literal)),
    }
}

/// Format a JSON literal the way it appears in the rendered tree.
///
/// Strings are quoted and escaped; numbers, booleans and `null` print as-is.
pub fn scalar_from_json(literal: &JsonValue) -> Scalar {
    Scalar::new(literal.to_string())
}
