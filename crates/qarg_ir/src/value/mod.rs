//! Argument tree nodes.

use std::fmt;

use crate::ObjectValue;

/// A node of the argument tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(Scalar),
    Object(ObjectValue),
    Array(ArrayValue),
}

impl Value {
    /// Borrow the node as an object, if it is one.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutably borrow the node as an object, if it is one.
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectValue> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Check if this node is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::Object(object)
    }
}

impl From<ArrayValue> for Value {
    fn from(array: ArrayValue) -> Self {
        Value::Array(array)
    }
}

/// A literal that has already been formatted for display.
///
/// The text is printed verbatim: a string literal carries its own quotes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scalar(String);

impl Scalar {
    pub fn new(text: impl Into<String>) -> Self {
        Scalar(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered list of values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayValue {
    items: Vec<Value>,
}

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Value> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ArrayValue {
            items: iter.into_iter().collect(),
        }
    }
}
