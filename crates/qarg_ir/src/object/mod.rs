//! Object nodes, their fields, and selection-path navigation.
//!
//! A selection sits one level below the object it applies to: the object has
//! a `select` or `include` field, and the value of that field maps the
//! selected field names. Navigating the path `["posts", "likes"]` therefore
//! means: resolve the root's wrapper, take `posts`, resolve its wrapper, take
//! `likes`.

use std::fmt;

use indexmap::IndexMap;

use crate::Value;

/// Which wrapper field holds a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Select,
    Include,
}

impl SelectionKind {
    /// Both wrappers, in lookup order.
    pub const ALL: [SelectionKind; 2] = [SelectionKind::Select, SelectionKind::Include];

    /// The wrapper's field name.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectionKind::Select => "select",
            SelectionKind::Include => "include",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved selection: the wrapper's object value and which wrapper it was.
#[derive(Debug)]
pub struct SelectionParent<'a> {
    pub kind: SelectionKind,
    pub value: &'a mut ObjectValue,
}

/// A named value inside an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectField {
    name: String,
    value: Value,
    is_error: bool,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        ObjectField {
            name: name.into(),
            value: value.into(),
            is_error: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Check if the field has been flagged by an error.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Flag the field so it renders underlined. Idempotent.
    pub fn mark_as_error(&mut self) {
        self.is_error = true;
    }
}

/// A synthetic field proposed to the caller; rendered after the real fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectFieldSuggestion {
    field_name: String,
    suggested_value: String,
}

impl ObjectFieldSuggestion {
    pub fn new(field_name: impl Into<String>, suggested_value: impl Into<String>) -> Self {
        ObjectFieldSuggestion {
            field_name: field_name.into(),
            suggested_value: suggested_value.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn suggested_value(&self) -> &str {
        &self.suggested_value
    }
}

/// One rendered entry of an object: a real field or a suggestion.
#[derive(Copy, Clone, Debug)]
pub enum ObjectEntry<'a> {
    Field(&'a ObjectField),
    Suggestion(&'a ObjectFieldSuggestion),
}

/// A mapping from unique field names to fields, plus appended suggestions.
///
/// Fields keep insertion order; overwriting a field keeps its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectValue {
    fields: IndexMap<String, ObjectField>,
    suggestions: Vec<ObjectFieldSuggestion>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any field with the same name.
    pub fn add_field(&mut self, field: ObjectField) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Append a suggestion. No de-duplication happens here; callers check
    /// [`has_field`](Self::has_field) first.
    pub fn add_suggestion(&mut self, suggestion: ObjectFieldSuggestion) {
        self.suggestions.push(suggestion);
    }

    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut ObjectField> {
        self.fields.get_mut(name)
    }

    pub fn field_value(&self, name: &str) -> Option<&Value> {
        self.field(name).map(ObjectField::value)
    }

    pub fn field_value_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.field_mut(name).map(ObjectField::value_mut)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Drop every real field and every suggestion.
    pub fn remove_all_fields(&mut self) {
        self.fields.clear();
        self.suggestions.clear();
    }

    /// True when there are no real fields. Suggestions do not count.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &ObjectField> {
        self.fields.values()
    }

    pub fn suggestions(&self) -> &[ObjectFieldSuggestion] {
        &self.suggestions
    }

    /// Fields followed by suggestions, in render order.
    pub fn entries(&self) -> impl Iterator<Item = ObjectEntry<'_>> {
        self.fields
            .values()
            .map(ObjectEntry::Field)
            .chain(self.suggestions.iter().map(ObjectEntry::Suggestion))
    }

    /// Number of fields plus suggestions.
    pub fn entry_count(&self) -> usize {
        self.fields.len() + self.suggestions.len()
    }

    /// The wrapper this object's selection lives under, if any.
    ///
    /// `select` wins over `include`; a wrapper whose value is not an object
    /// is skipped.
    pub fn selection_kind(&self) -> Option<SelectionKind> {
        SelectionKind::ALL.into_iter().find(|kind| {
            self.field_value(kind.as_str())
                .is_some_and(|value| value.as_object().is_some())
        })
    }

    /// Resolve this object's `select` / `include` wrapper.
    pub fn selection_parent(&self) -> Option<(SelectionKind, &ObjectValue)> {
        let kind = self.selection_kind()?;
        let value = self.field_value(kind.as_str())?.as_object()?;
        Some((kind, value))
    }

    /// Mutable variant of [`selection_parent`](Self::selection_parent).
    pub fn selection_parent_mut(&mut self) -> Option<SelectionParent<'_>> {
        let kind = self.selection_kind()?;
        let value = self.field_value_mut(kind.as_str())?.as_object_mut()?;
        Some(SelectionParent { kind, value })
    }

    /// The value selected under `key` in this object's wrapper.
    pub fn selection_value(&self, key: &str) -> Option<&Value> {
        self.selection_parent()?.1.field_value(key)
    }

    pub fn selection_value_mut(&mut self, key: &str) -> Option<&mut Value> {
        let SelectionParent { value, .. } = self.selection_parent_mut()?;
        value.field_value_mut(key)
    }

    /// Walk `path` through selections and return the object at its end.
    ///
    /// An empty path yields `self`. Each segment first resolves the current
    /// object's wrapper, then takes the named field; every hop must land on
    /// an object.
    pub fn deep_selection_value(&self, path: &[String]) -> Option<&ObjectValue> {
        let mut selection = self;
        for segment in path {
            selection = selection.selection_value(segment)?.as_object()?;
        }
        Some(selection)
    }

    pub fn deep_selection_value_mut(&mut self, path: &[String]) -> Option<&mut ObjectValue> {
        let mut selection = self;
        for segment in path {
            selection = selection.selection_value_mut(segment)?.as_object_mut()?;
        }
        Some(selection)
    }

    /// Walk `path` and return the selection wrapper of the object at its end.
    ///
    /// An empty path yields this object's own wrapper.
    pub fn deep_selection_parent(&self, path: &[String]) -> Option<(SelectionKind, &ObjectValue)> {
        let mut parent = self.selection_parent()?;
        for segment in path {
            parent = parent.1.field_value(segment)?.as_object()?.selection_parent()?;
        }
        Some(parent)
    }

    pub fn deep_selection_parent_mut(&mut self, path: &[String]) -> Option<SelectionParent<'_>> {
        let mut parent = self.selection_parent_mut()?;
        for segment in path {
            let SelectionParent { value, .. } = parent;
            parent = value
                .field_value_mut(segment)?
                .as_object_mut()?
                .selection_parent_mut()?;
        }
        Some(parent)
    }
}

impl FromIterator<ObjectField> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = ObjectField>>(iter: I) -> Self {
        let mut object = ObjectValue::new();
        for field in iter {
            object.add_field(field);
        }
        object
    }
}
