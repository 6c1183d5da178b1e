//! Applying validation errors to an argument tree.
//!
//! Each error kind has a handler that locates its target through the
//! selection path, annotates the tree in place, and adds one message. A
//! lookup that misses only skips the annotation; the message is always added.

use std::fmt::Write;

use qarg_ir::validation::{
    EmptySelectionError, IncludeAndSelectError, IncludeOnScalarError,
    MissingRequiredArgumentError, SelectionSetOnScalarError, UnknownArgumentError,
    UnknownSelectionFieldError,
};
use qarg_ir::{
    ArgumentsDescription, ObjectFieldSuggestion, ObjectValue, OutputTypeDescription,
    SelectionKind, SelectionParent, ValidationError,
};

use crate::emphasis::Emphasis;
use crate::{ApplyError, ArgumentsRenderingTree};

/// Suggested value for a selectable field.
const SELECT_SUGGESTION_VALUE: &str = "true";

/// Annotate `tree` with `error` and add its message.
///
/// The match is exhaustive: a new [`ValidationError`] variant does not build
/// until it has a handler here.
#[tracing::instrument(level = "debug", skip_all, fields(kind = error.kind()))]
pub fn apply_validation_error(
    error: &ValidationError,
    tree: &mut ArgumentsRenderingTree,
) -> Result<(), ApplyError> {
    match error {
        ValidationError::IncludeAndSelect(error) => {
            apply_include_and_select(error, tree);
            Ok(())
        }
        ValidationError::IncludeOnScalar(error) => apply_include_on_scalar(error, tree),
        ValidationError::EmptySelection(error) => {
            apply_empty_selection(error, tree);
            Ok(())
        }
        ValidationError::UnknownSelectionField(error) => {
            apply_unknown_selection_field(error, tree)
        }
        ValidationError::SelectionSetOnScalar(error) => apply_selection_set_on_scalar(error, tree),
        ValidationError::UnknownArgument(error) => apply_unknown_argument(error, tree),
        ValidationError::MissingRequiredArgument(error) => {
            apply_missing_required_argument(error, tree);
            Ok(())
        }
    }
}

fn apply_include_and_select(error: &IncludeAndSelectError, tree: &mut ArgumentsRenderingTree) {
    match tree
        .arguments_mut()
        .deep_selection_value_mut(&error.selection_path)
    {
        Some(object) => {
            for kind in SelectionKind::ALL {
                if let Some(field) = object.field_mut(kind.as_str()) {
                    field.mark_as_error();
                }
            }
        }
        None => selection_miss(&error.selection_path),
    }

    tree.add_error_message(|emphasis| {
        format!(
            "Please {} use {} or {}, but {} at the same time.",
            emphasis.bold("either"),
            emphasis.positive("`include`"),
            emphasis.positive("`select`"),
            emphasis.negative("not both"),
        )
    });
}

fn apply_include_on_scalar(
    error: &IncludeOnScalarError,
    tree: &mut ArgumentsRenderingTree,
) -> Result<(), ApplyError> {
    let (parent_path, field_name) = split_selection_path("includeOnScalar", &error.selection_path)?;
    let output_type = error.meta.output_type.clone();

    match tree.arguments_mut().deep_selection_parent_mut(parent_path) {
        Some(SelectionParent { value, .. }) => {
            if let Some(field) = value.field_mut(field_name) {
                field.mark_as_error();
            }
            if let Some(output_type) = &output_type {
                for field in output_type.fields.iter().filter(|field| field.is_relation) {
                    suggest_field(value, &field.name, SELECT_SUGGESTION_VALUE);
                }
            }
        }
        None => selection_miss(parent_path),
    }

    let field_name = field_name.to_owned();
    tree.add_error_message(move |emphasis| {
        let mut message = format!(
            "Invalid scalar field {} for {} statement",
            emphasis.negative(&format!("`{field_name}`")),
            emphasis.bold("include"),
        );
        match &output_type {
            Some(output_type) => {
                let _ = write!(
                    message,
                    " on model {}. {}",
                    emphasis.bold(&output_type.name),
                    available_options_message(emphasis),
                );
            }
            None => message.push('.'),
        }
        let _ = write!(
            message,
            "\nNote, that {} statements only accept relation fields.",
            emphasis.bold("include"),
        );
        message
    });
    Ok(())
}

fn apply_empty_selection(error: &EmptySelectionError, tree: &mut ArgumentsRenderingTree) {
    let output_type = error.meta.output_type.clone();

    // Emptiness has to be read before the fields are cleared.
    let (kind, was_empty) = match tree
        .arguments_mut()
        .deep_selection_parent_mut(&error.selection_path)
    {
        Some(SelectionParent { kind, value }) => {
            let was_empty = value.is_empty();
            value.remove_all_fields();
            add_selection_suggestions(value, &output_type);
            (kind, was_empty)
        }
        None => {
            selection_miss(&error.selection_path);
            (SelectionKind::Select, false)
        }
    };

    tree.add_error_message(move |emphasis| {
        let statement = emphasis.negative(&format!("`{kind}`"));
        let model = emphasis.bold(&output_type.name);
        if was_empty {
            format!(
                "The {statement} statement for type {model} must not be empty. {}",
                available_options_message(emphasis),
            )
        } else {
            format!(
                "The {statement} statement for type {model} needs {}.",
                emphasis.bold("at least one truthy value"),
            )
        }
    });
}

fn apply_unknown_selection_field(
    error: &UnknownSelectionFieldError,
    tree: &mut ArgumentsRenderingTree,
) -> Result<(), ApplyError> {
    let (parent_path, field_name) =
        split_selection_path("UnknownSelectionField", &error.selection_path)?;

    let kind = match tree.arguments_mut().deep_selection_parent_mut(parent_path) {
        Some(SelectionParent { kind, value }) => {
            if let Some(field) = value.field_mut(field_name) {
                field.mark_as_error();
            }
            add_selection_suggestions(value, &error.meta.output_type);
            Some(kind)
        }
        None => {
            selection_miss(parent_path);
            None
        }
    };

    let field_name = field_name.to_owned();
    let model = error.meta.output_type.name.clone();
    tree.add_error_message(move |emphasis| {
        let mut parts = vec![format!(
            "Unknown field {}",
            emphasis.negative(&format!("`{field_name}`"))
        )];
        if let Some(kind) = kind {
            parts.push(format!("for {} statement", emphasis.bold(kind.as_str())));
        }
        parts.push(format!("on model {}.", emphasis.bold(&model)));
        parts.push(available_options_message(emphasis));
        parts.join(" ")
    });
    Ok(())
}

fn apply_selection_set_on_scalar(
    error: &SelectionSetOnScalarError,
    tree: &mut ArgumentsRenderingTree,
) -> Result<(), ApplyError> {
    let (parent_path, field_name) =
        split_selection_path("SelectionSetOnScalar", &error.selection_path)?;

    match tree.arguments_mut().deep_selection_parent_mut(parent_path) {
        Some(SelectionParent { value, .. }) => {
            if let Some(field) = value.field_mut(field_name) {
                field.mark_as_error();
            }
        }
        None => selection_miss(parent_path),
    }

    let field_name = field_name.to_owned();
    tree.add_error_message(move |emphasis| {
        format!(
            "Invalid nested selection on scalar field {}.\nNote, that {} and {} statements are only allowed on relation fields.",
            emphasis.negative(&format!("`{field_name}`")),
            emphasis.bold("select"),
            emphasis.bold("include"),
        )
    });
    Ok(())
}

fn apply_unknown_argument(
    error: &UnknownArgumentError,
    tree: &mut ArgumentsRenderingTree,
) -> Result<(), ApplyError> {
    let Some((argument_name, holder_path)) = error.argument_path.split_last() else {
        return Err(ApplyError::EmptyArgumentPath);
    };

    // Arguments sit next to the selection wrapper; nested argument objects
    // are plain fields without a select/include hop.
    let holder = tree
        .arguments_mut()
        .deep_selection_value_mut(&error.selection_path)
        .and_then(|arguments| {
            holder_path.iter().try_fold(arguments, |object, segment| {
                object.field_value_mut(segment)?.as_object_mut()
            })
        });

    match holder {
        Some(holder) => {
            if let Some(field) = holder.field_mut(argument_name) {
                field.mark_as_error();
            }
            if holder_path.is_empty() {
                add_argument_suggestions(holder, &error.meta.arguments);
            }
        }
        None => tracing::debug!(
            selection_path = ?error.selection_path,
            argument_path = ?error.argument_path,
            "argument path did not resolve; rendering message only"
        ),
    }

    let argument_name = argument_name.clone();
    tree.add_error_message(move |emphasis| {
        format!(
            "Unknown argument {}. {}",
            emphasis.negative(&format!("`{argument_name}`")),
            available_options_message(emphasis),
        )
    });
    Ok(())
}

fn apply_missing_required_argument(
    error: &MissingRequiredArgumentError,
    tree: &mut ArgumentsRenderingTree,
) {
    let argument_name = error.meta.argument_name.clone();

    match tree
        .arguments_mut()
        .deep_selection_value_mut(&error.selection_path)
    {
        Some(arguments) => {
            suggest_field(arguments, &argument_name, &error.meta.argument_type.name);
        }
        None => selection_miss(&error.selection_path),
    }

    tree.add_error_message(move |emphasis| {
        format!(
            "Argument {} is missing.",
            emphasis.positive(&format!("`{argument_name}`"))
        )
    });
}

/// Suggest every output field the selection does not already have.
fn add_selection_suggestions(selection: &mut ObjectValue, output_type: &OutputTypeDescription) {
    for field in &output_type.fields {
        suggest_field(selection, &field.name, SELECT_SUGGESTION_VALUE);
    }
}

/// Suggest every accepted argument that was not supplied.
fn add_argument_suggestions(arguments: &mut ObjectValue, description: &ArgumentsDescription) {
    for argument in &description.args {
        suggest_field(arguments, &argument.name, &argument.type_names.join(" | "));
    }
}

/// Add a suggestion unless a field or suggestion with that name exists.
fn suggest_field(object: &mut ObjectValue, name: &str, value: &str) {
    let suggested = object
        .suggestions()
        .iter()
        .any(|suggestion| suggestion.field_name() == name);
    if !object.has_field(name) && !suggested {
        object.add_suggestion(ObjectFieldSuggestion::new(name, value));
    }
}

/// Split a field-targeting path into the parent selection path and field name.
fn split_selection_path<'p>(
    kind: &'static str,
    path: &'p [String],
) -> Result<(&'p [String], &'p str), ApplyError> {
    match path.split_last() {
        Some((field_name, parent_path)) => Ok((parent_path, field_name.as_str())),
        None => Err(ApplyError::EmptySelectionPath { kind }),
    }
}

fn selection_miss(path: &[String]) {
    tracing::debug!(?path, "selection path did not resolve; rendering message only");
}

fn available_options_message(emphasis: &dyn Emphasis) -> String {
    format!("Available options are listed in {}.", emphasis.positive("green"))
}
