//! Rendering scenarios for each validation error kind.
//!
//! Each test builds the tree from JSON arguments, applies one error, and
//! compares the full plain-text render.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use qarg_diagnostic::{
    render_validation_error, ColorMode, PlainEmphasis, RenderConfig, RenderedError,
    TerminalEmphasis,
};
use qarg_ir::{build_arguments_tree, ValidationError};
use serde_json::{json, Value};

fn render(error: Value, args: Value) -> RenderedError {
    let error = ValidationError::from_json(error).expect("valid error");
    let Value::Object(args) = args else {
        panic!("arguments must be an object");
    };
    render_validation_error(
        build_arguments_tree(&args),
        &error,
        &PlainEmphasis,
        RenderConfig::default(),
    )
    .expect("error applies")
}

fn lines(text: &[&str]) -> String {
    text.join("\n")
}

fn post_type() -> Value {
    json!({
        "name": "Post",
        "fields": [
            { "name": "id", "typeName": "Int", "isRelation": false },
            { "name": "title", "typeName": "String", "isRelation": false },
            { "name": "comments", "typeName": "Comment", "isRelation": true },
        ],
    })
}

// includeAndSelect

#[test]
fn include_and_select_top_level() {
    let rendered = render(
        json!({ "kind": "includeAndSelect", "selectionPath": [] }),
        json!({ "data": { "foo": "bar" }, "include": {}, "select": {} }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  data: {",
            "    foo: \"bar\"",
            "  },",
            "  include: {},",
            "  ~~~~~~~",
            "  select: {}",
            "  ~~~~~~",
            "}",
        ])
    );
    assert_eq!(
        rendered.message,
        "Please either use `include` or `select`, but not both at the same time."
    );
}

#[test]
fn include_and_select_deep() {
    let rendered = render(
        json!({ "kind": "includeAndSelect", "selectionPath": ["posts", "likes"] }),
        json!({
            "include": {
                "posts": {
                    "where": { "published": true },
                    "select": {
                        "likes": { "select": {}, "include": {} },
                    },
                },
            },
        }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  include: {",
            "    posts: {",
            "      where: {",
            "        published: true",
            "      },",
            "      select: {",
            "        likes: {",
            "          select: {},",
            "          ~~~~~~",
            "          include: {}",
            "          ~~~~~~~",
            "        }",
            "      }",
            "    }",
            "  }",
            "}",
        ])
    );
}

// includeOnScalar

#[test]
fn include_on_scalar_top_level_no_type_description() {
    let rendered = render(
        json!({ "kind": "includeOnScalar", "selectionPath": ["id"], "meta": {} }),
        json!({ "data": { "foo": "bar" }, "include": { "id": true } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  data: {",
            "    foo: \"bar\"",
            "  },",
            "  include: {",
            "    id: true",
            "    ~~",
            "  }",
            "}",
        ])
    );
    assert!(rendered
        .message
        .ends_with("Note, that include statements only accept relation fields."));
    assert!(!rendered.message.contains("on model"));
}

#[test]
fn include_on_scalar_top_level_with_type_description() {
    let rendered = render(
        json!({
            "kind": "includeOnScalar",
            "selectionPath": ["id"],
            "meta": {
                "outputType": {
                    "name": "User",
                    "fields": [
                        { "name": "id", "typeName": "Int", "isRelation": false },
                        { "name": "name", "typeName": "String", "isRelation": false },
                        { "name": "posts", "typeName": "Post", "isRelation": true },
                    ],
                },
            },
        }),
        json!({ "data": { "foo": "bar" }, "include": { "id": true } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  data: {",
            "    foo: \"bar\"",
            "  },",
            "  include: {",
            "    id: true,",
            "    ~~",
            "?   posts: true",
            "  }",
            "}",
        ])
    );
    assert!(rendered.message.contains("on model User."));
}

#[test]
fn include_on_scalar_nested_no_type_description() {
    let rendered = render(
        json!({ "kind": "includeOnScalar", "selectionPath": ["posts", "id"], "meta": {} }),
        json!({
            "data": { "foo": "bar" },
            "include": { "posts": { "include": { "id": true } } },
        }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  data: {",
            "    foo: \"bar\"",
            "  },",
            "  include: {",
            "    posts: {",
            "      include: {",
            "        id: true",
            "        ~~",
            "      }",
            "    }",
            "  }",
            "}",
        ])
    );
}

#[test]
fn include_on_scalar_nested_with_type_description() {
    let rendered = render(
        json!({
            "kind": "includeOnScalar",
            "selectionPath": ["posts", "id"],
            "meta": {
                "outputType": {
                    "name": "Post",
                    "fields": [
                        { "name": "id", "typeName": "Int", "isRelation": false },
                        { "name": "title", "typeName": "String", "isRelation": false },
                        { "name": "likes", "typeName": "Like", "isRelation": true },
                    ],
                },
            },
        }),
        json!({
            "data": { "foo": "bar" },
            "include": { "posts": { "include": { "id": true } } },
        }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  data: {",
            "    foo: \"bar\"",
            "  },",
            "  include: {",
            "    posts: {",
            "      include: {",
            "        id: true,",
            "        ~~",
            "?       likes: true",
            "      }",
            "    }",
            "  }",
            "}",
        ])
    );
}

// EmptySelection

#[test]
fn empty_selection_with_falsy_field_collapses_selection() {
    let rendered = render(
        json!({
            "kind": "EmptySelection",
            "selectionPath": [],
            "meta": { "outputType": post_type() },
        }),
        json!({ "select": { "id": false } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  select: {}",
            "}",
        ])
    );
    assert_eq!(
        rendered.message,
        "The `select` statement for type Post needs at least one truthy value."
    );
}

#[test]
fn empty_selection_without_fields() {
    let rendered = render(
        json!({
            "kind": "EmptySelection",
            "selectionPath": [],
            "meta": { "outputType": post_type() },
        }),
        json!({ "select": {} }),
    );

    assert_eq!(
        rendered.message,
        "The `select` statement for type Post must not be empty. \
         Available options are listed in green."
    );
}

#[test]
fn empty_selection_nested() {
    let rendered = render(
        json!({
            "kind": "EmptySelection",
            "selectionPath": ["posts"],
            "meta": { "outputType": post_type() },
        }),
        json!({ "select": { "name": true, "posts": { "select": {} } } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  select: {",
            "    name: true,",
            "    posts: {",
            "      select: {}",
            "    }",
            "  }",
            "}",
        ])
    );
}

// UnknownSelectionField

#[test]
fn unknown_selection_field() {
    let rendered = render(
        json!({
            "kind": "UnknownSelectionField",
            "selectionPath": ["titel"],
            "meta": { "outputType": post_type() },
        }),
        json!({ "select": { "id": true, "titel": true } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  select: {",
            "    id: true,",
            "    titel: true,",
            "    ~~~~~",
            "?   title: true,",
            "?   comments: true",
            "  }",
            "}",
        ])
    );
    assert_eq!(
        rendered.message,
        "Unknown field `titel` for select statement on model Post. \
         Available options are listed in green."
    );
}

// SelectionSetOnScalar

#[test]
fn selection_set_on_scalar_underlines_first_line() {
    let rendered = render(
        json!({ "kind": "SelectionSetOnScalar", "selectionPath": ["title"] }),
        json!({ "select": { "title": { "select": { "x": true } } } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  select: {",
            "    title: {",
            "    ~~~~~",
            "      select: {",
            "        x: true",
            "      }",
            "    }",
            "  }",
            "}",
        ])
    );
}

// UnknownArgument

#[test]
fn unknown_argument() {
    let rendered = render(
        json!({
            "kind": "UnknownArgument",
            "selectionPath": [],
            "argumentPath": ["wher"],
            "meta": { "arguments": { "args": [
                { "name": "where", "typeNames": ["PostWhereInput"] },
                { "name": "take", "typeNames": ["Int"] },
            ] } },
        }),
        json!({ "wher": { "id": 1 }, "select": { "id": true } }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&[
            "{",
            "  wher: {",
            "  ~~~~",
            "    id: 1",
            "  },",
            "  select: {",
            "    id: true",
            "  },",
            "? where: PostWhereInput,",
            "? take: Int",
            "}",
        ])
    );
    assert_eq!(
        rendered.message,
        "Unknown argument `wher`. Available options are listed in green."
    );
}

// MissingRequiredArgument

#[test]
fn missing_required_argument() {
    let rendered = render(
        json!({
            "kind": "MissingRequiredArgument",
            "selectionPath": [],
            "meta": {
                "argumentName": "where",
                "argumentType": { "name": "UserWhereUniqueInput", "field": [] },
            },
        }),
        json!({ "select": { "id": true } }),
    );

    assert_eq!(
        rendered.to_string(),
        lines(&[
            "{",
            "  select: {",
            "    id: true",
            "  },",
            "? where: UserWhereUniqueInput",
            "}",
            "",
            "Argument `where` is missing.",
        ])
    );
}

// Degraded and styled output

#[test]
fn unresolved_path_keeps_tree_plain() {
    let rendered = render(
        json!({ "kind": "includeAndSelect", "selectionPath": ["missing"] }),
        json!({ "select": { "id": true }, "include": {} }),
    );

    assert_eq!(
        rendered.arguments,
        lines(&["{", "  select: {", "    id: true", "  },", "  include: {}", "}"])
    );
    assert!(rendered.message.contains("not both"));
}

#[test]
fn colored_render_styles_annotations_and_message() {
    let error = ValidationError::from_json(json!({ "kind": "includeAndSelect", "selectionPath": [] }))
        .expect("valid error");
    let Value::Object(args) = json!({ "select": {}, "include": {} }) else {
        unreachable!();
    };
    let emphasis = TerminalEmphasis::with_color_mode(ColorMode::Always, false);

    let rendered = render_validation_error(
        build_arguments_tree(&args),
        &error,
        &emphasis,
        RenderConfig::default(),
    )
    .expect("error applies");

    assert!(rendered.arguments.contains("  \x1b[91m~~~~~~\x1b[0m"));
    assert!(rendered.message.contains("\x1b[1meither\x1b[0m"));
    assert!(rendered.message.contains("\x1b[92m`include`\x1b[0m"));
    assert!(rendered.message.contains("\x1b[91mnot both\x1b[0m"));
}
