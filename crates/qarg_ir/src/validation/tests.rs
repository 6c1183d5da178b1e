use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_include_and_select() {
    let parsed = ValidationError::from_json(json!({
        "kind": "includeAndSelect",
        "selectionPath": ["posts", "likes"],
    }));

    let Ok(error) = parsed else {
        panic!("expected includeAndSelect to parse: {parsed:?}");
    };
    assert_eq!(error.kind(), "includeAndSelect");
    assert_eq!(error.selection_path(), ["posts", "likes"]);
}

#[test]
fn test_parse_include_on_scalar_without_meta() {
    let parsed = ValidationError::from_json(json!({
        "kind": "includeOnScalar",
        "selectionPath": ["id"],
    }));

    assert!(matches!(
        parsed,
        Ok(ValidationError::IncludeOnScalar(IncludeOnScalarError {
            meta: IncludeOnScalarMeta { output_type: None },
            ..
        }))
    ));
}

#[test]
fn test_parse_empty_selection_meta() {
    let parsed = ValidationError::from_json(json!({
        "kind": "EmptySelection",
        "selectionPath": [],
        "meta": {
            "outputType": {
                "name": "Post",
                "fields": [
                    { "name": "id", "typeName": "Int", "isRelation": false },
                    { "name": "comments", "typeName": "Comment", "isRelation": true },
                ],
            },
        },
    }));

    let Ok(ValidationError::EmptySelection(error)) = parsed else {
        panic!("expected EmptySelection: {parsed:?}");
    };
    assert_eq!(error.meta.output_type.name, "Post");
    assert_eq!(
        error.meta.output_type.fields[1],
        OutputTypeDescriptionField {
            name: "comments".to_owned(),
            type_name: "Comment".to_owned(),
            is_relation: true,
        }
    );
}

#[test]
fn test_parse_unknown_argument() {
    let parsed = ValidationError::from_json(json!({
        "kind": "UnknownArgument",
        "selectionPath": [],
        "argumentPath": ["wher"],
        "meta": { "arguments": { "args": [{ "name": "where", "typeNames": ["PostWhereInput"] }] } },
    }));

    let Ok(ValidationError::UnknownArgument(error)) = parsed else {
        panic!("expected UnknownArgument: {parsed:?}");
    };
    assert_eq!(error.argument_path, ["wher"]);
    assert_eq!(error.meta.arguments.args[0].type_names, ["PostWhereInput"]);
}

#[test]
fn test_parse_missing_required_argument() {
    let parsed = ValidationError::from_json(json!({
        "kind": "MissingRequiredArgument",
        "selectionPath": [],
        "meta": {
            "argumentName": "where",
            "argumentType": { "name": "UserWhereUniqueInput", "field": [] },
        },
    }));

    let Ok(ValidationError::MissingRequiredArgument(error)) = parsed else {
        panic!("expected MissingRequiredArgument: {parsed:?}");
    };
    assert_eq!(error.meta.argument_name, "where");
    assert_eq!(error.meta.argument_type.name, "UserWhereUniqueInput");
}

#[test]
fn test_unknown_kind_is_unsupported() {
    let parsed = ValidationError::from_json(json!({ "kind": "ValueTooLarge", "selectionPath": [] }));
    assert!(matches!(parsed, Err(ParseError::UnsupportedKind(kind)) if kind == "ValueTooLarge"));
}

#[test]
fn test_missing_kind() {
    let parsed = ValidationError::from_json(json!({ "selectionPath": [] }));
    assert!(matches!(parsed, Err(ParseError::MissingKind)));

    let parsed = ValidationError::from_json(json!({ "kind": 3 }));
    assert!(matches!(parsed, Err(ParseError::MissingKind)));
}

#[test]
fn test_malformed_payload() {
    let parsed = ValidationError::from_json(json!({ "kind": "EmptySelection", "selectionPath": [] }));
    let Err(error) = parsed else {
        panic!("missing meta must not parse");
    };
    assert!(matches!(error, ParseError::Malformed { ref kind, .. } if kind == "EmptySelection"));
    assert!(error.to_string().starts_with("malformed `EmptySelection` validation error"));
}

#[test]
fn test_kinds_round_trip_through_serde() {
    let errors = [
        ValidationError::IncludeAndSelect(IncludeAndSelectError::default()),
        ValidationError::IncludeOnScalar(IncludeOnScalarError::default()),
        ValidationError::SelectionSetOnScalar(SelectionSetOnScalarError::default()),
    ];
    for error in errors {
        let Ok(value) = serde_json::to_value(&error) else {
            panic!("serializable");
        };
        assert_eq!(value["kind"], error.kind());
        assert!(ValidationError::KINDS.contains(&error.kind()));
        assert!(matches!(ValidationError::from_json(value), Ok(ref parsed) if *parsed == error));
    }
}
