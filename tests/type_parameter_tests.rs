mod common;

use common::{config, init_logger, json};
use jcst::cst::{TypeArgument, TypeType, WildcardBound};
use jcst::parser::{parse_type_parameter, parse_type_parameters, parse_type_type, ParseError};
use serde_json::json;

#[test]
fn type_parameter_identifier() {
    init_logger();
    let parameter = parse_type_parameter("A", config()).expect("Failed to parse");
    assert_eq!(
        json(&parameter),
        json!({
            "type": "TYPE_PARAMETER",
            "modifiers": [],
            "name": { "type": "IDENTIFIER", "value": "A" }
        })
    );
}

#[test]
fn type_parameter_annotations() {
    init_logger();
    let parameter = parse_type_parameter("@Bean A", config()).expect("Failed to parse");
    assert_eq!(
        json(&parameter),
        json!({
            "type": "TYPE_PARAMETER",
            "modifiers": [{
                "type": "ANNOTATION",
                "name": { "type": "QUALIFIED_NAME", "name": [{ "type": "IDENTIFIER", "value": "Bean" }] },
                "hasBraces": false
            }],
            "name": { "type": "IDENTIFIER", "value": "A" }
        })
    );
}

#[test]
fn type_parameter_type_bound() {
    init_logger();
    let parameter = parse_type_parameter("A extends boolean", config()).expect("Failed to parse");
    assert_eq!(
        json(&parameter),
        json!({
            "type": "TYPE_PARAMETER",
            "modifiers": [],
            "name": { "type": "IDENTIFIER", "value": "A" },
            "typeBound": {
                "type": "TYPE_BOUND",
                "list": [{ "type": "PRIMITIVE_TYPE", "value": "boolean" }]
            }
        })
    );
}

#[test]
fn type_parameter_intersection_bound() {
    init_logger();
    let parameter = parse_type_parameter("T extends Comparable<T> & java.io.Serializable", config())
        .expect("Failed to parse");
    let bound = parameter.type_bound.expect("bound");
    assert_eq!(bound.list.len(), 2);
    assert!(matches!(bound.list[0], TypeType::Element(_)));
    assert!(matches!(&bound.list[1], TypeType::Qualified(q) if q.list.len() == 3));
}

#[test]
fn type_parameters_list() {
    init_logger();
    let parameters = parse_type_parameters("<K, V extends List<K>>", config()).expect("Failed to parse");
    assert_eq!(parameters.list.len(), 2);
    assert_eq!(parameters.list[0].name.value, "K");
    assert!(parameters.list[1].type_bound.is_some());
}

#[test]
fn annotation_with_arguments_on_type_parameter() {
    init_logger();
    let parameter = parse_type_parameter(r#"@Named(value = "x", tags = {"a", "b"}) T"#, config())
        .expect("Failed to parse");
    let value = json(&parameter.modifiers[0]);
    assert_eq!(value["hasBraces"], json!(true));
    assert_eq!(value["value"]["type"], json!("ELEMENT_VALUE_PAIRS"));
    assert_eq!(value["value"]["list"][1]["value"]["type"], json!("ELEMENT_VALUE_ARRAY_INITIALIZER"));
}

#[test]
fn empty_annotation_parentheses_set_has_braces() {
    init_logger();
    let parameter = parse_type_parameter("@Bean() A", config()).expect("Failed to parse");
    assert_eq!(
        json(&parameter.modifiers[0]),
        json!({
            "type": "ANNOTATION",
            "name": { "type": "QUALIFIED_NAME", "name": [{ "type": "IDENTIFIER", "value": "Bean" }] },
            "hasBraces": true
        })
    );
}

#[test]
fn wildcards_in_type_arguments() {
    init_logger();
    let ty = parse_type_type("Map<? extends K, ? super V>", config()).expect("Failed to parse");
    let TypeType::Element(element) = ty else {
        panic!("expected a parameterized type, got {ty:?}");
    };
    let arguments = element.type_arguments.expect("type arguments").list;
    match (&arguments[0], &arguments[1]) {
        (TypeArgument::Wildcard(first), TypeArgument::Wildcard(second)) => {
            assert!(matches!(first.bound, Some(WildcardBound::Extends(_))));
            assert!(matches!(second.bound, Some(WildcardBound::Super(_))));
        }
        other => panic!("expected wildcards, got {other:?}"),
    }
}

#[test]
fn nested_type_arguments_close_on_adjacent_angles() {
    init_logger();
    let ty = parse_type_type("List<List<String>>[]", config()).expect("Failed to parse");
    let value = json(&ty);
    assert_eq!(value["type"], json!("TYPE_TYPE"));
    assert_eq!(value["dimensions"], json!(1));
    assert_eq!(value["value"]["type"], json!("CLASS_OR_INTERFACE_TYPE_ELEMENT"));
}

#[test]
fn diamond_is_rejected_outside_instance_creation() {
    init_logger();
    let err = parse_type_type("List<>", config()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{err}");
}

#[test]
fn missing_bound_type_is_rejected() {
    init_logger();
    let err = parse_type_parameter("A extends", config()).unwrap_err();
    assert!(matches!(err, ParseError::EndOfInput { .. }), "{err}");
}
