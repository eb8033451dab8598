mod common;

use common::{config, init_logger};
use jcst::parser::{
    parse_expression, parse_for_control, parse_par_cast_or_lambda_expression, parse_statement, ParseError,
};
use jcst::{Error, ParserConfig};

#[test]
fn unexpected_token_carries_expectation_and_position() {
    init_logger();
    let err = parse_statement("while (a {", config()).unwrap_err();
    match &err {
        ParseError::UnexpectedToken { expected, found, location } => {
            assert_eq!(expected, &vec!["')'".to_string()]);
            assert_eq!(found, "'{'");
            assert_eq!(location.to_string(), "1:10");
        }
        other => panic!("expected unexpected token, got {other:?}"),
    }
    assert_eq!(err.to_string(), "parse error at 1:10: expected ')', found '{'");
}

#[test]
fn end_of_input_reports_the_end_position() {
    init_logger();
    let err = parse_expression("foo(a,\n  b", config()).unwrap_err();
    match err {
        ParseError::EndOfInput { location, .. } => {
            assert_eq!((location.line, location.column), (2, 4));
        }
        other => panic!("expected end of input, got {other:?}"),
    }
}

#[test]
fn exhausted_alternatives_keep_every_branch_failure() {
    init_logger();
    // A lookahead of one token cannot classify the parentheses
    let narrow = ParserConfig::default().with_max_lookahead(1);
    let err = parse_par_cast_or_lambda_expression("(a b)", narrow).unwrap_err();
    match &err {
        ParseError::ExhaustedAlternatives { construct, failures, location } => {
            assert_eq!(construct, "parenthesized, cast or lambda expression");
            assert_eq!(failures.len(), 3);
            assert_eq!(location.offset, 0);
        }
        other => panic!("expected exhausted alternatives, got {other:?}"),
    }
    assert!(err.deepest().location().offset >= 3);
}

#[test]
fn speculation_recovers_when_lookahead_is_exhausted() {
    init_logger();
    let narrow = ParserConfig::default().with_max_lookahead(1);
    let expression = parse_par_cast_or_lambda_expression("(a, b) -> a + b", narrow).expect("Failed to parse");
    assert!(matches!(expression, jcst::cst::Expression::LambdaExpression { .. }));

    let expression = parse_par_cast_or_lambda_expression("(Object) value", narrow).expect("Failed to parse");
    assert!(matches!(expression, jcst::cst::Expression::CastExpression { .. }));
}

#[test]
fn nesting_limit_is_enforced() {
    init_logger();
    let shallow = ParserConfig::default().with_max_depth(16);
    let source = format!("{}x{}", "(".repeat(64), ")".repeat(64));
    let err = parse_expression(&source, shallow).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 16, .. }), "{err}");

    let expression = parse_expression(&source, config());
    assert!(expression.is_ok());
}

#[test]
fn lexical_error_positions() {
    init_logger();
    let err = parse_for_control("int i = 0;\n i < #;", config()).unwrap_err();
    match err {
        ParseError::Lexical { message, location } => {
            assert!(message.contains('#'), "{message}");
            assert_eq!((location.line, location.column), (2, 6));
        }
        other => panic!("expected lexical error, got {other:?}"),
    }
}

#[test]
fn library_error_wraps_parse_failures() {
    let err: Error = parse_expression("(", config()).unwrap_err().into();
    assert!(err.as_parse_error().is_some());
    assert!(err.to_string().starts_with("parse error at"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = jcst::parse_file("/nonexistent/definitely/missing.java", config(), |p| p.expression()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn right_associative_chains_hit_the_nesting_limit() {
    init_logger();
    let limited = ParserConfig::default().with_max_depth(128);

    let assignments = vec!["a"; 1000].join(" = ");
    let err = parse_expression(&assignments, limited).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }), "{err}");

    let conditionals = format!("{}c", "a ? b : ".repeat(20000));
    let err = parse_expression(&conditionals, limited).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }), "{err}");
}

#[test]
fn long_left_associative_chains_hit_the_nesting_limit() {
    init_logger();
    let limited = ParserConfig::default().with_max_depth(128);

    let sums = vec!["a"; 1000].join(" + ");
    let err = parse_expression(&sums, limited).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }), "{err}");

    let members = format!("a{}", ".b".repeat(1000));
    let err = parse_expression(&members, limited).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: 128, .. }), "{err}");
}

#[test]
fn moderate_chains_stay_within_the_default_limit() {
    init_logger();
    let sums = vec!["a"; 60].join(" + ");
    assert!(parse_expression(&sums, config()).is_ok());

    let assignments = vec!["a"; 30].join(" = ");
    assert!(parse_expression(&assignments, config()).is_ok());

    let members = format!("a{}", ".b()".repeat(60));
    assert!(parse_expression(&members, config()).is_ok());
}
