use jcst::parser::parse_par_cast_or_lambda_expression;
use jcst::ParserConfig;
use proptest::prelude::*;

const KEYWORDS: &[&str] = &[
    "assert", "break", "byte", "case", "catch", "char", "class", "do", "double", "else", "enum", "false", "final",
    "float", "for", "if", "import", "int", "long", "native", "new", "null", "public", "return", "short", "static",
    "super", "switch", "this", "throw", "throws", "true", "try", "void", "while",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}".prop_filter("keywords are not identifiers", |s| !KEYWORDS.contains(&s.as_str()))
}

fn type_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{0,4}",
        Just("List<String>".to_string()),
        Just("Map<K, ? extends V>".to_string()),
        Just("java.util.List".to_string()),
        Just("Object[]".to_string()),
    ]
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier(),
        (0u32..100).prop_map(|n| n.to_string()),
        Just("this".to_string()),
        identifier().prop_map(|n| format!("{n}()")),
        identifier().prop_map(|n| format!("({n})")),
    ]
}

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("<"),
        Just(">"),
        Just(">>"),
        Just("=="),
        Just("&&"),
        Just("|"),
    ]
}

fn shape() -> impl Strategy<Value = String> {
    prop_oneof![
        // parenthesized name or group followed by an operator
        (identifier(), binary_operator(), operand()).prop_map(|(n, op, r)| format!("({n}) {op} {r}")),
        (identifier(), binary_operator(), operand(), binary_operator(), operand())
            .prop_map(|(n, a, l, b, r)| format!("({n} {a} {l}) {b} {r}")),
        // reference casts take operands that do not start with a sign
        (type_name(), prop_oneof![Just(""), Just("!"), Just("~")], operand())
            .prop_map(|(t, prefix, o)| format!("({t}) {prefix}{o}")),
        // primitive casts take any unary operand
        (
            prop_oneof![Just("int"), Just("long"), Just("char"), Just("double")],
            prop_oneof![Just(""), Just("-"), Just("+"), Just("++"), Just("~")],
            identifier()
        )
            .prop_map(|(t, prefix, o)| format!("({t}) {prefix}{o}")),
        // lambdas
        prop::collection::vec(identifier(), 0..3).prop_map(|names| {
            let body = names.first().cloned().unwrap_or_else(|| "0".to_string());
            format!("({}) -> {body}", names.join(", "))
        }),
        (type_name(), identifier()).prop_map(|(t, n)| format!("(final {t} {n}) -> {{ return {n}; }}")),
    ]
}

proptest! {
    #[test]
    fn small_lookahead_never_changes_the_expression(source in shape(), limit in 1usize..6) {
        let wide = parse_par_cast_or_lambda_expression(&source, ParserConfig::default())
            .map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        let narrow = parse_par_cast_or_lambda_expression(&source, ParserConfig::default().with_max_lookahead(limit))
            .map_err(|e| TestCaseError::fail(format!("{source} with lookahead {limit}: {e}")))?;
        prop_assert_eq!(wide, narrow, "{}", source);
    }
}
