use jcst::cst::{ForControl, ForInit};
use jcst::parser::parse_for_control;
use jcst::ParserConfig;
use proptest::prelude::*;

const KEYWORDS: &[&str] = &[
    "assert", "break", "byte", "case", "catch", "char", "class", "do", "double", "else", "enum", "false", "final",
    "float", "for", "if", "import", "int", "long", "native", "new", "null", "public", "return", "short", "static",
    "super", "switch", "this", "throw", "throws", "true", "try", "void", "while",
];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}".prop_filter("keywords are not identifiers", |s| !KEYWORDS.contains(&s.as_str()))
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![identifier(), (0u32..1000).prop_map(|n| n.to_string())]
}

fn declaration_init() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("final "), Just("@Bean ")],
        prop_oneof![Just("int"), Just("long"), Just("String"), Just("List<String>")],
        prop::collection::vec((identifier(), operand()), 1..4),
    )
        .prop_map(|(modifiers, ty, declarators)| {
            let declarators: Vec<String> = declarators.iter().map(|(n, v)| format!("{n} = {v}")).collect();
            format!("{modifiers}{ty} {}", declarators.join(", "))
        })
}

fn expression_init() -> impl Strategy<Value = String> {
    prop::collection::vec((identifier(), operand()), 1..4).prop_map(|assignments| {
        let assignments: Vec<String> = assignments.iter().map(|(n, v)| format!("{n} = {v}")).collect();
        assignments.join(", ")
    })
}

fn condition() -> impl Strategy<Value = String> {
    (operand(), prop_oneof![Just("<"), Just("<="), Just(">"), Just("!=")], operand())
        .prop_map(|(l, op, r)| format!("{l} {op} {r}"))
}

fn update() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            identifier().prop_map(|n| format!("{n}++")),
            identifier().prop_map(|n| format!("--{n}")),
            (identifier(), operand()).prop_map(|(n, v)| format!("{n} += {v}")),
        ],
        1..3,
    )
    .prop_map(|updates| updates.join(", "))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum InitShape {
    Empty,
    Declaration,
    Expressions,
}

fn header() -> impl Strategy<Value = (InitShape, String)> {
    (
        prop_oneof![
            Just((InitShape::Empty, String::new())),
            declaration_init().prop_map(|s| (InitShape::Declaration, s)),
            expression_init().prop_map(|s| (InitShape::Expressions, s)),
        ],
        prop::option::of(condition()),
        prop::option::of(update()),
    )
        .prop_map(|((shape, init), condition, update)| {
            let source = format!(
                "{init}; {}; {}",
                condition.unwrap_or_default(),
                update.unwrap_or_default()
            );
            (shape, source)
        })
}

proptest! {
    #[test]
    fn basic_headers_have_exactly_one_init_shape((shape, source) in header()) {
        let control = parse_for_control(&source, ParserConfig::default())
            .map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        let ForControl::Basic(basic) = &control else {
            return Err(TestCaseError::fail(format!("{source} parsed as enhanced")));
        };
        let parsed = match &basic.for_init {
            None => InitShape::Empty,
            Some(ForInit::LocalVariableDeclaration(_)) => InitShape::Declaration,
            Some(ForInit::ExpressionList(_)) => InitShape::Expressions,
        };
        prop_assert_eq!(parsed, shape);

        let printed = control.to_string();
        let reparsed = parse_for_control(&printed, ParserConfig::default())
            .map_err(|e| TestCaseError::fail(format!("{printed}: {e}")))?;
        prop_assert_eq!(reparsed, control);
    }

    #[test]
    fn small_lookahead_never_changes_the_tree((_shape, source) in header(), limit in 1usize..6) {
        let wide = parse_for_control(&source, ParserConfig::default());
        let narrow = parse_for_control(&source, ParserConfig::default().with_max_lookahead(limit));
        prop_assert_eq!(wide.ok(), narrow.ok());
    }
}
