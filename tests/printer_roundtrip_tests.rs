mod common;

use common::{config, init_logger};
use jcst::parser::{
    parse_block, parse_expression, parse_for_control, parse_local_variable_declaration, parse_statement,
    parse_type_parameters, parse_type_type,
};

fn assert_expression_roundtrip(source: &str) {
    init_logger();
    let first = parse_expression(source, config()).expect("Failed to parse");
    let printed = first.to_string();
    let second = parse_expression(&printed, config()).unwrap_or_else(|e| panic!("reparse of {printed:?}: {e}"));
    assert_eq!(first, second, "printed as {printed:?}");
}

fn assert_statement_roundtrip(source: &str) {
    init_logger();
    let first = parse_statement(source, config()).expect("Failed to parse");
    let printed = first.to_string();
    let second = parse_statement(&printed, config()).unwrap_or_else(|e| panic!("reparse of {printed:?}: {e}"));
    assert_eq!(first, second, "printed as {printed:?}");
}

#[test]
fn expressions_roundtrip() {
    let sources = [
        "a + b * c - d / e % f",
        "(a + b) * c",
        "(a - (b * c)) < d",
        "a && b ? c : d",
        "a ? b : c ? d : e",
        "x = y += z <<= 2",
        "a >> 1 >>> 2 > b",
        "a instanceof List<? extends Number> && !done",
        "- -a + ~b - -1",
        "+ ++i - i--",
        "(int) x + (String) map.get(key)",
        "((LazyObject) obj).getIdentifier() == getIdentifier()",
        "new ArrayList<>(16).iterator().next()",
        "new int[n][m][]",
        "new String[][] {{\"a\"}, {}}",
        "values[i][j].length",
        "Outer.this.field",
        "String.class",
        "x -> x * 2",
        "(a, b) -> a.compareTo(b)",
        "(final int a, String... rest) -> {}",
        "() -> { return 1; }",
        "0x1F | 0b1010 & 017 ^ 42L",
        "'c' + \"s\" + 1.5e10 + null",
    ];
    for source in sources {
        assert_expression_roundtrip(source);
    }
}

#[test]
fn statements_roundtrip() {
    let sources = [
        "if (a) b(); else if (c) { d(); } else e();",
        "if (a) { b(); } else { c(); }",
        "while (running) { if (done) break; tick(); }",
        "do i++; while (i < 10);",
        "do { i++; } while (i < 10);",
        "for (int i = 0, j = n; i < j; i++, j--) swap(i, j);",
        "for (@Bean final Bean bean : beans) { use(bean); }",
        "for (;;) {}",
        "{ ; { int[] a = {1, 2,}, b[] = {}; } }",
        "return a == null ? 0 : a.size();",
        "continue outer;",
        "throw new IllegalStateException(\"bad\");",
        "final java.util.Map.Entry<K, V> e = it.next();",
    ];
    for source in sources {
        assert_statement_roundtrip(source);
    }
}

#[test]
fn other_rules_roundtrip() {
    init_logger();

    let header = parse_for_control("int i = 0; i < n; i++", config()).expect("Failed to parse");
    assert_eq!(header.to_string(), "int i = 0; i < n; i++");
    assert_eq!(parse_for_control(&header.to_string(), config()).expect("reparse"), header);

    let declaration = parse_local_variable_declaration(
        r#"@SuppressWarnings({"unchecked", "rawtypes"}) @Named(value = "x") final List<int[]> xs"#,
        config(),
    )
    .expect("Failed to parse");
    assert_eq!(
        parse_local_variable_declaration(&declaration.to_string(), config()).expect("reparse"),
        declaration
    );

    let parameters = parse_type_parameters("<@A T extends Comparable<T> & Serializable, U>", config())
        .expect("Failed to parse");
    assert_eq!(parameters.to_string(), "<@A T extends Comparable<T> & Serializable, U>");

    let ty = parse_type_type("@NonNull Map<String, List<? super Integer>>[][]", config()).expect("Failed to parse");
    assert_eq!(ty.to_string(), "@NonNull Map<String, List<? super Integer>>[][]");
}

#[test]
fn blocks_print_with_two_space_indentation() {
    init_logger();
    let block = parse_block("{ while (running) { if (done) break; } return; }", config()).expect("Failed to parse");
    assert_eq!(
        block.to_string(),
        "{\n  while (running) {\n    if (done)\n      break;\n  }\n  return;\n}"
    );
    assert_eq!(parse_block(&block.to_string(), config()).expect("reparse"), block);
}
