use std::collections::HashMap;
use std::io::Write;

use jcst::consts::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LOOKAHEAD, ENV_MAX_DEPTH, ENV_MAX_LOOKAHEAD};
use jcst::cst::{ForControl, Statement};
use jcst::parser::Parser;
use jcst::{parse_file, Error, ParserConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_without_variables() {
    let config = ParserConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, ParserConfig::default());
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.max_lookahead, DEFAULT_MAX_LOOKAHEAD);
}

#[test]
fn variables_override_defaults() {
    let config = ParserConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "32"), (ENV_MAX_LOOKAHEAD, " 8 ")])).expect("config");
    assert_eq!(config, ParserConfig::new().with_max_depth(32).with_max_lookahead(8));
}

#[test]
fn malformed_variables_are_config_errors() {
    let err = ParserConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "deep")])).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains(ENV_MAX_DEPTH), "{err}");

    let err = ParserConfig::from_lookup(lookup(&[(ENV_MAX_LOOKAHEAD, "0")])).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn parse_file_reads_and_parses() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "for (int i = 0; i < 10; i++) {{\n  total += i;\n}}").expect("write");

    let statement = parse_file(file.path(), ParserConfig::default(), Parser::statement).expect("Failed to parse file");
    let Statement::For(for_statement) = statement else {
        panic!("expected a for statement");
    };
    assert!(matches!(for_statement.control, ForControl::Basic(_)));
}

#[test]
fn parse_file_surfaces_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "for (int i = 0; i < 10) {{}}").expect("write");

    let err = parse_file(file.path(), ParserConfig::default(), Parser::statement).unwrap_err();
    let parse_error = err.as_parse_error().expect("parse error");
    assert_eq!(parse_error.expected(), ["';'".to_string()]);
}
