//! Parser module for Java constructs
//!
//! Lexing, the token stream, lookahead gates, speculative parsing and the
//! grammar productions. Each production can be driven on its own through
//! the `parse_*` functions below.

pub mod lexer;
pub mod span;
pub mod error;
pub mod stream;
pub mod gates;
pub mod speculate;
pub mod parser;
mod declarations;
mod expressions;
mod statements;
mod types;

pub use error::{ParseError, ParseResult};
pub use gates::{Decision, ForControlAlternative, ParenAlternative};
pub use lexer::{Lexer, LexicalToken, Token};
pub use parser::Parser;
pub use span::{Location, Span};
pub use speculate::Alternative;
pub use stream::{Checkpoint, TokenStream};

use crate::config::ParserConfig;
use crate::cst::{
    Block, Expression, ForControl, LocalVariableDeclaration, Modifier, Statement, TypeParameter, TypeParameters,
    TypeType,
};

/// Parse all of `source` with `rule`, rejecting leftover tokens
pub fn parse_with<T>(
    source: &str,
    config: ParserConfig,
    rule: impl FnOnce(&mut Parser) -> ParseResult<T>,
) -> ParseResult<T> {
    let mut parser = Parser::from_source(source, config)?;
    let node = rule(&mut parser)?;
    parser.expect_end()?;
    Ok(node)
}

pub fn parse_for_control(source: &str, config: ParserConfig) -> ParseResult<ForControl> {
    log::debug!("parsing for header: {}", source);
    parse_with(source, config, Parser::for_control)
}

pub fn parse_par_cast_or_lambda_expression(source: &str, config: ParserConfig) -> ParseResult<Expression> {
    log::debug!("parsing parenthesized expression: {}", source);
    parse_with(source, config, Parser::par_cast_or_lambda_expression)
}

pub fn parse_expression(source: &str, config: ParserConfig) -> ParseResult<Expression> {
    log::debug!("parsing expression: {}", source);
    parse_with(source, config, Parser::expression)
}

pub fn parse_type_parameter(source: &str, config: ParserConfig) -> ParseResult<TypeParameter> {
    log::debug!("parsing type parameter: {}", source);
    parse_with(source, config, Parser::type_parameter)
}

pub fn parse_type_parameters(source: &str, config: ParserConfig) -> ParseResult<TypeParameters> {
    log::debug!("parsing type parameters: {}", source);
    parse_with(source, config, Parser::type_parameters)
}

pub fn parse_type_type(source: &str, config: ParserConfig) -> ParseResult<TypeType> {
    log::debug!("parsing type: {}", source);
    parse_with(source, config, Parser::type_type)
}

pub fn parse_local_variable_declaration(source: &str, config: ParserConfig) -> ParseResult<LocalVariableDeclaration> {
    log::debug!("parsing local variable declaration: {}", source);
    parse_with(source, config, Parser::local_variable_declaration)
}

pub fn parse_block(source: &str, config: ParserConfig) -> ParseResult<Block> {
    log::debug!("parsing block: {}", source);
    parse_with(source, config, Parser::block)
}

pub fn parse_statement(source: &str, config: ParserConfig) -> ParseResult<Statement> {
    log::debug!("parsing statement: {}", source);
    parse_with(source, config, Parser::statement)
}

pub fn parse_modifiers(source: &str, config: ParserConfig) -> ParseResult<Vec<Modifier>> {
    log::debug!("parsing modifiers: {}", source);
    parse_with(source, config, Parser::modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_tokens_are_rejected() {
        match parse_expression("a b", ParserConfig::default()) {
            Err(ParseError::UnexpectedToken { expected, found, .. }) => {
                assert_eq!(expected, vec!["end of input".to_string()]);
                assert_eq!(found, "'b'");
            }
            other => panic!("expected trailing token error, got {other:?}"),
        }
    }

    #[test]
    fn lexical_errors_surface_from_entry_points() {
        assert!(matches!(
            parse_statement("a = #;", ParserConfig::default()),
            Err(ParseError::Lexical { .. })
        ));
    }
}
