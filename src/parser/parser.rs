//! Recursive descent parser for Java constructs
//!
//! One method per grammar production. The productions live in sibling
//! modules (`expressions`, `types`, `declarations`, `statements`) as
//! further `impl Parser` blocks; this file holds the shared state and the
//! token-level helpers they are written with.

use super::error::{ParseError, ParseResult};
use super::lexer::{LexicalToken, Token};
use super::stream::TokenStream;
use crate::config::ParserConfig;
use crate::cst::Identifier;

/// Parser over one token stream
pub struct Parser {
    pub(crate) stream: TokenStream,
    pub(crate) config: ParserConfig,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(stream: TokenStream, config: ParserConfig) -> Self {
        Self { stream, config, depth: 0 }
    }

    /// Lex `source` and create a parser positioned at its first token
    pub fn from_source(source: &str, config: ParserConfig) -> ParseResult<Self> {
        Ok(Self::new(TokenStream::from_source(source)?, config))
    }

    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn is_at_end(&self) -> bool {
        self.stream.is_at_end()
    }

    /// Fail unless every token has been consumed
    pub fn expect_end(&self) -> ParseResult<()> {
        match self.stream.peek(0) {
            None => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: vec!["end of input".to_string()],
                found: token.describe(),
                location: token.location,
            }),
        }
    }

    // Helper methods
    pub(crate) fn check(&self, token_type: Token) -> bool {
        self.stream.peek_token(0) == Some(token_type)
    }

    pub(crate) fn check_at(&self, offset: usize, token_type: Token) -> bool {
        self.stream.peek_token(offset) == Some(token_type)
    }

    pub(crate) fn advance(&mut self) -> ParseResult<LexicalToken> {
        self.stream.consume()
    }

    pub(crate) fn match_token(&mut self, token_type: Token) -> bool {
        if self.check(token_type) {
            self.stream.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token_type: Token) -> ParseResult<LexicalToken> {
        if self.check(token_type) {
            self.advance()
        } else {
            self.unexpected(&[token_type.describe()])
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.expect(Token::Identifier)?;
        Ok(Identifier::new(token.lexeme))
    }

    /// Failure describing the current token against `expected`
    pub(crate) fn unexpected<T>(&self, expected: &[&str]) -> ParseResult<T> {
        let expected = expected.iter().map(|e| e.to_string()).collect();
        match self.stream.peek(0) {
            Some(token) => Err(ParseError::UnexpectedToken {
                expected,
                found: token.describe(),
                location: token.location,
            }),
            None => Err(ParseError::EndOfInput {
                expected,
                location: self.stream.end_location(),
            }),
        }
    }

    /// Run `rule` one nesting level deeper, failing past `max_depth`
    pub(crate) fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.config.max_depth,
                location: self.stream.location(),
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Take one nesting level for a node built by a loop; the caller restores the depth
    pub(crate) fn deepen(&mut self) -> ParseResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.config.max_depth,
                location: self.stream.location(),
            });
        }
        self.depth += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(source: &str) -> Parser {
        Parser::from_source(source, ParserConfig::default()).unwrap()
    }

    #[test]
    fn expect_reports_expected_and_found() {
        let mut p = parser("( this");
        p.expect(Token::LParen).unwrap();
        let err = p.expect(Token::RParen).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: vec!["')'".to_string()],
                found: "'this'".to_string(),
                location: crate::parser::Location::new(1, 3, 2),
            }
        );
    }

    #[test]
    fn expect_at_end_is_end_of_input() {
        let mut p = parser("(");
        p.expect(Token::LParen).unwrap();
        assert!(matches!(p.expect(Token::RParen), Err(ParseError::EndOfInput { .. })));
    }

    #[test]
    fn expect_end_rejects_trailing_tokens() {
        let mut p = parser("a b");
        p.expect_identifier().unwrap();
        let err = p.expect_end().unwrap_err();
        assert_eq!(err.expected(), ["end of input".to_string()]);
    }

    #[test]
    fn nested_enforces_depth_limit() {
        let mut p = Parser::from_source("a", ParserConfig::default().with_max_depth(2)).unwrap();
        let result = p.nested(|p| p.nested(|p| p.nested(|_| Ok(()))));
        assert!(matches!(result, Err(ParseError::TooDeep { limit: 2, .. })));
        assert_eq!(p.depth, 0);
    }

    #[test]
    fn deepen_stops_at_the_limit() {
        let mut p = Parser::from_source("a", ParserConfig::default().with_max_depth(2)).unwrap();
        assert!(p.deepen().is_ok());
        assert!(p.deepen().is_ok());
        assert!(matches!(p.deepen(), Err(ParseError::TooDeep { limit: 2, .. })));
        assert_eq!(p.depth, 2);
    }
}
