use super::error::{ParseError, ParseResult};
use super::lexer::{Lexer, LexicalToken, Token};
use super::span::Location;

/// Saved stream position, restored with [`TokenStream::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Cursor over the significant tokens of one source text.
///
/// The cursor position is the only mutable state, so a checkpoint fully
/// describes how far a rule got.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<LexicalToken>,
    position: usize,
    end: Location,
}

impl TokenStream {
    pub fn new(tokens: Vec<LexicalToken>, end: Location) -> Self {
        Self { tokens, position: 0, end }
    }

    /// Lex `source` and position the stream at its first token
    pub fn from_source(source: &str) -> ParseResult<Self> {
        let (tokens, end) = Lexer::new(source).tokenize_with_end()?;
        Ok(Self::new(tokens, end))
    }

    /// Token `offset` positions ahead of the cursor, `None` past the end
    pub fn peek(&self, offset: usize) -> Option<&LexicalToken> {
        self.tokens.get(self.position + offset)
    }

    pub fn peek_token(&self, offset: usize) -> Option<Token> {
        self.peek(offset).map(|t| t.token)
    }

    pub fn mark(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    pub fn reset(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0;
    }

    /// Advance past the current token and return it
    pub fn consume(&mut self) -> ParseResult<LexicalToken> {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                Ok(token.clone())
            }
            None => Err(ParseError::end_of_input("a token", self.end)),
        }
    }

    /// Step past the current token without reading it; no-op at the end
    pub fn bump(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Location of the current token, or of the end of input
    pub fn location(&self) -> Location {
        self.peek(0).map(|t| t.location).unwrap_or(self.end)
    }

    pub fn end_location(&self) -> Location {
        self.end
    }

    /// The most recently consumed token
    pub fn previous(&self) -> Option<&LexicalToken> {
        self.position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Number of tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_reset_restore_position() {
        let mut stream = TokenStream::from_source("(a) -> b").unwrap();
        let checkpoint = stream.mark();
        stream.consume().unwrap();
        stream.consume().unwrap();
        assert_eq!(stream.peek_token(0), Some(Token::RParen));
        assert_eq!(stream.previous().map(|t| t.lexeme()), Some("a"));

        stream.reset(checkpoint);
        assert_eq!(stream.peek_token(0), Some(Token::LParen));
        assert_eq!(stream.peek_token(3), Some(Token::Arrow));
        assert_eq!(stream.peek_token(5), None);
        assert_eq!(stream.remaining(), 5);
    }

    #[test]
    fn consume_at_end_is_end_of_input() {
        let mut stream = TokenStream::from_source("this  ").unwrap();
        stream.consume().unwrap();
        assert!(stream.is_at_end());
        assert_eq!(stream.location(), Location::new(1, 7, 6));
        match stream.consume() {
            Err(ParseError::EndOfInput { location, .. }) => assert_eq!(location.offset, 6),
            other => panic!("expected end of input, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_is_at_end() {
        let stream = TokenStream::from_source("  // nothing\n").unwrap();
        assert!(stream.is_at_end());
        assert!(stream.previous().is_none());
        assert_eq!(stream.location().line, 2);
    }
}
