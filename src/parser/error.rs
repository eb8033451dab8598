use super::span::Location;
use thiserror::Error;

/// Failure raised by a grammar rule.
///
/// A failure is never recovered inside the parser: it either unwinds a
/// speculative attempt (which rolls the stream back) or reaches the caller
/// of the entry rule with its position intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required terminal did not match at the current position
    #[error("parse error at {location}: expected {}, found {found}", .expected.join(" or "))]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
        location: Location,
    },

    /// Every branch of an ambiguous construct failed
    #[error("parse error at {location}: no alternative matched for {construct}{}", describe_failures(.failures))]
    ExhaustedAlternatives {
        construct: String,
        failures: Vec<ParseError>,
        location: Location,
    },

    /// A rule needed another token but the stream was exhausted
    #[error("parse error at {location}: unexpected end of input, expected {}", .expected.join(" or "))]
    EndOfInput {
        expected: Vec<String>,
        location: Location,
    },

    #[error("lexical error at {location}: {message}")]
    Lexical {
        message: String,
        location: Location,
    },

    #[error("parse error at {location}: nesting exceeds {limit} levels")]
    TooDeep {
        limit: usize,
        location: Location,
    },
}

fn describe_failures(failures: &[ParseError]) -> String {
    if failures.is_empty() {
        return String::new();
    }
    let reasons: Vec<String> = failures.iter().map(|f| f.to_string()).collect();
    format!(" [{}]", reasons.join("; "))
}

impl ParseError {
    /// Create a new unexpected token error
    pub fn unexpected_token(expected: &str, found: &str, location: Location) -> Self {
        ParseError::UnexpectedToken {
            expected: vec![expected.to_string()],
            found: found.to_string(),
            location,
        }
    }

    /// Create a new unexpected end of input error
    pub fn end_of_input(expected: &str, location: Location) -> Self {
        ParseError::EndOfInput {
            expected: vec![expected.to_string()],
            location,
        }
    }

    /// Get the location of the error
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::ExhaustedAlternatives { location, .. }
            | ParseError::EndOfInput { location, .. }
            | ParseError::Lexical { location, .. }
            | ParseError::TooDeep { location, .. } => *location,
        }
    }

    /// Expected token descriptions, when the error carries any
    pub fn expected(&self) -> &[String] {
        match self {
            ParseError::UnexpectedToken { expected, .. } | ParseError::EndOfInput { expected, .. } => expected,
            _ => &[],
        }
    }

    /// The failure that got furthest into the input.
    ///
    /// For exhausted alternatives this descends into the branch failures,
    /// which is usually the most useful one to show a user.
    pub fn deepest(&self) -> &ParseError {
        match self {
            ParseError::ExhaustedAlternatives { failures, .. } => failures
                .iter()
                .map(ParseError::deepest)
                .max_by_key(|f| f.location().offset)
                .unwrap_or(self),
            _ => self,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
