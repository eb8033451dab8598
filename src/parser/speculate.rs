//! Speculative parsing with rollback
//!
//! Used where a lookahead gate cannot pick an alternative on its own. The
//! stream cursor and the nesting depth are the only parser state, so
//! restoring both leaves the parser exactly as it was before the attempt,
//! including any progress made by inner attempts.

use super::error::{ParseError, ParseResult};
use super::parser::Parser;

/// A named grammar alternative
pub type Alternative<T> = (&'static str, fn(&mut Parser) -> ParseResult<T>);

impl Parser {
    /// Run `rule`; on failure restore the position it started from
    pub fn attempt<T>(&mut self, name: &str, rule: impl FnOnce(&mut Parser) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.stream.mark();
        let depth = self.depth;
        log::trace!("attempting {} at {}", name, self.stream.location());

        match rule(self) {
            Ok(node) => {
                log::trace!("committed {}", name);
                Ok(node)
            }
            Err(err) => {
                self.stream.reset(checkpoint);
                self.depth = depth;
                log::trace!("rolled back {} to {}: {}", name, self.stream.location(), err);
                Err(err)
            }
        }
    }

    /// Try each alternative in order and keep the first that parses.
    ///
    /// Fails with `ExhaustedAlternatives` carrying every branch failure when
    /// none does. A nesting-limit failure is returned as is, since every
    /// other branch would run into the same limit.
    pub fn first_of<T>(&mut self, construct: &str, alternatives: &[Alternative<T>]) -> ParseResult<T> {
        let location = self.stream.location();
        let mut failures = Vec::with_capacity(alternatives.len());

        for (name, rule) in alternatives {
            match self.attempt(name, *rule) {
                Ok(node) => return Ok(node),
                Err(err @ ParseError::TooDeep { .. }) => return Err(err),
                Err(err) => failures.push(err),
            }
        }

        log::trace!("no alternative matched for {} at {}", construct, location);
        Err(ParseError::ExhaustedAlternatives {
            construct: construct.to_string(),
            failures,
            location,
        })
    }
}
