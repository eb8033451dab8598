//! Java concrete syntax tree parser (jcst)
//!
//! Parses Java constructs into a concrete syntax tree of tagged nodes. The
//! grammar's ambiguous spots are settled by bounded lookahead first and by
//! speculative parsing with rollback when lookahead cannot decide.
//!
//! ## Architecture
//!
//! - **parser**: lexer, token stream, lookahead gates, speculation and the
//!   grammar productions, each usable as its own entry point
//! - **cst**: node types, JSON serialization and the source printer
//! - **config**: nesting and lookahead limits
//! - **bin**: command-line interface
//!
//! ## Parsing Flow
//!
//! ```text
//! Source → Lexer → TokenStream → Parser (gates ⇄ speculation) → CST → JSON / source text
//! ```

pub mod config;
pub mod consts;
pub mod cst;
pub mod error;
pub mod parser;

pub use config::ParserConfig;
pub use error::{Error, Result};

use std::path::Path;

/// Read `path` and parse its whole contents with `rule`
pub fn parse_file<T>(
    path: impl AsRef<Path>,
    config: ParserConfig,
    rule: impl FnOnce(&mut parser::Parser) -> parser::ParseResult<T>,
) -> Result<T> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let source = std::fs::read_to_string(path)?;
    Ok(parser::parse_with(&source, config, rule)?)
}
