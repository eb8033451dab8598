//! Lookahead gates
//!
//! A gate inspects upcoming tokens without consuming them and picks the
//! grammar alternative that applies. Gates never fail: when the answer
//! would need more than `max_lookahead` tokens they report
//! [`Decision::Undecidable`] and the caller falls back to speculation. A
//! wrong decision surfaces later as a parse error from the chosen branch.
//!
//! Scans walk an index over the stream the same way the rules walk the
//! stream itself, one helper per shape (`skip_type`, `skip_annotation`, ...).

use super::lexer::Token;
use super::stream::TokenStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<T> {
    Decided(T),
    Undecidable,
}

/// What a construct opening with `(` turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenAlternative {
    Lambda,
    Cast,
    /// `(Type) operand` that may also be a parenthesized name
    CastOrParenthesized,
    Parenthesized,
}

/// Shape of a `for` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForControlAlternative {
    EmptyInit,
    Enhanced,
    BasicWithDeclaration,
    BasicWithExpressions,
}

/// The scan reached the lookahead limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exhausted;

type Scan = Result<bool, Exhausted>;

/// Bounded view of the tokens ahead of the cursor
struct Window<'s> {
    stream: &'s TokenStream,
    limit: usize,
}

impl<'s> Window<'s> {
    fn new(stream: &'s TokenStream, limit: usize) -> Self {
        Self { stream, limit }
    }

    fn token(&self, i: usize) -> Result<Option<Token>, Exhausted> {
        if i >= self.limit {
            Err(Exhausted)
        } else {
            Ok(self.stream.peek_token(i))
        }
    }

    fn is(&self, i: usize, token: Token) -> Scan {
        Ok(self.token(i)? == Some(token))
    }
}

fn decide<T>(scan: Result<T, Exhausted>) -> Decision<T> {
    match scan {
        Ok(choice) => Decision::Decided(choice),
        Err(Exhausted) => Decision::Undecidable,
    }
}

/// `(` ... `)` with nesting, leaving `i` just past the matching `)`
fn skip_balanced(w: &Window<'_>, i: &mut usize) -> Scan {
    if !w.is(*i, Token::LParen)? {
        return Ok(false);
    }
    let mut depth = 0usize;
    loop {
        match w.token(*i)? {
            Some(Token::LParen) => depth += 1,
            Some(Token::RParen) => {
                depth -= 1;
                if depth == 0 {
                    *i += 1;
                    return Ok(true);
                }
            }
            Some(_) => {}
            None => return Ok(false),
        }
        *i += 1;
    }
}

/// `@Name(.Name)*` with an optional argument list; `@interface` is not one
fn skip_annotation(w: &Window<'_>, i: &mut usize) -> Scan {
    if !w.is(*i, Token::At)? || !w.is(*i + 1, Token::Identifier)? {
        return Ok(false);
    }
    *i += 2;
    while w.is(*i, Token::Dot)? && w.is(*i + 1, Token::Identifier)? {
        *i += 2;
    }
    if w.is(*i, Token::LParen)? {
        return skip_balanced(w, i);
    }
    Ok(true)
}

/// Annotations and keyword modifiers, in any order
fn skip_modifiers(w: &Window<'_>, i: &mut usize) -> Scan {
    loop {
        match w.token(*i)? {
            Some(Token::At) => {
                if !skip_annotation(w, i)? {
                    return Ok(false);
                }
            }
            // `synchronized (` opens a statement
            Some(Token::Synchronized) if w.is(*i + 1, Token::LParen)? => return Ok(true),
            Some(token) if token.is_modifier() => *i += 1,
            _ => return Ok(true),
        }
    }
}

fn allowed_in_type_arguments(token: Token) -> bool {
    token.is_primitive_type()
        || matches!(
            token,
            Token::Identifier
                | Token::Dot
                | Token::Comma
                | Token::Question
                | Token::Extends
                | Token::Super
                | Token::LBracket
                | Token::RBracket
                | Token::At
                | Token::Amp
        )
}

/// `<` ... `>` with nesting, over tokens that can appear in type arguments
fn skip_type_arguments(w: &Window<'_>, i: &mut usize) -> Scan {
    if !w.is(*i, Token::Lt)? {
        return Ok(false);
    }
    let mut depth = 0usize;
    loop {
        match w.token(*i)? {
            Some(Token::Lt) => depth += 1,
            Some(Token::Gt) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    *i += 1;
                    return Ok(true);
                }
            }
            Some(token) if allowed_in_type_arguments(token) => {}
            _ => return Ok(false),
        }
        *i += 1;
    }
}

/// Annotations, a primitive or dotted class type with type arguments, then `[]` pairs
fn skip_type(w: &Window<'_>, i: &mut usize) -> Scan {
    while w.is(*i, Token::At)? {
        if !skip_annotation(w, i)? {
            return Ok(false);
        }
    }
    match w.token(*i)? {
        Some(token) if token.is_primitive_type() => *i += 1,
        Some(Token::Identifier) => {
            *i += 1;
            if w.is(*i, Token::Lt)? && !skip_type_arguments(w, i)? {
                return Ok(false);
            }
            while w.is(*i, Token::Dot)? && w.is(*i + 1, Token::Identifier)? {
                *i += 2;
                if w.is(*i, Token::Lt)? && !skip_type_arguments(w, i)? {
                    return Ok(false);
                }
            }
        }
        _ => return Ok(false),
    }
    while w.is(*i, Token::LBracket)? && w.is(*i + 1, Token::RBracket)? {
        *i += 2;
    }
    Ok(true)
}

/// Tokens that can begin the operand of a reference-type cast
fn starts_cast_operand(token: Option<Token>) -> bool {
    match token {
        Some(token) => {
            token.is_literal()
                || matches!(
                    token,
                    Token::Identifier
                        | Token::This
                        | Token::Super
                        | Token::New
                        | Token::LParen
                        | Token::Bang
                        | Token::Tilde
                )
        }
        None => false,
    }
}

/// Decide what the `(` under the cursor opens.
///
/// - `()` or a balanced group followed by `->` is a lambda.
/// - A leading annotation, or a primitive type alone in the parentheses, is a cast.
/// - A type followed by `)` and something that can start an operand may be
///   either a cast or a parenthesized name; speculation settles it.
/// - Any other group followed by an operand cannot be parenthesized (two
///   primaries never sit side by side), so it is committed to a cast and
///   fails there.
pub fn classify_paren(stream: &TokenStream, max_lookahead: usize) -> Decision<ParenAlternative> {
    let w = Window::new(stream, max_lookahead);
    let decision = decide(scan_paren(&w));
    log::trace!("paren gate at {}: {:?}", stream.location(), decision);
    decision
}

fn scan_paren(w: &Window<'_>) -> Result<ParenAlternative, Exhausted> {
    if w.is(1, Token::RParen)? {
        return Ok(ParenAlternative::Lambda);
    }

    let mut close = 0;
    let closed = skip_balanced(w, &mut close)?;
    if closed && w.is(close, Token::Arrow)? {
        return Ok(ParenAlternative::Lambda);
    }

    if w.is(1, Token::At)? {
        return Ok(ParenAlternative::Cast);
    }
    if w.token(1)?.is_some_and(|t| t.is_primitive_type()) && w.is(2, Token::RParen)? {
        return Ok(ParenAlternative::Cast);
    }

    let mut i = 1;
    if skip_type(w, &mut i)? && w.is(i, Token::RParen)? {
        return Ok(if starts_cast_operand(w.token(i + 1)?) {
            ParenAlternative::CastOrParenthesized
        } else {
            ParenAlternative::Parenthesized
        });
    }

    if closed && starts_cast_operand(w.token(close)?) {
        return Ok(ParenAlternative::Cast);
    }
    Ok(ParenAlternative::Parenthesized)
}

/// Whether the lambda parameter list under the cursor holds bare names
pub fn lambda_parameters_are_bare(stream: &TokenStream) -> bool {
    match stream.peek_token(1) {
        Some(Token::RParen) => true,
        Some(Token::Identifier) => matches!(stream.peek_token(2), Some(Token::Comma) | Some(Token::RParen)),
        _ => false,
    }
}

/// Decide the shape of a `for` header, the cursor just past `(`
pub fn classify_for_control(stream: &TokenStream, max_lookahead: usize) -> Decision<ForControlAlternative> {
    let w = Window::new(stream, max_lookahead);
    let decision = decide(scan_for_control(&w));
    log::trace!("for-control gate at {}: {:?}", stream.location(), decision);
    decision
}

fn scan_for_control(w: &Window<'_>) -> Result<ForControlAlternative, Exhausted> {
    if w.is(0, Token::Semicolon)? {
        return Ok(ForControlAlternative::EmptyInit);
    }

    let mut i = 0;
    if !skip_modifiers(w, &mut i)? {
        // A malformed annotation can only begin a declaration
        return Ok(ForControlAlternative::BasicWithDeclaration);
    }
    let has_modifiers = i > 0;

    if skip_type(w, &mut i)? && w.is(i, Token::Identifier)? {
        i += 1;
        while w.is(i, Token::LBracket)? && w.is(i + 1, Token::RBracket)? {
            i += 2;
        }
        match w.token(i)? {
            Some(Token::Colon) => return Ok(ForControlAlternative::Enhanced),
            Some(Token::Assign) | Some(Token::Comma) | Some(Token::Semicolon) => {
                return Ok(ForControlAlternative::BasicWithDeclaration)
            }
            _ => {}
        }
    }

    Ok(if has_modifiers {
        ForControlAlternative::BasicWithDeclaration
    } else {
        ForControlAlternative::BasicWithExpressions
    })
}

/// Whether the statement under the cursor declares local variables
pub fn starts_local_variable_declaration(stream: &TokenStream, max_lookahead: usize) -> Decision<bool> {
    let w = Window::new(stream, max_lookahead);
    let decision = decide(scan_local_variable_declaration(&w));
    log::trace!("declaration gate at {}: {:?}", stream.location(), decision);
    decision
}

fn scan_local_variable_declaration(w: &Window<'_>) -> Scan {
    let mut i = 0;
    if !skip_modifiers(w, &mut i)? {
        return Ok(true);
    }
    if i > 0 {
        return Ok(true);
    }
    Ok(skip_type(w, &mut i)? && w.is(i, Token::Identifier)?)
}
