use jcst::parser::lexer::Token;
use jcst::parser::{Lexer, Location, TokenStream};

#[test]
fn lexer_keywords() {
    let source = "final int x instanceof Object default synchronized";
    let lexer = Lexer::new(source);
    let tokens = lexer.tokenize().expect("Failed to tokenize");

    assert_eq!(tokens.len(), 7);
    assert!(tokens[0].is(&Token::Final));
    assert!(tokens[1].is(&Token::Int));
    assert!(tokens[2].is(&Token::Identifier));
    assert!(tokens[3].is(&Token::InstanceOf));
    assert!(tokens[4].is(&Token::Identifier));
    assert!(tokens[5].is(&Token::Default));
    assert!(tokens[6].is(&Token::Synchronized));
    assert!(tokens[5].token_type().is_modifier());
}

#[test]
fn lexer_operators() {
    let source = "+ - * / % = += -= *= /= %= -> :: ... ++ -- >>>= <<= >=";
    let lexer = Lexer::new(source);
    let tokens = lexer.tokenize().expect("Failed to tokenize");

    let expected = [
        Token::Plus,
        Token::Minus,
        Token::Star,
        Token::Slash,
        Token::Percent,
        Token::Assign,
        Token::AddAssign,
        Token::SubAssign,
        Token::MulAssign,
        Token::DivAssign,
        Token::ModAssign,
        Token::Arrow,
        Token::DoubleColon,
        Token::Ellipsis,
        Token::Inc,
        Token::Dec,
        Token::URShiftAssign,
        Token::LShiftAssign,
        Token::Ge,
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, kind) in tokens.iter().zip(expected) {
        assert!(token.is(&kind), "{:?} is not {:?}", token, kind);
    }
}

#[test]
fn lexer_closing_angles_stay_single() {
    let tokens = Lexer::new("a >>> b").tokenize().expect("Failed to tokenize");
    let angles: Vec<usize> = tokens
        .iter()
        .filter(|t| t.is(&Token::Gt))
        .map(|t| t.location().offset)
        .collect();
    assert_eq!(angles, vec![2, 3, 4]);
}

#[test]
fn lexer_comments_are_skipped() {
    let source = "// This is a comment\n/* This is a block comment */";
    let lexer = Lexer::new(source);
    let tokens = lexer.tokenize().expect("Failed to tokenize");

    assert_eq!(tokens.len(), 0);
}

#[test]
fn lexer_keeps_literal_text() {
    let tokens = Lexer::new(r#""a \"quoted\" word" '\n' 1_000L 0x7fff_ffff"#)
        .tokenize()
        .expect("Failed to tokenize");
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme()).collect();
    assert_eq!(lexemes, vec![r#""a \"quoted\" word""#, r"'\n'", "1_000L", "0x7fff_ffff"]);
}

#[test]
fn lexer_bom_is_skipped() {
    let tokens = Lexer::new("\u{feff}int").tokenize().expect("Failed to tokenize");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(&Token::Int));
}

#[test]
fn token_stream_peek_mark_reset() {
    let mut stream = TokenStream::from_source("a . b").expect("Failed to tokenize");
    assert_eq!(stream.peek_token(2), Some(Token::Identifier));
    assert_eq!(stream.peek_token(3), None);

    let checkpoint = stream.mark();
    stream.consume().expect("token");
    stream.consume().expect("token");
    assert_eq!(stream.location(), Location::new(1, 5, 4));
    stream.reset(checkpoint);
    assert_eq!(stream.location(), Location::new(1, 1, 0));
    assert_eq!(stream.remaining(), 3);
}

#[test]
fn token_stream_end_location() {
    let mut stream = TokenStream::from_source("x\n").expect("Failed to tokenize");
    stream.consume().expect("token");
    assert!(stream.is_at_end());
    assert_eq!(stream.location(), Location::new(2, 1, 2));
    assert!(stream.consume().is_err());
}

#[test]
fn token_spans_cover_their_lexemes() {
    let source = "x >>>= 10L";
    let tokens = Lexer::new(source).tokenize().expect("Failed to tokenize");
    let span = tokens[2].span();
    assert_eq!(span.source_text(source), "10L");
    assert_eq!(span.to_string(), "1:8-11");
}

#[test]
fn lexer_accepts_unicode_identifiers() {
    let source = "größe = año + π_2";
    let tokens = Lexer::new(source).tokenize().expect("Failed to tokenize");
    let identifiers: Vec<&str> = tokens.iter().filter(|t| t.is(&Token::Identifier)).map(|t| t.lexeme()).collect();
    assert_eq!(identifiers, vec!["größe", "año", "π_2"]);
    assert_eq!(tokens[1].location().column, 7);
}
