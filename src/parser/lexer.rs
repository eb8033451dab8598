use logos::Logos;

use super::error::{ParseError, ParseResult};
use super::span::{Location, Span};

/// Token types for Java source
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    // Keywords
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("native")]
    Native,
    #[token("synchronized")]
    Synchronized,
    #[token("transient")]
    Transient,
    #[token("volatile")]
    Volatile,
    #[token("strictfp")]
    Strictfp,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("new")]
    New,
    #[token("this")]
    This,
    #[token("super")]
    Super,
    #[token("instanceof")]
    InstanceOf,
    #[token("void")]
    Void,
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("float")]
    Float,
    #[token("double")]
    Double,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("assert")]
    Assert,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("throw")]
    Throw,
    #[token("throws")]
    Throws,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Operators
    #[token("=")]
    Assign,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,
    #[token("%=")]
    ModAssign,
    #[token("&=")]
    AndAssign,
    #[token("|=")]
    OrAssign,
    #[token("^=")]
    XorAssign,
    #[token("<<=")]
    LShiftAssign,
    #[token(">>=")]
    RShiftAssign,
    #[token(">>>=")]
    URShiftAssign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    LShift,
    // `>>` and `>>>` are recombined by the expression parser so that
    // nested type arguments can close one `>` at a time.
    #[token("&&")]
    AndAnd,
    #[token("||")]
    PipePipe,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,

    // Literals
    #[regex(r#""([^"\\]|\\u[0-9a-fA-F]{4}|\\.)*""#)]
    StringLiteral,
    // Support standard escapes and Unicode escapes in character literals
    #[regex(r"'([^'\\]|\\u[0-9a-fA-F]{4}|\\.)'")]
    CharLiteral,
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    HexInteger,
    #[regex(r"0[bB][01_]+[lL]?")]
    BinaryInteger,
    #[regex(r"0[0-7][0-7_]*[lL]?")]
    OctalInteger,
    #[regex(r"(0|[1-9][0-9_]*)[lL]?")]
    DecimalInteger,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatingPoint,

    // Identifiers
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Identifier,

    // Comments and whitespace
    #[regex(r"//[^\n]*")]
    LineComment,
    // Block/Javadoc comment (handles /**...*/, /*...*/, and multiple '*')
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 2)]
    BlockComment,
    #[regex(r"[ \t\n\r\f]+", priority = 2)]
    Whitespace,

    // Unicode BOM (Byte Order Mark) - treat as ignorable whitespace
    #[token("\u{FEFF}")]
    Bom,
}

impl Token {
    /// Check if this token is a keyword modifier
    pub fn is_modifier(&self) -> bool {
        matches!(self,
            Token::Public | Token::Protected | Token::Private |
            Token::Abstract | Token::Final | Token::Native |
            Token::Synchronized | Token::Transient | Token::Volatile |
            Token::Static | Token::Strictfp | Token::Default
        )
    }

    /// Check if this token is a primitive type (`void` included)
    pub fn is_primitive_type(&self) -> bool {
        matches!(self,
            Token::Boolean | Token::Byte | Token::Short |
            Token::Int | Token::Long | Token::Char |
            Token::Float | Token::Double | Token::Void
        )
    }

    /// Check if this token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self,
            Token::StringLiteral | Token::CharLiteral |
            Token::HexInteger | Token::BinaryInteger |
            Token::OctalInteger | Token::DecimalInteger |
            Token::FloatingPoint |
            Token::True | Token::False | Token::Null
        )
    }

    /// Tokens the parser never sees
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Bom | Token::LineComment | Token::BlockComment)
    }

    /// Human readable description used in "expected ..." messages
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Package => "'package'",
            Token::Import => "'import'",
            Token::Static => "'static'",
            Token::Public => "'public'",
            Token::Protected => "'protected'",
            Token::Private => "'private'",
            Token::Abstract => "'abstract'",
            Token::Final => "'final'",
            Token::Native => "'native'",
            Token::Synchronized => "'synchronized'",
            Token::Transient => "'transient'",
            Token::Volatile => "'volatile'",
            Token::Strictfp => "'strictfp'",
            Token::Class => "'class'",
            Token::Interface => "'interface'",
            Token::Enum => "'enum'",
            Token::Extends => "'extends'",
            Token::Implements => "'implements'",
            Token::New => "'new'",
            Token::This => "'this'",
            Token::Super => "'super'",
            Token::InstanceOf => "'instanceof'",
            Token::Void => "'void'",
            Token::Boolean => "'boolean'",
            Token::Byte => "'byte'",
            Token::Short => "'short'",
            Token::Int => "'int'",
            Token::Long => "'long'",
            Token::Char => "'char'",
            Token::Float => "'float'",
            Token::Double => "'double'",
            Token::If => "'if'",
            Token::Else => "'else'",
            Token::For => "'for'",
            Token::While => "'while'",
            Token::Do => "'do'",
            Token::Switch => "'switch'",
            Token::Case => "'case'",
            Token::Default => "'default'",
            Token::Assert => "'assert'",
            Token::Break => "'break'",
            Token::Continue => "'continue'",
            Token::Return => "'return'",
            Token::Throw => "'throw'",
            Token::Throws => "'throws'",
            Token::Try => "'try'",
            Token::Catch => "'catch'",
            Token::Finally => "'finally'",
            Token::True => "'true'",
            Token::False => "'false'",
            Token::Null => "'null'",
            Token::Assign => "'='",
            Token::AddAssign => "'+='",
            Token::SubAssign => "'-='",
            Token::MulAssign => "'*='",
            Token::DivAssign => "'/='",
            Token::ModAssign => "'%='",
            Token::AndAssign => "'&='",
            Token::OrAssign => "'|='",
            Token::XorAssign => "'^='",
            Token::LShiftAssign => "'<<='",
            Token::RShiftAssign => "'>>='",
            Token::URShiftAssign => "'>>>='",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::Inc => "'++'",
            Token::Dec => "'--'",
            Token::Bang => "'!'",
            Token::Tilde => "'~'",
            Token::Amp => "'&'",
            Token::Pipe => "'|'",
            Token::Caret => "'^'",
            Token::LShift => "'<<'",
            Token::AndAnd => "'&&'",
            Token::PipePipe => "'||'",
            Token::Eq => "'=='",
            Token::Ne => "'!='",
            Token::Lt => "'<'",
            Token::Le => "'<='",
            Token::Gt => "'>'",
            Token::Ge => "'>='",
            Token::Question => "'?'",
            Token::Colon => "':'",
            Token::DoubleColon => "'::'",
            Token::Arrow => "'->'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::LBracket => "'['",
            Token::RBracket => "']'",
            Token::LBrace => "'{'",
            Token::RBrace => "'}'",
            Token::Semicolon => "';'",
            Token::Comma => "','",
            Token::Dot => "'.'",
            Token::At => "'@'",
            Token::Ellipsis => "'...'",
            Token::StringLiteral => "string literal",
            Token::CharLiteral => "character literal",
            Token::HexInteger
            | Token::BinaryInteger
            | Token::OctalInteger
            | Token::DecimalInteger => "integer literal",
            Token::FloatingPoint => "floating point literal",
            Token::Identifier => "identifier",
            Token::LineComment | Token::BlockComment => "comment",
            Token::Whitespace | Token::Bom => "whitespace",
        }
    }
}

/// Lexical token with location information
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub location: Location,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, location: Location) -> Self {
        Self { token, lexeme, location }
    }

    /// Get the token type
    pub fn token_type(&self) -> Token {
        self.token
    }

    /// Get the lexeme (actual text)
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Get the location
    pub fn location(&self) -> Location {
        self.location
    }

    /// Byte offset just past the lexeme
    pub fn end_offset(&self) -> usize {
        self.location.offset + self.lexeme.len()
    }

    /// Source range covered by the lexeme
    pub fn span(&self) -> Span {
        let mut end = self.location;
        end.advance_str(&self.lexeme);
        self.location.to(end)
    }

    /// Check if this token matches the given token type
    pub fn is(&self, token_type: &Token) -> bool {
        self.token == *token_type
    }

    /// Quoted lexeme, as shown in "found ..." messages
    pub fn describe(&self) -> String {
        format!("'{}'", self.lexeme)
    }
}

/// Lexer for Java source
pub struct Lexer<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
    location: Location,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
            location: Location::start(),
        }
    }

    /// Get the next token, trivia included
    pub fn next_token(&mut self) -> Option<ParseResult<LexicalToken>> {
        let token = self.lexer.next()?;
        let span = self.lexer.span();
        self.advance_to(span.start);
        let location = self.location;

        match token {
            Ok(token) => {
                let lexeme = self.lexer.slice().to_string();
                self.advance_to(span.end);
                Some(Ok(LexicalToken::new(token, lexeme, location)))
            }
            Err(()) => {
                let found = self.source[span.start..]
                    .chars()
                    .next()
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                Some(Err(ParseError::Lexical {
                    message: format!("unrecognized input '{}'", found),
                    location,
                }))
            }
        }
    }

    /// Location just past the last character consumed so far
    pub fn location(&self) -> Location {
        self.location
    }

    fn advance_to(&mut self, offset: usize) {
        if offset > self.location.offset {
            let skipped = &self.source[self.location.offset..offset];
            self.location.advance_str(skipped);
        }
    }

    /// Get all significant tokens from the source
    pub fn tokenize(self) -> ParseResult<Vec<LexicalToken>> {
        self.tokenize_with_end().map(|(tokens, _)| tokens)
    }

    /// Like [`Lexer::tokenize`], also returning the end-of-input location
    pub fn tokenize_with_end(mut self) -> ParseResult<(Vec<LexicalToken>, Location)> {
        let mut tokens = Vec::new();

        while let Some(result) = self.next_token() {
            let token = result?;
            if !token.token.is_trivia() {
                tokens.push(token);
            }
        }

        let end = Location::end_of(self.source);
        log::trace!("lexed {} tokens, input ends at {}", tokens.len(), end);
        Ok((tokens, end))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = ParseResult<LexicalToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
