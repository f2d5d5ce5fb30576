//! Lexer for path expressions.
//!
//! Produces span-based tokens; text is sliced from the source only when needed.
//! Consecutive unrecognized bytes (including whitespace) are coalesced into a
//! single `Garbage` token so the parser reports one error per bad run.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("//")]
    DoubleSlash,

    #[token("/")]
    Slash,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token(":")]
    Colon,

    /// Braced namespace URI, e.g. `{http://www.alfresco.org/model/content/1.0}`.
    #[regex(r"\{[^}]*\}")]
    Uri,

    /// Prefix or local name. Dots are allowed inside but never at the end,
    /// so a trailing `.` still lexes as a self step.
    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*(\.[A-Za-z0-9_\-]+)*")]
    Name,

    /// Coalesced run of unrecognized bytes.
    Garbage,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::DoubleSlash => "'//'",
            TokenKind::Slash => "'/'",
            TokenKind::Dot => "'.'",
            TokenKind::Star => "'*'",
            TokenKind::Colon => "':'",
            TokenKind::Uri => "namespace URI",
            TokenKind::Name => "name",
            TokenKind::Garbage => "unrecognized input",
        }
    }
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                let span = lexer.span();
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start, span.start));
                }
                tokens.push(Token::new(kind, span.start, span.end));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start, source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.start..token.end]
}
