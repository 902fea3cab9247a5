use logos::Logos;
use std::ops::Range;

/// Kinds of lexemes in a math expression.
///
/// Any character that starts no other token is lexed as a [`TokenKind::Symbol`], so lexing never
/// fails; the parser rejects symbols where they do not belong.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    /// Spaces, tabs and line breaks. Skipped by the parser, but kept so that spans stay exact.
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    /// `+`
    #[token("+")]
    Add,

    /// `-`, both binary subtraction and unary negation.
    #[token("-")]
    Sub,

    /// `*`
    #[token("*")]
    Mul,

    /// `/`
    #[token("/")]
    Div,

    /// `^`
    #[token("^")]
    Exp,

    /// Separates the arguments of a call.
    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A variable or function name: a letter followed by letters and digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,

    /// Digits with no decimal point.
    #[regex(r"[0-9]+")]
    Int,

    /// Digits with a decimal point; the fractional digits may be omitted, as in `2.`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,

    /// Any other single character.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Whether the parser skips tokens of this kind.
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }
}

/// A lexeme of the input, along with its kind and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// Byte range of the lexeme in the input.
    pub span: Range<usize>,

    pub kind: TokenKind,

    /// The text of the lexeme, borrowed from the input.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Whether the parser skips this token.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
