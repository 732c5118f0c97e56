//! Token types for interface text.
//!
//! Keywords are not distinguished from identifiers at this level; the parser
//! decides contextually whether `class` or `open` is a keyword.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
    /// True if a line break (or a comment spanning one) precedes this token.
    pub leading_newline: bool,
    /// True if any whitespace or comment precedes this token.
    pub leading_space: bool,
}

impl Token {
    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this is the identifier `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Identifier(name) if name == word)
    }

    /// Returns true if this is the operator `op`.
    #[must_use]
    pub fn is_operator(&self, op: &str) -> bool {
        matches!(&self.kind, TokenKind::Operator(text) if text == op)
    }

    /// Returns the identifier text, if this is an identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this token directly follows the previous one.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        !self.leading_space
    }
}

/// Token types.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `<`
    LAngle,
    /// `>`
    RAngle,

    // Punctuation
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `@`
    At,
    /// `#`
    Hash,
    /// `->`
    Arrow,

    // Atoms
    /// Identifier or keyword, backticks included when present.
    Identifier(String),
    /// Numeric literal.
    Number,
    /// String literal of any flavour.
    StringLiteral,
    /// A run of operator characters, e.g. `=`, `==`, `?`, `...`.
    Operator(String),

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LAngle => "'<'",
            Self::RAngle => "'>'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::At => "'@'",
            Self::Hash => "'#'",
            Self::Arrow => "'->'",
            Self::Identifier(_) => "identifier",
            Self::Number => "number",
            Self::StringLiteral => "string",
            Self::Operator(_) => "operator",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }

    /// Returns true for `(`, `[` and `{`.
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(self, Self::LParen | Self::LBracket | Self::LBrace)
    }

    /// Returns true for `)`, `]` and `}`.
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket | Self::RBrace)
    }
}
