//! Lexer for interface text.
//!
//! The lexer converts source text into a stream of tokens. Comments and
//! whitespace are dropped, but every token remembers whether a line break or
//! any spacing preceded it; declaration boundaries depend on that.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Characters that form operator runs. `<` and `>` are deliberately excluded
/// so that generic brackets always lex as single tokens.
const OPERATOR_CHARS: &[char] = &['/', '=', '-', '+', '!', '*', '%', '&', '|', '^', '~', '?', '.'];

/// Lexer for interface source.
pub struct Lexer<'src> {
    /// Full source text.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes all source. The last token is always [`TokenKind::Eof`].
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        let (leading_newline, leading_space) = self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.scan(c),
        };

        Token {
            kind,
            span: Span::new(start, self.position, start_line, start_column),
            leading_newline,
            leading_space: leading_space || start == 0,
        }
    }

    fn scan(&mut self, c: char) -> TokenKind {
        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '<' => self.single(TokenKind::LAngle),
            '>' => self.single(TokenKind::RAngle),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '@' => self.single(TokenKind::At),
            '#' => {
                if matches!(self.peek_char_n(1), Some('"' | '#')) {
                    self.scan_raw_string()
                } else {
                    self.single(TokenKind::Hash)
                }
            }
            '"' => self.scan_string(),
            '`' => self.scan_backticked(),
            '-' if self.peek_char_n(1) == Some('>') => {
                self.advance();
                self.advance();
                TokenKind::Arrow
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c if OPERATOR_CHARS.contains(&c) => self.scan_operator(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips whitespace and comments.
    ///
    /// Returns whether a line break was crossed and whether anything at all
    /// was skipped.
    fn skip_trivia(&mut self) -> (bool, bool) {
        let start = self.position;
        let mut newline = false;
        loop {
            match self.peek_char() {
                Some('\n') => {
                    newline = true;
                    self.advance();
                }
                Some(c) if c.is_whitespace() => self.advance(),
                Some('/') if self.peek_char_n(1) == Some('/') => {
                    while self.peek_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_char_n(1) == Some('*') => {
                    newline |= self.skip_block_comment();
                }
                _ => break,
            }
        }
        (newline, self.position != start)
    }

    /// Skips a possibly nested block comment.
    fn skip_block_comment(&mut self) -> bool {
        let mut newline = false;
        let mut depth = 0usize;
        while let Some(c) = self.peek_char() {
            if c == '/' && self.peek_char_n(1) == Some('*') {
                depth += 1;
                self.advance();
            } else if c == '*' && self.peek_char_n(1) == Some('/') {
                depth -= 1;
                self.advance();
                self.advance();
                if depth == 0 {
                    break;
                }
                continue;
            } else if c == '\n' {
                newline = true;
            }
            self.advance();
        }
        newline
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_identifier_continue) {
            self.advance();
        }
        TokenKind::Identifier(self.slice_from(start).to_string())
    }

    fn scan_backticked(&mut self) -> TokenKind {
        let start = self.position;
        self.advance();
        while let Some(c) = self.peek_char() {
            self.advance();
            if c == '`' {
                return TokenKind::Identifier(self.slice_from(start).to_string());
            }
            if c == '\n' {
                break;
            }
        }
        TokenKind::Error("unterminated backtick identifier".to_string())
    }

    fn scan_number(&mut self) -> TokenKind {
        while let Some(c) = self.peek_char() {
            let continues_fraction =
                c == '.' && self.peek_char_n(1).is_some_and(|next| next.is_ascii_digit());
            if c.is_ascii_alphanumeric() || c == '_' || continues_fraction {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Number
    }

    fn scan_operator(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            let starts_comment = c == '/' && matches!(self.peek_char_n(1), Some('/' | '*'));
            if OPERATOR_CHARS.contains(&c) && !starts_comment {
                self.advance();
            } else {
                break;
            }
        }
        if self.position == start {
            // A lone `/` that starts a comment never reaches here; keep progress anyway.
            self.advance();
        }
        TokenKind::Operator(self.slice_from(start).to_string())
    }

    fn scan_string(&mut self) -> TokenKind {
        if self.rest.starts_with("\"\"\"") {
            return self.scan_multiline_string();
        }
        self.advance();
        while let Some(c) = self.peek_char() {
            match c {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '"' => {
                    self.advance();
                    return TokenKind::StringLiteral;
                }
                '\n' => break,
                _ => self.advance(),
            }
        }
        TokenKind::Error("unterminated string".to_string())
    }

    fn scan_multiline_string(&mut self) -> TokenKind {
        for _ in 0..3 {
            self.advance();
        }
        while !self.rest.is_empty() {
            if self.rest.starts_with("\\") {
                self.advance();
                self.advance();
            } else if self.rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.advance();
                }
                return TokenKind::StringLiteral;
            } else {
                self.advance();
            }
        }
        TokenKind::Error("unterminated multi-line string".to_string())
    }

    /// Scans `#"..."#` style raw strings.
    fn scan_raw_string(&mut self) -> TokenKind {
        let mut hashes = 0usize;
        while self.peek_char() == Some('#') {
            hashes += 1;
            self.advance();
        }
        if self.peek_char() != Some('"') {
            return TokenKind::Error("expected raw string".to_string());
        }
        let terminator = format!("\"{}", "#".repeat(hashes));
        self.advance();
        while !self.rest.is_empty() {
            if self.rest.starts_with(&terminator) {
                for _ in 0..terminator.len() {
                    self.advance();
                }
                return TokenKind::StringLiteral;
            }
            self.advance();
        }
        TokenKind::Error("unterminated raw string".to_string())
    }

    fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
