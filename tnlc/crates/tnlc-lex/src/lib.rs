//! tnlc-lex - Lexical analyzer for TNL source text.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! The lexer turns a source string into a flat vector of [`Token`]s
//! terminated by `EOF`. Whitespace (space, tab) separates tokens and is
//! dropped; newlines are significant (they terminate rules) and are emitted
//! as `NEWLINE` tokens. `#` comments run to end of line and swallow the
//! newline that ends them.
//!
//! ============================================================================
//! THE SLASH PROBLEM
//! ============================================================================
//!
//! `/` is the one context-sensitive character in TNL: it either begins a
//! regex literal (`/b|d/`) or is the division operator (`a/b`). The lexer
//! decides with a two-sided peek, and that decision is part of the language:
//!
//! - the *previous emitted token* must be one that can end a divisible
//!   operand (`NUMBER`, `]`, `STRING`, `NAME`), and
//! - the *next non-space character* must exist and be alphanumeric or `[`.
//!
//! Only when both hold is `/` division; otherwise it opens a pattern. See
//! [`Lexer`] for the implementation.

pub mod cursor;
mod lexer;

pub use lexer::Lexer;

use std::fmt;

use tnlc_util::Span;

/// The closed set of TNL token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `->`
    Arrow,
    /// `{`
    LBracket,
    /// `}`
    RBracket,
    /// `[`
    LBrace,
    /// `]`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `==`
    Deq,
    /// `=`
    Eq,
    /// `|`
    Pipe,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `%`
    Mod,
    /// `!`
    Not,
    /// `\n`
    Newline,
    /// Identifier or keyword: `[A-Za-z_][A-Za-z_0-9]*`
    Name,
    /// Reserved for a dedicated `True` token; the lexer emits `True` as a
    /// `Name` and the parser promotes it to a boolean literal.
    True,
    /// Reserved, like [`TokenKind::True`].
    False,
    /// Single-quoted string literal.
    String,
    /// Decimal integer literal.
    Number,
    /// Slash-delimited regex literal.
    Pattern,
    /// An unrecognized character. Not fatal at lex time; the parser trips
    /// over it with a located error.
    Invalid,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// The kind's name as it appears in token dumps and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Arrow => "ARROW",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Deq => "DEQ",
            TokenKind::Eq => "EQ",
            TokenKind::Pipe => "PIPE",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Add => "ADD",
            TokenKind::Sub => "SUB",
            TokenKind::Mod => "MOD",
            TokenKind::Not => "NOT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Name => "NAME",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Pattern => "PATTERN",
            TokenKind::Invalid => "INVALID",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexical unit: kind, optional lexeme, and source location.
///
/// Structural tokens (`->`, `{`, `|`, ...) carry their spelling as the
/// lexeme; `NEWLINE`, `INVALID`, and `EOF` carry none. For `STRING` and
/// `PATTERN` the lexeme is the *content* (delimiters stripped, escapes
/// already applied per the literal's discipline).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Option<String>, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The `(line, column)` of the token's first character.
    pub fn loc(&self) -> (u32, u32) {
        self.span.loc()
    }
}

impl fmt::Display for Token {
    /// One line per token, as printed by `--print-tokens`:
    ///
    /// ```text
    /// NAME,      transform, (1, 1)
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = format!("{},", self.kind.name());
        let lexeme = format!("{},", self.lexeme.as_deref().unwrap_or("None"));
        write!(f, "{kind:<10} {lexeme:<10} {}", self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Arrow.name(), "ARROW");
        assert_eq!(TokenKind::String.name(), "STRING");
        assert_eq!(TokenKind::Eof.name(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(
            TokenKind::Name,
            Some("transform".to_string()),
            Span::new(0, 9, 1, 1),
        );
        assert_eq!(token.to_string(), "NAME,      transform, (1, 1)");
    }

    #[test]
    fn test_token_display_without_lexeme() {
        let token = Token::new(TokenKind::Newline, None, Span::point(3, 1, 4));
        assert_eq!(token.to_string(), "NEWLINE,   None,      (1, 4)");
    }
}
