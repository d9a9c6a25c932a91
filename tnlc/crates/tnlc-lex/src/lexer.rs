//! The TNL lexer.
//!
//! Dispatch-on-first-character scanner: the main loop looks at the current
//! character and either emits a punctuation token directly or hands off to a
//! `lex_*` helper for multi-character lexemes. The token vector being built
//! doubles as lexer state: the slash disambiguation heuristic consults the
//! kind of the most recently emitted token.

use tnlc_util::{Span, SyntaxError};

use crate::cursor::Cursor;
use crate::{Token, TokenKind};

/// Streaming lexer over one source file.
///
/// # Example
///
/// ```
/// use tnlc_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("transform T {\n}\n", "example.tnl").lex().unwrap();
/// assert_eq!(tokens.first().unwrap().kind, TokenKind::Name);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    file: String,
    tokens: Vec<Token>,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer for `source`, reporting errors against `file`.
    pub fn new(source: &'src str, file: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            file: file.to_string(),
            tokens: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Consumes the source and returns the full token stream, `EOF` included.
    ///
    /// Fatal conditions are unexpected end of input inside a string, pattern,
    /// or comment. An unrecognized character is not fatal here: it becomes an
    /// `INVALID` token and the parser reports it with a location.
    pub fn lex(mut self) -> Result<Vec<Token>, SyntaxError> {
        while !self.cursor.is_at_end() {
            self.mark_token_start();
            match self.cursor.current_char() {
                ' ' | '\t' => self.cursor.advance(),
                '\n' => {
                    self.push_simple(TokenKind::Newline, None);
                }
                '{' => self.push_simple(TokenKind::LBracket, Some("{")),
                '}' => self.push_simple(TokenKind::RBracket, Some("}")),
                '[' => self.push_simple(TokenKind::LBrace, Some("[")),
                ']' => self.push_simple(TokenKind::RBrace, Some("]")),
                '(' => self.push_simple(TokenKind::LParen, Some("(")),
                ')' => self.push_simple(TokenKind::RParen, Some(")")),
                '|' => self.push_simple(TokenKind::Pipe, Some("|")),
                '*' => self.push_simple(TokenKind::Mult, Some("*")),
                '+' => self.push_simple(TokenKind::Add, Some("+")),
                '%' => self.push_simple(TokenKind::Mod, Some("%")),
                '!' => self.push_simple(TokenKind::Not, Some("!")),
                '=' => self.lex_eq(),
                '-' => self.lex_arrow_or_sub(),
                '/' => self.lex_pattern_or_div()?,
                '\'' => self.lex_string()?,
                '#' => self.lex_comment()?,
                c if c == '_' || c.is_alphabetic() => self.lex_name(),
                c if c.is_ascii_digit() => self.lex_number(),
                _ => {
                    self.cursor.advance();
                    self.push_token(TokenKind::Invalid, None);
                }
            }
        }

        self.mark_token_start();
        self.push_token(TokenKind::Eof, None);
        Ok(self.tokens)
    }

    /// Records where the token about to be lexed begins.
    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// The span from the recorded token start to the current position.
    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: Option<String>) {
        let span = self.token_span();
        self.tokens.push(Token::new(kind, lexeme, span));
    }

    /// Consumes one character and emits a fixed-spelling token.
    fn push_simple(&mut self, kind: TokenKind, lexeme: Option<&str>) {
        self.cursor.advance();
        self.push_token(kind, lexeme.map(str::to_string));
    }

    /// The kind of the most recently emitted token, if any.
    fn prev_token_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    fn eof_error(&self) -> SyntaxError {
        SyntaxError::at(
            "Unexpected end of file",
            &self.file,
            Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column()),
        )
    }

    /// `=` or `==`.
    fn lex_eq(&mut self) {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.push_token(TokenKind::Deq, Some("==".to_string()));
        } else {
            self.push_token(TokenKind::Eq, Some("=".to_string()));
        }
    }

    /// `->` or `-`.
    fn lex_arrow_or_sub(&mut self) {
        self.cursor.advance();
        if self.cursor.match_char('>') {
            self.push_token(TokenKind::Arrow, Some("->".to_string()));
        } else {
            self.push_token(TokenKind::Sub, Some("-".to_string()));
        }
    }

    /// `[A-Za-z_][A-Za-z_0-9]*`. Keywords are not distinguished here; the
    /// parser matches on the lexeme.
    fn lex_name(&mut self) {
        loop {
            let c = self.cursor.current_char();
            if c == '_' || c.is_alphanumeric() {
                self.cursor.advance();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(self.token_start).to_string();
        self.push_token(TokenKind::Name, Some(text));
    }

    /// `[0-9]+`, kept as text; the parser converts.
    fn lex_number(&mut self) {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start).to_string();
        self.push_token(TokenKind::Number, Some(text));
    }

    /// Single-quoted string. A backslash is dropped and the character after
    /// it is taken literally, so `\'` embeds a quote and the backslash never
    /// reaches the string data.
    fn lex_string(&mut self) -> Result<(), SyntaxError> {
        self.cursor.advance(); // opening quote
        let mut value = String::new();
        let mut escaping = false;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.eof_error());
            }
            let c = self.cursor.current_char();
            if c == '\'' && !escaping {
                break;
            }
            if c == '\\' {
                escaping = true;
            } else {
                value.push(c);
                escaping = false;
            }
            self.cursor.advance();
        }
        self.cursor.advance(); // closing quote
        self.push_token(TokenKind::String, Some(value));
        Ok(())
    }

    /// Slash-delimited regex literal. Unlike strings, the backslash is kept
    /// in the pattern content so `\s` survives to the regex engine; the
    /// character after a backslash never terminates the literal.
    fn lex_pattern(&mut self) -> Result<(), SyntaxError> {
        self.cursor.advance(); // opening slash
        let mut value = String::new();
        let mut escaping = false;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.eof_error());
            }
            let c = self.cursor.current_char();
            if c == '/' && !escaping {
                break;
            }
            escaping = c == '\\';
            value.push(c);
            self.cursor.advance();
        }
        self.cursor.advance(); // closing slash
        self.push_token(TokenKind::Pattern, Some(value));
        Ok(())
    }

    /// Heuristic for differentiating DIV from PATTERN.
    ///
    /// `/` is division iff the previous emitted token could end a divisible
    /// operand (NUMBER, `]`, STRING, NAME) and the next non-space character
    /// exists and is alphanumeric or `[`. Anything else opens a pattern.
    fn lex_pattern_or_div(&mut self) -> Result<(), SyntaxError> {
        let before_could_be_div = matches!(
            self.prev_token_kind(),
            Some(TokenKind::Number)
                | Some(TokenKind::RBrace)
                | Some(TokenKind::String)
                | Some(TokenKind::Name)
        );
        let after_could_be_div = self
            .cursor
            .remaining()
            .chars()
            .skip(1)
            .find(|&c| c != ' ')
            .is_some_and(|c| c.is_alphanumeric() || c == '[');

        if before_could_be_div && after_could_be_div {
            self.push_simple(TokenKind::Div, Some("/"));
            Ok(())
        } else {
            self.lex_pattern()
        }
    }

    /// `#` comment: runs to end of line and consumes the newline too, so a
    /// comment line contributes no NEWLINE token. A comment must be closed
    /// by a newline; end of input inside one is an error.
    fn lex_comment(&mut self) -> Result<(), SyntaxError> {
        while self.cursor.current_char() != '\n' {
            if self.cursor.is_at_end() {
                return Err(self.eof_error());
            }
            self.cursor.advance();
        }
        self.cursor.advance(); // the newline
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<Token> {
        Lexer::new(src, "test").lex().expect("lexing should succeed")
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{ } [ ] ( ) | * + % ! = == - ->"),
            vec![
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Pipe,
                TokenKind::Mult,
                TokenKind::Add,
                TokenKind::Mod,
                TokenKind::Not,
                TokenKind::Eq,
                TokenKind::Deq,
                TokenKind::Sub,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_name_and_number() {
        let tokens = lex("headers x_1 42");
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].lexeme.as_deref(), Some("headers"));
        assert_eq!(tokens[1].lexeme.as_deref(), Some("x_1"));
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].lexeme.as_deref(), Some("42"));
    }

    #[test]
    fn test_string_literal() {
        let tokens = lex("'hello world'");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_string_escape_drops_backslash() {
        let tokens = lex(r"'it\'s'");
        assert_eq!(tokens[0].lexeme.as_deref(), Some("it's"));
    }

    #[test]
    fn test_pattern_keeps_backslash() {
        let tokens = lex(r"/(\s+.*)|(.*\s+)/");
        assert_eq!(tokens[0].kind, TokenKind::Pattern);
        assert_eq!(tokens[0].lexeme.as_deref(), Some(r"(\s+.*)|(.*\s+)"));
    }

    #[test]
    fn test_pattern_escaped_slash_does_not_terminate() {
        let tokens = lex(r"/a\/b/");
        assert_eq!(tokens[0].kind, TokenKind::Pattern);
        assert_eq!(tokens[0].lexeme.as_deref(), Some(r"a\/b"));
    }

    #[test]
    fn test_slash_after_name_before_name_is_div() {
        assert_eq!(
            kinds("a/b"),
            vec![TokenKind::Name, TokenKind::Div, TokenKind::Name, TokenKind::Eof]
        );
    }

    #[test]
    fn test_slash_at_rule_start_is_pattern() {
        // `/b|d/ -> upper`: nothing divisible precedes the slash.
        let tokens = lex("/b|d/ -> upper");
        assert_eq!(tokens[0].kind, TokenKind::Pattern);
        assert_eq!(tokens[0].lexeme.as_deref(), Some("b|d"));
    }

    #[test]
    fn test_slash_inside_selector_is_pattern() {
        // Previous token is `[`, which cannot end an operand.
        let tokens = lex("[/upp*./]");
        assert_eq!(tokens[1].kind, TokenKind::Pattern);
        assert_eq!(tokens[1].lexeme.as_deref(), Some("upp*."));
    }

    #[test]
    fn test_slash_with_nothing_after_is_pattern_error() {
        // `1/` wants to be division but has no operand after; the slash
        // opens a pattern that runs into end of input.
        let result = Lexer::new("1/", "test").lex();
        assert!(result.is_err());
    }

    #[test]
    fn test_slash_before_bracket_is_div() {
        assert_eq!(
            kinds("1 / [2]"),
            vec![
                TokenKind::Number,
                TokenKind::Div,
                TokenKind::LBrace,
                TokenKind::Number,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_newline_token() {
        assert_eq!(
            kinds("a\n\nb"),
            vec![
                TokenKind::Name,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Name,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comment_swallows_its_newline() {
        assert_eq!(
            kinds("a # trailing words\nb\n"),
            vec![
                TokenKind::Name,
                TokenKind::Name,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comment_at_eof_is_fatal() {
        assert!(Lexer::new("# no newline", "test").lex().is_err());
    }

    #[test]
    fn test_unterminated_string_is_fatal() {
        let err = Lexer::new("'open", "test").lex().unwrap_err();
        assert!(err.message.contains("Unexpected end of file"));
    }

    #[test]
    fn test_unrecognized_char_is_invalid_token() {
        let tokens = lex("a ; b");
        assert_eq!(tokens[1].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].lexeme, None);
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = lex("a -> b\nc");
        assert_eq!(tokens[0].loc(), (1, 1)); // a
        assert_eq!(tokens[1].loc(), (1, 3)); // ->
        assert_eq!(tokens[2].loc(), (1, 6)); // b
        assert_eq!(tokens[3].loc(), (1, 7)); // newline
        assert_eq!(tokens[4].loc(), (2, 1)); // c
    }

    #[test]
    fn test_true_false_are_names() {
        let tokens = lex("True False");
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[0].lexeme.as_deref(), Some("True"));
        assert_eq!(tokens[1].kind, TokenKind::Name);
    }

    #[test]
    fn test_full_rule_line() {
        let tokens = lex("'a' -> 'AA' | replace 'A' 'D'\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::String,
                TokenKind::Arrow,
                TokenKind::String,
                TokenKind::Pipe,
                TokenKind::Name,
                TokenKind::String,
                TokenKind::String,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }
}
