//! Error types for the fatal and collected diagnostic tiers.
//!
//! Lex and parse failures are fatal: the pipeline stops and the driver prints
//! the error and exits nonzero. Semantic findings are not: the analyzer
//! returns all of them and the caller decides whether to keep going.

use std::fmt;

use crate::span::Span;

/// A fatal lexing or parsing error.
///
/// Carries the source file name and, when one is known, the location of the
/// offending lexeme. The display form mirrors what the CLI prints:
///
/// ```text
/// Syntax Error: Expected token ARROW, but found NEWLINE at (3, 12).
/// In file transforms/movies.tnl.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable description, including the offending lexeme when known.
    pub message: String,
    /// The source file being processed.
    pub file: String,
    /// Location of the error, when one is attributable.
    pub span: Option<Span>,
}

impl SyntaxError {
    /// Creates an error with no attributable location.
    pub fn new(message: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            span: None,
        }
    }

    /// Creates an error pointing at a specific location.
    pub fn at(message: impl Into<String>, file: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            span: Some(span),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Syntax Error: {}", self.message)?;
        match self.span {
            Some(span) => write!(f, "In file {} at {}.", self.file, span),
            None => write!(f, "In file {}.", self.file),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// A non-fatal finding from the semantic analyzer.
///
/// Stringifies as `"<message> at <pos>."` when a position is attached and
/// `"<message>."` otherwise.
///
/// # Examples
///
/// ```
/// use tnlc_util::SemanticError;
///
/// let err = SemanticError::new("Invalid regex pattern /*/");
/// assert_eq!(err.to_string(), "Invalid regex pattern /*/.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    /// What is wrong.
    pub message: String,
    /// Where, when the analyzer can say.
    pub pos: Option<Span>,
}

impl SemanticError {
    /// Creates a finding with no position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            pos: None,
        }
    }

    /// Attaches a position to the finding.
    pub fn with_pos(mut self, pos: Span) -> Self {
        self.pos = Some(pos);
        self
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "{} at {}.", self.message, pos),
            None => write!(f, "{}.", self.message),
        }
    }
}
