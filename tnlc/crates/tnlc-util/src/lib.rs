//! tnlc-util - Shared infrastructure for the TNL compiler pipeline.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! Every phase of the pipeline (lexer, parser, semantic analyzer, VM) needs
//! the same three pieces of plumbing:
//!
//! 1. SOURCE LOCATIONS
//!    Tokens and AST nodes carry a [`Span`] so every error can point at the
//!    offending piece of source text.
//!
//! 2. ERROR TIERS
//!    TNL distinguishes three tiers of failure:
//!    - [`SyntaxError`]   - fatal; lexing or parsing cannot continue.
//!    - [`SemanticError`] - collected into a list; the caller decides.
//!    - runtime errors    - owned by the table/map/vm crates, not here.
//!
//! 3. FORMAT STRINGS
//!    The `format` primitive and the semantic analyzer share one positional
//!    format-string engine (the [`fmt`] module) so "validate" and "execute"
//!    can never disagree about what a well-formed format string is.

pub mod error;
pub mod fmt;
pub mod span;

pub use error::{SemanticError, SyntaxError};
pub use span::Span;
