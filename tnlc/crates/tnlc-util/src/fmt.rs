//! Positional format strings for the `format` primitive.
//!
//! TNL format strings are a small positional dialect: replacement fields
//! are either empty (`{}`, automatic numbering) or a decimal index (`{0}`),
//! `{{` and `}}` are literal braces, and nothing else is accepted.
//! The semantic analyzer validates by parsing; the `format` primitive parses
//! and then substitutes, so both sides agree on well-formedness by
//! construction.

use thiserror::Error;

/// Rejection reasons for a format string.
///
/// The display strings end up verbatim inside
/// `Invalid format string (<reason>)` diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// An opening `{` was never closed.
    #[error("expected '}}' before end of string")]
    UnterminatedField,

    /// A `}` appeared outside any replacement field.
    #[error("Single '}}' encountered in format string")]
    SingleClosingBrace,

    /// A replacement field contained something other than a decimal index.
    #[error("expected integer index in replacement field")]
    NonIntegerField,

    /// `{}` and `{0}` were mixed in one string.
    #[error("cannot switch from automatic field numbering to manual field specification")]
    MixedNumbering,

    /// A manual index referred past the supplied arguments. Substitution
    /// time only; parsing never reports this.
    #[error("Replacement index {0} out of range")]
    IndexOutOfRange(usize),
}

/// One parsed piece of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text, `{{`/`}}` already unescaped.
    Literal(String),
    /// A replacement field: `None` for `{}`, `Some(i)` for `{i}`.
    Field(Option<usize>),
}

fn parse(fmt: &str) -> Result<Vec<Segment>, FormatError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = fmt.chars().peekable();
    let mut saw_auto = false;
    let mut saw_manual = false;

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    literal.push('{');
                    continue;
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => field.push(ch),
                        None => return Err(FormatError::UnterminatedField),
                    }
                }
                let index = if field.is_empty() {
                    saw_auto = true;
                    None
                } else {
                    let index: usize =
                        field.parse().map_err(|_| FormatError::NonIntegerField)?;
                    saw_manual = true;
                    Some(index)
                };
                if saw_auto && saw_manual {
                    return Err(FormatError::MixedNumbering);
                }
                segments.push(Segment::Field(index));
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    literal.push('}');
                } else {
                    return Err(FormatError::SingleClosingBrace);
                }
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Checks that `fmt` would format cleanly with one positional argument.
pub fn validate_format_string(fmt: &str) -> Result<(), FormatError> {
    parse(fmt).map(|_| ())
}

/// Substitutes `args` into `fmt`.
///
/// Automatic fields consume arguments left to right; manual fields index
/// into `args` directly.
///
/// # Examples
///
/// ```
/// use tnlc_util::fmt::format_positional;
///
/// assert_eq!(format_positional("hello {}", &["earth"]).unwrap(), "hello earth");
/// assert_eq!(format_positional("{0} and {0}", &["x"]).unwrap(), "x and x");
/// ```
pub fn format_positional(fmt: &str, args: &[&str]) -> Result<String, FormatError> {
    let segments = parse(fmt)?;
    let mut out = String::with_capacity(fmt.len());
    let mut next_auto = 0usize;
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Field(index) => {
                let index = match index {
                    Some(i) => i,
                    None => {
                        let i = next_auto;
                        next_auto += 1;
                        i
                    }
                };
                let arg = args.get(index).ok_or(FormatError::IndexOutOfRange(index))?;
                out.push_str(arg);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(format_positional("no fields", &["x"]).unwrap(), "no fields");
    }

    #[test]
    fn test_automatic_field() {
        assert_eq!(format_positional("hello {}", &["earth"]).unwrap(), "hello earth");
        assert_eq!(format_positional("{} greeting", &["planet"]).unwrap(), "planet greeting");
    }

    #[test]
    fn test_manual_index() {
        assert_eq!(format_positional("{0}{0}", &["ab"]).unwrap(), "abab");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(format_positional("{{}} {}", &["x"]).unwrap(), "{} x");
    }

    #[test]
    fn test_unterminated_field() {
        assert_eq!(
            validate_format_string(" {planet"),
            Err(FormatError::UnterminatedField)
        );
        assert_eq!(
            FormatError::UnterminatedField.to_string(),
            "expected '}' before end of string"
        );
    }

    #[test]
    fn test_single_closing_brace() {
        assert_eq!(
            validate_format_string("oops } here"),
            Err(FormatError::SingleClosingBrace)
        );
    }

    #[test]
    fn test_named_field_rejected() {
        assert_eq!(
            validate_format_string("{planet}"),
            Err(FormatError::NonIntegerField)
        );
    }

    #[test]
    fn test_mixed_numbering_rejected() {
        assert_eq!(
            validate_format_string("{} and {0}"),
            Err(FormatError::MixedNumbering)
        );
    }

    #[test]
    fn test_index_out_of_range_is_substitution_time_only() {
        assert!(validate_format_string("{3}").is_ok());
        assert_eq!(
            format_positional("{3}", &["x"]),
            Err(FormatError::IndexOutOfRange(3))
        );
    }
}
