//! CSV codec for frames.
//!
//! Reads RFC-4180-style input (quoted fields, doubled quotes, `\r\n` or
//! `\n` records) with a mandatory header row, and writes with minimal
//! quoting: a field is quoted only when it contains a comma, a quote, or a
//! line break. Whitespace inside fields is preserved verbatim; a column
//! whose every cell parses as a 64-bit integer is typed as an integer
//! column, everything else stays text.

use crate::{Frame, Series, TableError};

impl Frame {
    /// Parses CSV text (header row required) into a frame.
    pub fn from_csv(text: &str) -> Result<Self, TableError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let records = parse_records(text)?;
        let mut records = records.into_iter();
        let headers = records.next().ok_or(TableError::EmptyInput)?;

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for (i, record) in records.enumerate() {
            if record.len() != headers.len() {
                return Err(TableError::RaggedRow {
                    // +2: one for the header row, one for 1-based counting
                    line: i + 2,
                    expected: headers.len(),
                    saw: record.len(),
                });
            }
            for (column, field) in cells.iter_mut().zip(record) {
                column.push(field);
            }
        }

        Frame::from_columns(
            headers
                .into_iter()
                .zip(cells)
                .map(|(name, column)| (name, infer_series(column))),
        )
    }

    /// Renders the frame as CSV text, trailing newline included.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, self.column_names());

        let columns: Vec<Vec<String>> = self.columns().map(|(_, series)| series.cells()).collect();
        for row in 0..self.len() {
            write_record(&mut out, columns.iter().map(|col| col[row].as_str()));
        }
        out
    }
}

/// Types a column: integer iff every cell parses as `i64`, else text.
fn infer_series(cells: Vec<String>) -> Series {
    if cells.is_empty() {
        return Series::Str(cells);
    }
    let ints: Option<Vec<i64>> = cells.iter().map(|cell| cell.parse().ok()).collect();
    match ints {
        Some(ints) => Series::Int(ints),
        None => Series::Str(cells),
    }
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        if field.contains(['"', ',', '\n', '\r']) {
            out.push('"');
            for c in field.chars() {
                if c == '"' {
                    out.push('"');
                }
                out.push(c);
            }
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

/// Splits CSV text into records of fields, handling quoting.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>, TableError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut chars = text.chars().peekable();
    // Quoting only opens a field; once content has been seen, a quote is
    // ordinary field text.
    let mut field_open = false;
    // Distinguishes a trailing newline / blank line from a record with one
    // empty field.
    let mut record_open = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !field_open => {
                field_open = true;
                record_open = true;
                loop {
                    match chars.next() {
                        Some('"') => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                field.push('"');
                            } else {
                                break;
                            }
                        }
                        Some(ch) => field.push(ch),
                        None => return Err(TableError::UnterminatedQuote),
                    }
                }
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_open = false;
                record_open = true;
            }
            '\n' | '\r' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if record_open {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                field_open = false;
                record_open = false;
            }
            _ => {
                field.push(c);
                field_open = true;
                record_open = true;
            }
        }
    }
    if record_open {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_plain() {
        let text = "a,b\n1,x\n2,y\n";
        let frame = Frame::from_csv(text).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.column("a"), Some(&Series::Int(vec![1, 2])));
        assert_eq!(frame.to_csv(), text);
    }

    #[test]
    fn test_preserves_field_whitespace() {
        let frame = Frame::from_csv("a,b\n1, hello world\n").unwrap();
        assert_eq!(
            frame.column("b"),
            Some(&Series::Str(vec![" hello world".to_string()]))
        );
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let frame = Frame::from_csv("v\n1\nx\n").unwrap();
        assert_eq!(
            frame.column("v"),
            Some(&Series::Str(vec!["1".to_string(), "x".to_string()]))
        );
    }

    #[test]
    fn test_quoted_fields() {
        let frame = Frame::from_csv("a\n\"x, y\"\n\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(
            frame.column("a"),
            Some(&Series::Str(vec![
                "x, y".to_string(),
                "say \"hi\"".to_string()
            ]))
        );
    }

    #[test]
    fn test_writer_quotes_minimally() {
        let frame = Frame::from_columns([(
            "p".to_string(),
            Series::Str(vec!["a, and b".to_string(), "plain".to_string()]),
        )])
        .unwrap();
        assert_eq!(frame.to_csv(), "p\n\"a, and b\"\nplain\n");
    }

    #[test]
    fn test_missing_trailing_newline() {
        let frame = Frame::from_csv("a,b\n1,2").unwrap();
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_empty_input_errors() {
        assert_eq!(Frame::from_csv(""), Err(TableError::EmptyInput));
    }

    #[test]
    fn test_ragged_row_errors() {
        let err = Frame::from_csv("a,b\n1\n").unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                line: 2,
                expected: 2,
                saw: 1
            }
        );
    }

    #[test]
    fn test_crlf_records() {
        let frame = Frame::from_csv("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.column("b"), Some(&Series::Int(vec![2])));
    }

    #[test]
    fn test_bool_rendering_in_output() {
        let frame = Frame::from_columns([(
            "flag".to_string(),
            Series::repeat_bool(false, 1),
        )])
        .unwrap();
        assert_eq!(frame.to_csv(), "flag\nFalse\n");
    }
}
