//! An ordered collection of named columns.

use indexmap::IndexMap;

use crate::{Series, TableError};

/// A table: named columns of equal length, in a stable order.
///
/// Column order is part of the observable output (it is the CSV header
/// order), so columns live in an insertion-ordered map and renames keep
/// their position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    columns: IndexMap<String, Series>,
}

impl Frame {
    /// An empty frame (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from `(name, series)` pairs, validating equal lengths.
    pub fn from_columns(
        columns: impl IntoIterator<Item = (String, Series)>,
    ) -> Result<Self, TableError> {
        let mut frame = Frame::new();
        for (name, series) in columns {
            frame.insert(name, series)?;
        }
        Ok(frame)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns
            .first()
            .map(|(_, series)| series.len())
            .unwrap_or(0)
    }

    /// True when the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// `(name, series)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.columns.iter().map(|(name, series)| (name.as_str(), series))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// The named column, if present.
    pub fn column(&self, name: &str) -> Option<&Series> {
        self.columns.get(name)
    }

    /// Inserts or replaces a column. New columns append; replacements keep
    /// their position. The length must match the frame's row count.
    pub fn insert(&mut self, name: String, series: Series) -> Result<(), TableError> {
        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(TableError::LengthMismatch {
                name,
                len: series.len(),
                expected: self.len(),
            });
        }
        self.columns.insert(name, series);
        Ok(())
    }

    /// Renames column `from` to `to`, keeping its position. A missing `from`
    /// is a no-op, matching rename semantics in dataframe libraries.
    pub fn rename(&mut self, from: &str, to: &str) {
        if from == to || !self.columns.contains_key(from) {
            return;
        }
        let renamed = self
            .columns
            .drain(..)
            .map(|(name, series)| {
                if name == from {
                    (to.to_string(), series)
                } else {
                    (name, series)
                }
            })
            .collect();
        self.columns = renamed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_columns([
            ("a".to_string(), Series::Int(vec![1, 2])),
            ("b".to_string(), Series::repeat_str("x", 2)),
        ])
        .unwrap()
    }

    #[test]
    fn test_len_and_width() {
        let frame = sample();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.width(), 2);
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new();
        assert_eq!(frame.len(), 0);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_insert_length_mismatch() {
        let mut frame = sample();
        let err = frame
            .insert("c".to_string(), Series::Int(vec![1]))
            .unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { .. }));
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut frame = sample();
        frame.rename("a", "AA");
        let names: Vec<_> = frame.column_names().collect();
        assert_eq!(names, vec!["AA", "b"]);
        assert!(frame.column("AA").is_some());
    }

    #[test]
    fn test_rename_missing_is_noop() {
        let mut frame = sample();
        frame.rename("zzz", "y");
        let names: Vec<_> = frame.column_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_replace_column_keeps_position() {
        let mut frame = sample();
        frame
            .insert("a".to_string(), Series::Int(vec![9, 9]))
            .unwrap();
        let names: Vec<_> = frame.column_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(frame.column("a"), Some(&Series::Int(vec![9, 9])));
    }
}
