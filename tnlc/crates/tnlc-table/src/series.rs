//! A homogeneously typed column.

use crate::TableError;

/// One column of a [`Frame`](crate::Frame).
///
/// Arithmetic is element-wise and checked; string transforms apply per cell.
/// Both report type mismatches instead of coercing, the way a dataframe
/// library raises when `.str` ops meet an integer column.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    /// Signed 64-bit integers.
    Int(Vec<i64>),
    /// Unsigned 64-bit integers (`auto_inc` output).
    UInt(Vec<u64>),
    /// Strings.
    Str(Vec<String>),
    /// Booleans, rendered `True`/`False`.
    Bool(Vec<bool>),
}

impl Series {
    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            Series::Int(v) => v.len(),
            Series::UInt(v) => v.len(),
            Series::Str(v) => v.len(),
            Series::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column's type name, as used in error messages.
    pub fn dtype(&self) -> &'static str {
        match self {
            Series::Int(_) => "int64",
            Series::UInt(_) => "uint64",
            Series::Str(_) => "str",
            Series::Bool(_) => "bool",
        }
    }

    /// A constant string column.
    pub fn repeat_str(value: &str, len: usize) -> Series {
        Series::Str(vec![value.to_string(); len])
    }

    /// A constant integer column.
    pub fn repeat_int(value: i64, len: usize) -> Series {
        Series::Int(vec![value; len])
    }

    /// A constant boolean column.
    pub fn repeat_bool(value: bool, len: usize) -> Series {
        Series::Bool(vec![value; len])
    }

    /// The column `[1, 2, ..., len]`.
    pub fn auto_inc(len: usize) -> Series {
        Series::UInt((1..=len as u64).collect())
    }

    /// Renders every cell to text, the same way CSV output does.
    pub fn cells(&self) -> Vec<String> {
        match self {
            Series::Int(v) => v.iter().map(|n| n.to_string()).collect(),
            Series::UInt(v) => v.iter().map(|n| n.to_string()).collect(),
            Series::Str(v) => v.clone(),
            Series::Bool(v) => v
                .iter()
                .map(|b| if *b { "True" } else { "False" }.to_string())
                .collect(),
        }
    }

    /// Element-wise `cell + n`.
    pub fn add(&self, n: i64) -> Result<Series, TableError> {
        self.numeric_op("add", n, i64::checked_add, u64::checked_add_signed)
    }

    /// Element-wise `cell * n`.
    pub fn mul(&self, n: i64) -> Result<Series, TableError> {
        self.numeric_op("mult", n, i64::checked_mul, |v, n| {
            u64::try_from(n).ok().and_then(|n| v.checked_mul(n))
        })
    }

    /// Element-wise `cell ** n`.
    pub fn pow(&self, n: i64) -> Result<Series, TableError> {
        let exp = u32::try_from(n).map_err(|_| TableError::Overflow { op: "power" })?;
        self.numeric_op("power", 0, |v, _| v.checked_pow(exp), |v, _| {
            v.checked_pow(exp)
        })
    }

    /// Element-wise floor division `cell // n`.
    pub fn floordiv(&self, n: i64) -> Result<Series, TableError> {
        if n == 0 {
            return Err(TableError::DivisionByZero);
        }
        self.numeric_op("divide", n, |v, n| Some(v.div_euclid(n)), |v, n| {
            u64::try_from(n).ok().map(|n| v / n)
        })
    }

    fn numeric_op(
        &self,
        op: &'static str,
        n: i64,
        f_int: impl Fn(i64, i64) -> Option<i64>,
        f_uint: impl Fn(u64, i64) -> Option<u64>,
    ) -> Result<Series, TableError> {
        match self {
            Series::Int(v) => v
                .iter()
                .map(|&cell| f_int(cell, n).ok_or(TableError::Overflow { op }))
                .collect::<Result<Vec<_>, _>>()
                .map(Series::Int),
            Series::UInt(v) => v
                .iter()
                .map(|&cell| f_uint(cell, n).ok_or(TableError::Overflow { op }))
                .collect::<Result<Vec<_>, _>>()
                .map(Series::UInt),
            _ => Err(TableError::NotNumeric {
                op,
                dtype: self.dtype(),
            }),
        }
    }

    /// Applies `f` to every cell of a string column.
    ///
    /// Errors on any other dtype; constant columns produced mid-pipeline are
    /// already strings when they need to be.
    pub fn map_str(
        &self,
        op: &'static str,
        f: impl Fn(&str) -> String,
    ) -> Result<Series, TableError> {
        match self {
            Series::Str(v) => Ok(Series::Str(v.iter().map(|cell| f(cell)).collect())),
            _ => Err(TableError::NotString {
                op,
                dtype: self.dtype(),
            }),
        }
    }

    /// Like [`Series::map_str`] but the per-cell function can fail.
    pub fn try_map_str(
        &self,
        op: &'static str,
        f: impl Fn(&str) -> Result<String, TableError>,
    ) -> Result<Series, TableError> {
        match self {
            Series::Str(v) => v
                .iter()
                .map(|cell| f(cell))
                .collect::<Result<Vec<_>, _>>()
                .map(Series::Str),
            _ => Err(TableError::NotString {
                op,
                dtype: self.dtype(),
            }),
        }
    }
}
