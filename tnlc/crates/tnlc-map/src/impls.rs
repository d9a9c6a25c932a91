//! The sixteen built-in primitives.
//!
//! Each primitive is a unit struct implementing [`StringMap`], [`ValuesMap`],
//! or both; [`PRIMITIVES`] is the single declaration site the registries are
//! built from. The per-cell text transforms live at the bottom so the header
//! (plain string) and values (per-cell) paths share one definition.

use tnlc_table::{Frame, Series};
use tnlc_util::fmt::format_positional;

use crate::{MapArg, MapError, Primitive, StringMap, ValuesMap};

// =============================================================================
// ARGUMENT ACCESSORS
// =============================================================================

fn num_arg(map: &'static str, args: &[MapArg], index: usize) -> Result<i64, MapError> {
    match &args[index] {
        MapArg::Num(n) => Ok(*n),
        other => Err(MapError::BadArg {
            map,
            expected: "number",
            index: index + 1,
            found: other.shape(),
        }),
    }
}

fn str_arg<'a>(map: &'static str, args: &'a [MapArg], index: usize) -> Result<&'a str, MapError> {
    match &args[index] {
        MapArg::Str(s) => Ok(s),
        other => Err(MapError::BadArg {
            map,
            expected: "string",
            index: index + 1,
            found: other.shape(),
        }),
    }
}

// =============================================================================
// NUMERIC PRIMITIVES (values only)
// =============================================================================

struct AddMap;

impl ValuesMap for AddMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.add(num_arg("add", args, 0)?)?)
    }
}

struct MultMap;

impl ValuesMap for MultMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.mul(num_arg("mult", args, 0)?)?)
    }
}

struct PowerMap;

impl ValuesMap for PowerMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.pow(num_arg("power", args, 0)?)?)
    }
}

struct DivideMap;

impl ValuesMap for DivideMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.floordiv(num_arg("divide", args, 0)?)?)
    }
}

struct AutoIncMap;

impl ValuesMap for AutoIncMap {
    fn apply(&self, series: Series, _args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(Series::auto_inc(series.len()))
    }
}

// =============================================================================
// TEXT PRIMITIVES (strings and values)
// =============================================================================

struct ReplaceMap;

impl StringMap for ReplaceMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let from = str_arg("replace", args, 0)?;
        let to = str_arg("replace", args, 1)?;
        Ok(s.replace(from, to))
    }
}

impl ValuesMap for ReplaceMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let from = str_arg("replace", args, 0)?;
        let to = str_arg("replace", args, 1)?;
        Ok(series.map_str("replace", |cell| cell.replace(from, to))?)
    }
}

struct ReplaceLastMap;

impl StringMap for ReplaceLastMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let from = str_arg("replace_last", args, 0)?;
        let to = str_arg("replace_last", args, 1)?;
        Ok(replace_last(s, from, to))
    }
}

impl ValuesMap for ReplaceLastMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let from = str_arg("replace_last", args, 0)?;
        let to = str_arg("replace_last", args, 1)?;
        Ok(series.map_str("replace_last", |cell| replace_last(cell, from, to))?)
    }
}

struct TrimMap;

impl StringMap for TrimMap {
    fn apply(&self, s: &str, _args: &[MapArg]) -> Result<String, MapError> {
        Ok(s.trim().to_string())
    }
}

impl ValuesMap for TrimMap {
    fn apply(&self, series: Series, _args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.map_str("trim", |cell| cell.trim().to_string())?)
    }
}

struct SliceMap;

impl StringMap for SliceMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let start = num_arg("slice", args, 0)?;
        let end = num_arg("slice", args, 1)?;
        Ok(slice_chars(s, start, end))
    }
}

impl ValuesMap for SliceMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let start = num_arg("slice", args, 0)?;
        let end = num_arg("slice", args, 1)?;
        Ok(series.map_str("slice", |cell| slice_chars(cell, start, end))?)
    }
}

struct TitleMap;

impl StringMap for TitleMap {
    fn apply(&self, s: &str, _args: &[MapArg]) -> Result<String, MapError> {
        Ok(title_case(s))
    }
}

impl ValuesMap for TitleMap {
    fn apply(&self, series: Series, _args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.map_str("title", title_case)?)
    }
}

struct UpperMap;

impl StringMap for UpperMap {
    fn apply(&self, s: &str, _args: &[MapArg]) -> Result<String, MapError> {
        Ok(s.to_uppercase())
    }
}

impl ValuesMap for UpperMap {
    fn apply(&self, series: Series, _args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.map_str("upper", |cell| cell.to_uppercase())?)
    }
}

struct LowerMap;

impl StringMap for LowerMap {
    fn apply(&self, s: &str, _args: &[MapArg]) -> Result<String, MapError> {
        Ok(s.to_lowercase())
    }
}

impl ValuesMap for LowerMap {
    fn apply(&self, series: Series, _args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        Ok(series.map_str("lower", |cell| cell.to_lowercase())?)
    }
}

struct RemovePrefixMap;

impl StringMap for RemovePrefixMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let prefix = str_arg("remove_prefix", args, 0)?;
        Ok(remove_prefix(s, prefix))
    }
}

impl ValuesMap for RemovePrefixMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let prefix = str_arg("remove_prefix", args, 0)?;
        Ok(series.map_str("remove_prefix", |cell| remove_prefix(cell, prefix))?)
    }
}

struct RemoveSuffixMap;

impl StringMap for RemoveSuffixMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let suffix = str_arg("remove_suffix", args, 0)?;
        Ok(remove_suffix(s, suffix))
    }
}

impl ValuesMap for RemoveSuffixMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let suffix = str_arg("remove_suffix", args, 0)?;
        Ok(series.map_str("remove_suffix", |cell| remove_suffix(cell, suffix))?)
    }
}

struct ConcatMap;

impl StringMap for ConcatMap {
    fn apply(&self, _s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let mut out = String::new();
        for index in 0..3 {
            out.push_str(str_arg("concat", args, index)?);
        }
        Ok(out)
    }
}

impl ValuesMap for ConcatMap {
    fn apply(&self, series: Series, args: &[MapArg], frame: &Frame) -> Result<Series, MapError> {
        let rows = series.len();
        // Each argument becomes one string per row: literals broadcast,
        // column selectors are rendered cell-wise.
        let mut parts: Vec<Vec<String>> = Vec::with_capacity(args.len());
        for (index, arg) in args.iter().enumerate() {
            match arg {
                MapArg::Str(s) => parts.push(vec![s.clone(); rows]),
                MapArg::Column(name) => {
                    let column = frame.column(name).ok_or_else(|| MapError::ColumnNotFound {
                        name: name.clone(),
                    })?;
                    parts.push(column.cells());
                }
                other => {
                    return Err(MapError::BadArg {
                        map: "concat",
                        expected: "string or column selector",
                        index: index + 1,
                        found: other.shape(),
                    })
                }
            }
        }
        let cells = (0..rows)
            .map(|row| parts.iter().map(|part| part[row].as_str()).collect())
            .collect();
        Ok(Series::Str(cells))
    }
}

struct FormatMap;

impl StringMap for FormatMap {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError> {
        let fmt = str_arg("format", args, 0)?;
        Ok(format_positional(fmt, &[s])?)
    }
}

impl ValuesMap for FormatMap {
    fn apply(&self, series: Series, args: &[MapArg], _frame: &Frame) -> Result<Series, MapError> {
        let fmt = str_arg("format", args, 0)?;
        let cells = series
            .cells()
            .iter()
            .map(|cell| format_positional(fmt, &[cell]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Series::Str(cells))
    }
}

// =============================================================================
// THE REGISTRY TABLE
// =============================================================================

macro_rules! primitive {
    ($name:literal, $num_args:literal, string: $s:expr, values: $v:expr) => {
        Primitive {
            name: $name,
            num_args: $num_args,
            string: $s,
            values: $v,
        }
    };
}

pub(crate) static PRIMITIVES: [Primitive; 16] = [
    primitive!("add", 1, string: None, values: Some(&AddMap)),
    primitive!("mult", 1, string: None, values: Some(&MultMap)),
    primitive!("power", 1, string: None, values: Some(&PowerMap)),
    primitive!("divide", 1, string: None, values: Some(&DivideMap)),
    primitive!("auto_inc", 0, string: None, values: Some(&AutoIncMap)),
    primitive!("replace", 2, string: Some(&ReplaceMap), values: Some(&ReplaceMap)),
    primitive!("replace_last", 2, string: Some(&ReplaceLastMap), values: Some(&ReplaceLastMap)),
    primitive!("trim", 0, string: Some(&TrimMap), values: Some(&TrimMap)),
    primitive!("slice", 2, string: Some(&SliceMap), values: Some(&SliceMap)),
    primitive!("title", 0, string: Some(&TitleMap), values: Some(&TitleMap)),
    primitive!("upper", 0, string: Some(&UpperMap), values: Some(&UpperMap)),
    primitive!("lower", 0, string: Some(&LowerMap), values: Some(&LowerMap)),
    primitive!("remove_prefix", 1, string: Some(&RemovePrefixMap), values: Some(&RemovePrefixMap)),
    primitive!("remove_suffix", 1, string: Some(&RemoveSuffixMap), values: Some(&RemoveSuffixMap)),
    primitive!("concat", 3, string: Some(&ConcatMap), values: Some(&ConcatMap)),
    primitive!("format", 1, string: Some(&FormatMap), values: Some(&FormatMap)),
];

// =============================================================================
// PER-CELL TEXT TRANSFORMS
// =============================================================================

/// Replaces only the last occurrence of `from` with `to`.
fn replace_last(s: &str, from: &str, to: &str) -> String {
    match s.rfind(from) {
        Some(idx) => {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..idx]);
            out.push_str(to);
            out.push_str(&s[idx + from.len()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Character-based `s[start..end]` with clamping slice semantics:
/// out-of-range bounds clamp, an empty or inverted range yields the empty
/// string.
fn slice_chars(s: &str, start: i64, end: i64) -> String {
    let start = start.max(0) as usize;
    let end = end.max(0) as usize;
    if end <= start {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}

/// Title case: each alphabetic run starts uppercase, the rest lowercase.
/// Non-letters (spaces, hyphens, digits) restart a run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Drops a leading `prefix` if present.
fn remove_prefix(s: &str, prefix: &str) -> String {
    s.strip_prefix(prefix).unwrap_or(s).to_string()
}

/// Drops a trailing `suffix` if present.
fn remove_suffix(s: &str, suffix: &str) -> String {
    s.strip_suffix(suffix).unwrap_or(s).to_string()
}
