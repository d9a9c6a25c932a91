//! tnlc-map - The built-in map primitives TNL pipelines compose.
//!
//! ============================================================================
//! TWO REGISTRIES, ONE SET OF PRIMITIVES
//! ============================================================================
//!
//! A primitive like `trim` works in two contexts: header pipelines transform
//! a single column *name* (a string), value pipelines transform a whole
//! column (a series). A primitive that supports the first implements
//! [`StringMap`]; the second, [`ValuesMap`]; most implement both, and purely
//! numeric primitives (`add`, `mult`, ...) implement only [`ValuesMap`].
//!
//! The parser resolves a map name through [`lookup`] - presence in *either*
//! registry - and enforces the declared arity. The VM then fetches the
//! capability matching its context via [`lookup_string`] / [`lookup_values`];
//! a `None` there means "this map does not work on headers/values" and is a
//! runtime error in that context.
//!
//! Arguments are lowered out of the AST into [`MapArg`] before application,
//! which keeps this crate (and the parser's arity check) independent of the
//! AST definition.

mod impls;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tnlc_table::{Frame, Series, TableError};
use tnlc_util::fmt::FormatError;

/// A literal argument to a map, lowered from the AST.
#[derive(Clone, Debug, PartialEq)]
pub enum MapArg {
    /// A string literal.
    Str(String),
    /// An integer literal.
    Num(i64),
    /// A column selector `['name']`; only `concat` accepts these.
    Column(String),
}

impl MapArg {
    /// Name of the argument's shape, for error messages.
    fn shape(&self) -> &'static str {
        match self {
            MapArg::Str(_) => "string",
            MapArg::Num(_) => "number",
            MapArg::Column(_) => "column selector",
        }
    }
}

/// Errors raised while applying a primitive.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    /// The underlying series/frame operation failed (type mismatch,
    /// overflow, division by zero).
    #[error(transparent)]
    Table(#[from] TableError),

    /// A format string failed to parse or substitute.
    #[error("format string error: {0}")]
    Format(#[from] FormatError),

    /// An argument had the wrong shape for the primitive.
    #[error("map `{map}` expects a {expected} as argument {index}, found a {found}")]
    BadArg {
        map: &'static str,
        expected: &'static str,
        index: usize,
        found: &'static str,
    },

    /// A column-selector argument named a column the frame does not have.
    #[error("column `{name}` not found")]
    ColumnNotFound { name: String },
}

/// A primitive usable in header pipelines: string in, string out.
pub trait StringMap: Sync {
    fn apply(&self, s: &str, args: &[MapArg]) -> Result<String, MapError>;
}

/// A primitive usable in value pipelines: series in, series out.
///
/// The frame is the one being transformed; `concat` resolves its
/// column-selector arguments against it.
pub trait ValuesMap: Sync {
    fn apply(&self, series: Series, args: &[MapArg], frame: &Frame) -> Result<Series, MapError>;
}

/// A registered primitive: name, arity, and its capabilities.
pub struct Primitive {
    pub name: &'static str,
    pub num_args: usize,
    string: Option<&'static dyn StringMap>,
    values: Option<&'static dyn ValuesMap>,
}

impl Primitive {
    /// True if the primitive can run in a header pipeline.
    pub fn maps_strings(&self) -> bool {
        self.string.is_some()
    }

    /// True if the primitive can run in a values pipeline.
    pub fn maps_values(&self) -> bool {
        self.values.is_some()
    }
}

static REGISTRY: Lazy<FxHashMap<&'static str, &'static Primitive>> = Lazy::new(|| {
    impls::PRIMITIVES
        .iter()
        .map(|primitive| (primitive.name, primitive))
        .collect()
});

/// Resolves a primitive by name, regardless of capability. This is what the
/// parser consults for existence and arity.
pub fn lookup(name: &str) -> Option<&'static Primitive> {
    REGISTRY.get(name).copied()
}

/// The MAP_STRING registry: primitives visible to header pipelines.
pub fn lookup_string(name: &str) -> Option<&'static dyn StringMap> {
    lookup(name).and_then(|primitive| primitive.string)
}

/// The MAP_VALUES registry: primitives visible to value pipelines.
pub fn lookup_values(name: &str) -> Option<&'static dyn ValuesMap> {
    lookup(name).and_then(|primitive| primitive.values)
}

/// True if `name` names any built-in. Built-in names are reserved and cannot
/// name transforms.
pub fn is_builtin(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// All built-in names, for diagnostics.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
