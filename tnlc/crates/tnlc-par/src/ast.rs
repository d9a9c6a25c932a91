//! The TNL abstract syntax tree.
//!
//! One tagged sum per syntactic category, one struct per node. Nodes are
//! built by the parser and never mutated afterwards; the single exception to
//! "no interior state" is [`Pattern`], which memoizes its compiled regex on
//! first use.
//!
//! Equality on leaf nodes compares data only, not spans, so two parses of
//! equivalent source (say, original text and pretty-printed text) are
//! structurally equal.

use once_cell::unsync::OnceCell;
use regex::Regex;
use tnlc_util::Span;

/// Root of a parsed source file: an ordered sequence of definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub definitions: Vec<Definition>,
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Transform(Transform),
    /// Reserved. The parser rejects `test` definitions with a clear error;
    /// the variant exists so downstream stages handle the full surface.
    Test(Test),
}

/// `transform Name { rule_block* }`
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub name: Name,
    pub rule_blocks: Vec<RuleBlock>,
}

/// Reserved `test` definition. No semantics yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Test {}

/// One block inside a transform.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleBlock {
    /// Reserved, like [`Test`].
    Alias(AliasBlock),
    Header(HeaderBlock),
    Value(ValueBlock),
}

/// Reserved `aliases { ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct AliasBlock {
    pub alias_rules: Vec<AliasRule>,
}

/// Reserved `name = literal` alias entry.
#[derive(Clone, Debug, PartialEq)]
pub struct AliasRule {
    pub name: Name,
    pub value: Literal,
}

/// `headers { header_rule* }`
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderBlock {
    pub header_rules: Vec<HeaderRule>,
}

/// `values { value_rule* }`
#[derive(Clone, Debug, PartialEq)]
pub struct ValueBlock {
    pub value_rules: Vec<ValueRule>,
}

/// `header -> pipeline`: rewrites column names.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderRule {
    pub header: Header,
    pub pipeline: Pipeline,
}

/// `rvalue -> pipeline`: rewrites column contents.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueRule {
    pub rvalue: RValue,
    pub pipeline: Pipeline,
}

/// What a header rule or column selector matches against column names.
#[derive(Clone, Debug, PartialEq)]
pub enum Header {
    /// Symbol-table lookup; reserved.
    Name(Name),
    /// Exactly this column name.
    Str(StringLit),
    /// Every column name the pattern matches (anchored at the start).
    Pattern(Pattern),
}

/// An ordered sequence of operations; each operation's output feeds the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    pub operations: Vec<Operation>,
}

/// One step of a pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Expr(Expr),
    /// Reserved; never produced by the parser today.
    Conditional(Conditional),
    Map(Map),
}

/// Reserved `if test { ... } else { ... }` operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    pub test: Expr,
    pub true_pipeline: Pipeline,
    pub false_pipeline: Option<Pipeline>,
}

/// An expression. Only literal rvalues are produced today; the operator
/// variants are reserved surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Binary(BinaryOp),
    Unary(UnaryOp),
    RValue(RValue),
}

/// Reserved binary operation.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpKind {
    Mult,
    Div,
    Mod,
    Add,
    Sub,
}

impl BinOpKind {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Mult => "*",
            BinOpKind::Div => "/",
            BinOpKind::Mod => "%",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
        }
    }
}

/// Reserved unary operation.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp {
    pub op: UnOpKind,
    pub expr: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOpKind {
    Neg,
    Not,
}

impl UnOpKind {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnOpKind::Neg => "-",
            UnOpKind::Not => "!",
        }
    }
}

/// `map_name arg*`: invocation of a built-in primitive. The parser
/// guarantees `args.len()` equals the primitive's declared arity.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    pub name: Name,
    pub args: Vec<RValue>,
}

/// A value-position term.
#[derive(Clone, Debug, PartialEq)]
pub enum RValue {
    Name(Name),
    Literal(Literal),
    ColumnSelector(ColumnSelector),
}

/// `[header]`: the column currently named by `header`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSelector {
    pub header: Header,
}

/// A literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Str(StringLit),
    Number(NumberLit),
    Pattern(Pattern),
    Bool(BooleanLit),
}

/// An identifier.
#[derive(Clone, Debug)]
pub struct Name {
    pub data: String,
    pub span: Span,
}

impl Name {
    pub fn new(data: impl Into<String>, span: Span) -> Self {
        Self {
            data: data.into(),
            span,
        }
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// A single-quoted string literal.
#[derive(Clone, Debug)]
pub struct StringLit {
    pub data: String,
    pub span: Span,
}

impl StringLit {
    pub fn new(data: impl Into<String>, span: Span) -> Self {
        Self {
            data: data.into(),
            span,
        }
    }
}

impl PartialEq for StringLit {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// A decimal integer literal.
#[derive(Clone, Debug)]
pub struct NumberLit {
    pub data: i64,
    pub span: Span,
}

impl NumberLit {
    pub fn new(data: i64, span: Span) -> Self {
        Self { data, span }
    }
}

impl PartialEq for NumberLit {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// `True` or `False`.
#[derive(Clone, Debug)]
pub struct BooleanLit {
    pub data: bool,
    pub span: Span,
}

impl BooleanLit {
    pub fn new(data: bool, span: Span) -> Self {
        Self { data, span }
    }
}

impl PartialEq for BooleanLit {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// A `/regex/` literal.
///
/// Carries the source text between the slashes and lazily compiles it once,
/// anchored at the start (`\A(?:...)`) so matching behaves like an anchored
/// prefix match against column names.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub data: String,
    pub span: Span,
    compiled: OnceCell<Regex>,
}

impl Pattern {
    pub fn new(data: impl Into<String>, span: Span) -> Self {
        Self {
            data: data.into(),
            span,
            compiled: OnceCell::new(),
        }
    }

    /// The compiled, anchored regex. Compiles on first call and memoizes;
    /// later calls return the same regex.
    pub fn compiled(&self) -> Result<&Regex, regex::Error> {
        self.compiled
            .get_or_try_init(|| Regex::new(&format!(r"\A(?:{})", self.data)))
    }

    /// True if the pattern matches at the start of `text`.
    pub fn matches_start(&self, text: &str) -> Result<bool, regex::Error> {
        Ok(self.compiled()?.is_match(text))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
