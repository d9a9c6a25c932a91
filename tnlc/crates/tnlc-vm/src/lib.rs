//! tnlc-vm - The TNL interpreter.
//!
//! ============================================================================
//! EXECUTION MODEL
//! ============================================================================
//!
//! The VM owns the frame being transformed and applies a module to it
//! eagerly, sequentially, single-threaded: definitions in order, rule blocks
//! in declared order, rules in declared order. Every rule sees the effects
//! of all rules before it; a header renamed by rule *k* is matched under its
//! new name by rules *k+1..*.
//!
//! Two pipeline interpretations share the AST:
//!
//! - HEADER rules run the **string pipeline**: the current column name flows
//!   through the operations as a plain string and the result becomes the
//!   column's new name.
//! - VALUE rules run the **values pipeline**: a snapshot of the column flows
//!   through as a series and the result is written back to the same column.
//!
//! Errors from the table layer (type mismatches, overflow) pass through
//! untouched; the VM adds its own errors only for things the table cannot
//! know: unsupported reserved constructs, maps used in the wrong context,
//! and dangling column references.

use thiserror::Error;
use tnlc_map::{lookup_string, lookup_values, MapArg, MapError};
use tnlc_par::ast::*;
use tnlc_table::{Frame, Series, TableError};

/// Applies `module` to `frame`, returning the transformed frame.
pub fn transform(module: &Module, frame: Frame) -> Result<Frame, RuntimeError> {
    let mut vm = Vm::new(frame);
    vm.execute(module)?;
    Ok(vm.into_frame())
}

/// Runtime failures, the third error tier.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A pattern that survived parsing failed to compile at match time
    /// (reachable when the semantic analyzer was skipped).
    #[error("invalid regex pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A series or frame operation failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A primitive application failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// `Name` headers await symbol tables.
    #[error("name headers are not yet supported")]
    NameHeaderUnsupported,

    /// The map exists but not in this pipeline context.
    #[error("map `{name}` cannot be applied to {context}")]
    WrongContext {
        name: String,
        context: &'static str,
    },

    /// An operation kind with no semantics in this pipeline context.
    #[error("{operation} operations are not supported in {context} pipelines")]
    UnsupportedOperation {
        operation: &'static str,
        context: &'static str,
    },

    /// Value rules must select their target with `[header]`.
    #[error("value rules must select a column with [header]")]
    UnsupportedValueTarget,

    /// A pipeline column selector named a column the frame does not have.
    #[error("column `{0}` not found")]
    ColumnNotFound(String),

    /// A pipeline column selector used a non-string header.
    #[error("column selectors in pipelines must use a string header")]
    NonStringSelector,

    /// A map argument kind with no lowering.
    #[error("{0} arguments to maps are not yet supported")]
    UnsupportedMapArg(&'static str),
}

/// The interpreter. Holds the current frame; [`Vm::execute`] replaces it
/// rule by rule.
pub struct Vm {
    frame: Frame,
}

impl Vm {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }

    /// The transformed frame, after [`Vm::execute`].
    pub fn into_frame(self) -> Frame {
        self.frame
    }

    /// Runs every definition of `module` against the current frame.
    pub fn execute(&mut self, module: &Module) -> Result<(), RuntimeError> {
        for definition in &module.definitions {
            match definition {
                Definition::Transform(transform) => self.exec_transform(transform)?,
                // Reserved surface; nothing to run.
                Definition::Test(_) => {}
            }
        }
        Ok(())
    }

    fn exec_transform(&mut self, transform: &Transform) -> Result<(), RuntimeError> {
        for rule_block in &transform.rule_blocks {
            match rule_block {
                RuleBlock::Header(header_block) => {
                    for header_rule in &header_block.header_rules {
                        self.exec_header_rule(header_rule)?;
                    }
                }
                RuleBlock::Value(value_block) => {
                    for value_rule in &value_block.value_rules {
                        self.exec_value_rule(value_rule)?;
                    }
                }
                // Reserved surface; nothing to run.
                RuleBlock::Alias(_) => {}
            }
        }
        Ok(())
    }

    // =========================================================================
    // HEADER RULES
    // =========================================================================

    fn exec_header_rule(&mut self, rule: &HeaderRule) -> Result<(), RuntimeError> {
        let targets = match &rule.header {
            // The literal itself; absent columns make the rename a no-op.
            Header::Str(string) => vec![string.data.clone()],
            Header::Pattern(pattern) => self.columns_matching(pattern)?,
            Header::Name(_) => return Err(RuntimeError::NameHeaderUnsupported),
        };
        for from in targets {
            let to = self.exec_string_pipeline(&rule.pipeline, &from)?;
            self.frame.rename(&from, &to);
        }
        Ok(())
    }

    // =========================================================================
    // VALUE RULES
    // =========================================================================

    fn exec_value_rule(&mut self, rule: &ValueRule) -> Result<(), RuntimeError> {
        let RValue::ColumnSelector(selector) = &rule.rvalue else {
            return Err(RuntimeError::UnsupportedValueTarget);
        };
        let targets = match &selector.header {
            // Missing string selectors are skipped silently.
            Header::Str(string) => {
                if self.frame.contains_column(&string.data) {
                    vec![string.data.clone()]
                } else {
                    vec![]
                }
            }
            Header::Pattern(pattern) => self.columns_matching(pattern)?,
            Header::Name(_) => return Err(RuntimeError::NameHeaderUnsupported),
        };
        for name in targets {
            let snapshot = self
                .frame
                .column(&name)
                .cloned()
                .ok_or_else(|| RuntimeError::ColumnNotFound(name.clone()))?;
            let result = self.exec_values_pipeline(&rule.pipeline, snapshot)?;
            self.frame.insert(name, result)?;
        }
        Ok(())
    }

    /// Current column names the pattern matches, in column order.
    fn columns_matching(&self, pattern: &Pattern) -> Result<Vec<String>, RuntimeError> {
        let regex = pattern
            .compiled()
            .map_err(|source| RuntimeError::InvalidPattern {
                pattern: pattern.data.clone(),
                source,
            })?;
        Ok(self
            .frame
            .column_names()
            .filter(|name| regex.is_match(name))
            .map(str::to_string)
            .collect())
    }

    // =========================================================================
    // PIPELINES
    // =========================================================================

    /// Header context: a column name flows through as a string.
    fn exec_string_pipeline(
        &self,
        pipeline: &Pipeline,
        input: &str,
    ) -> Result<String, RuntimeError> {
        let mut value = input.to_string();
        for operation in &pipeline.operations {
            value = match operation {
                Operation::Expr(Expr::RValue(RValue::Literal(literal))) => match literal {
                    Literal::Str(string) => string.data.clone(),
                    Literal::Number(number) => number.data.to_string(),
                    Literal::Bool(_) => {
                        return Err(self.unsupported("boolean literal", "header"))
                    }
                    Literal::Pattern(_) => {
                        return Err(self.unsupported("pattern literal", "header"))
                    }
                },
                Operation::Map(map) => {
                    let Some(string_map) = lookup_string(&map.name.data) else {
                        return Err(RuntimeError::WrongContext {
                            name: map.name.data.clone(),
                            context: "header names",
                        });
                    };
                    let args = lower_args(&map.args)?;
                    string_map.apply(&value, &args)?
                }
                Operation::Expr(Expr::RValue(RValue::ColumnSelector(_))) => {
                    return Err(self.unsupported("column selector", "header"))
                }
                Operation::Expr(Expr::RValue(RValue::Name(_))) => {
                    return Err(self.unsupported("name", "header"))
                }
                Operation::Expr(_) => return Err(self.unsupported("operator", "header")),
                Operation::Conditional(_) => {
                    return Err(self.unsupported("conditional", "header"))
                }
            };
        }
        Ok(value)
    }

    /// Values context: the column flows through as a series.
    fn exec_values_pipeline(
        &self,
        pipeline: &Pipeline,
        input: Series,
    ) -> Result<Series, RuntimeError> {
        let rows = self.frame.len();
        let mut series = input;
        for operation in &pipeline.operations {
            series = match operation {
                Operation::Expr(Expr::RValue(RValue::ColumnSelector(selector))) => {
                    let Header::Str(string) = &selector.header else {
                        return Err(RuntimeError::NonStringSelector);
                    };
                    self.frame
                        .column(&string.data)
                        .cloned()
                        .ok_or_else(|| RuntimeError::ColumnNotFound(string.data.clone()))?
                }
                Operation::Expr(Expr::RValue(RValue::Literal(literal))) => match literal {
                    Literal::Str(string) => Series::repeat_str(&string.data, rows),
                    Literal::Number(number) => Series::repeat_int(number.data, rows),
                    Literal::Bool(boolean) => Series::repeat_bool(boolean.data, rows),
                    Literal::Pattern(_) => {
                        return Err(self.unsupported("pattern literal", "value"))
                    }
                },
                Operation::Map(map) => {
                    let Some(values_map) = lookup_values(&map.name.data) else {
                        return Err(RuntimeError::WrongContext {
                            name: map.name.data.clone(),
                            context: "column values",
                        });
                    };
                    let args = lower_args(&map.args)?;
                    values_map.apply(series, &args, &self.frame)?
                }
                Operation::Expr(Expr::RValue(RValue::Name(_))) => {
                    return Err(self.unsupported("name", "value"))
                }
                Operation::Expr(_) => return Err(self.unsupported("operator", "value")),
                Operation::Conditional(_) => {
                    return Err(self.unsupported("conditional", "value"))
                }
            };
        }
        Ok(series)
    }

    fn unsupported(&self, operation: &'static str, context: &'static str) -> RuntimeError {
        RuntimeError::UnsupportedOperation { operation, context }
    }
}

/// Lowers AST map arguments into registry arguments.
fn lower_args(args: &[RValue]) -> Result<Vec<MapArg>, RuntimeError> {
    args.iter()
        .map(|arg| match arg {
            RValue::Literal(Literal::Str(string)) => Ok(MapArg::Str(string.data.clone())),
            RValue::Literal(Literal::Number(number)) => Ok(MapArg::Num(number.data)),
            RValue::ColumnSelector(selector) => match &selector.header {
                Header::Str(string) => Ok(MapArg::Column(string.data.clone())),
                _ => Err(RuntimeError::NonStringSelector),
            },
            RValue::Literal(Literal::Bool(_)) => {
                Err(RuntimeError::UnsupportedMapArg("boolean"))
            }
            RValue::Literal(Literal::Pattern(_)) => {
                Err(RuntimeError::UnsupportedMapArg("pattern"))
            }
            RValue::Name(_) => Err(RuntimeError::UnsupportedMapArg("name")),
        })
        .collect()
}
