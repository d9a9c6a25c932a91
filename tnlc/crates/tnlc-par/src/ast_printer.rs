//! Structural AST dump, for `--print-ast` and debugging.
//!
//! Constructor-style rendering: every node prints as `Kind(field=..., ...)`
//! with children indented two spaces. Leaves render inline.

use crate::ast::*;
use crate::visit::Visitor;

/// Renders a module's AST as an indented constructor-style tree.
pub fn print_module_ast(module: &Module) -> String {
    let mut printer = AstPrinter::new(2);
    printer.visit_module(module);
    printer.out
}

struct AstPrinter {
    out: String,
    indent_spaces: usize,
    cur_indent: usize,
}

impl AstPrinter {
    fn new(indent_spaces: usize) -> Self {
        Self {
            out: String::new(),
            indent_spaces,
            cur_indent: 0,
        }
    }

    fn indent(&mut self) {
        self.cur_indent += self.indent_spaces;
    }

    fn dedent(&mut self) {
        self.cur_indent -= self.indent_spaces;
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.cur_indent {
            self.out.push(' ');
        }
    }

    fn open(&mut self, header: &str) {
        self.write_indent();
        self.write(header);
        self.write("\n");
        self.indent();
    }

    fn close(&mut self, footer: &str) {
        self.dedent();
        self.write_indent();
        self.write(footer);
        self.write("\n");
    }

    /// Prints a `field=[...]` list of children, handling the empty case
    /// inline.
    fn child_list<T>(
        &mut self,
        field: &str,
        items: &[T],
        mut visit: impl FnMut(&mut Self, &T),
    ) {
        if items.is_empty() {
            self.write_indent();
            self.write(&format!("{field}=[],\n"));
            return;
        }
        self.open(&format!("{field}=["));
        for item in items {
            visit(self, item);
        }
        self.close("],");
    }
}

impl Visitor for AstPrinter {
    fn visit_module(&mut self, module: &Module) {
        if module.definitions.is_empty() {
            self.write("Module()\n");
            return;
        }
        self.open("Module(");
        for definition in &module.definitions {
            self.visit_definition(definition);
        }
        self.close(")");
    }

    fn visit_transform(&mut self, transform: &Transform) {
        self.open("Transform(");
        self.write_indent();
        self.write(&format!("name=Name(data='{}'),\n", transform.name.data));
        self.child_list("rule_blocks", &transform.rule_blocks, |printer, block| {
            printer.visit_rule_block(block)
        });
        self.close("),");
    }

    fn visit_test(&mut self, _test: &Test) {
        self.write_indent();
        self.write("Test(),\n");
    }

    fn visit_alias_block(&mut self, alias_block: &AliasBlock) {
        self.open("AliasBlock(");
        self.child_list("alias_rules", &alias_block.alias_rules, |printer, rule| {
            printer.visit_alias_rule(rule)
        });
        self.close("),");
    }

    fn visit_header_block(&mut self, header_block: &HeaderBlock) {
        self.open("HeaderBlock(");
        self.child_list(
            "header_rules",
            &header_block.header_rules,
            |printer, rule| printer.visit_header_rule(rule),
        );
        self.close("),");
    }

    fn visit_value_block(&mut self, value_block: &ValueBlock) {
        self.open("ValueBlock(");
        self.child_list("value_rules", &value_block.value_rules, |printer, rule| {
            printer.visit_value_rule(rule)
        });
        self.close("),");
    }

    fn visit_header_rule(&mut self, header_rule: &HeaderRule) {
        self.open("HeaderRule(");
        self.write_indent();
        self.write("header=");
        self.write_header_inline(&header_rule.header);
        self.write(",\n");
        self.visit_pipeline(&header_rule.pipeline);
        self.close("),");
    }

    fn visit_value_rule(&mut self, value_rule: &ValueRule) {
        self.open("ValueRule(");
        self.write_indent();
        self.write("rvalue=");
        self.write_rvalue_inline(&value_rule.rvalue);
        self.write(",\n");
        self.visit_pipeline(&value_rule.pipeline);
        self.close("),");
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        self.open("pipeline=Pipeline(");
        self.child_list("operations", &pipeline.operations, |printer, operation| {
            printer.visit_operation(operation)
        });
        self.close("),");
    }

    fn visit_operation(&mut self, operation: &Operation) {
        match operation {
            Operation::Expr(Expr::RValue(rvalue)) => {
                self.write_indent();
                self.write_rvalue_inline(rvalue);
                self.write(",\n");
            }
            Operation::Expr(expr) => self.visit_expr(expr),
            Operation::Conditional(conditional) => self.visit_conditional(conditional),
            Operation::Map(map) => self.visit_map(map),
        }
    }

    fn visit_binary_op(&mut self, binary_op: &BinaryOp) {
        self.open("BinaryOp(");
        self.write_indent();
        self.write(&format!("op={},\n", binary_op.op.symbol()));
        self.visit_expr(&binary_op.left);
        self.visit_expr(&binary_op.right);
        self.close("),");
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) {
        self.open("UnaryOp(");
        self.write_indent();
        self.write(&format!("op={},\n", unary_op.op.symbol()));
        self.visit_expr(&unary_op.expr);
        self.close("),");
    }

    fn visit_map(&mut self, map: &Map) {
        self.open("Map(");
        self.write_indent();
        self.write(&format!("name=Name(data='{}'),\n", map.name.data));
        self.child_list("args", &map.args, |printer, arg| {
            printer.write_indent();
            printer.write_rvalue_inline(arg);
            printer.write(",\n");
        });
        self.close("),");
    }
}

impl AstPrinter {
    fn write_header_inline(&mut self, header: &Header) {
        match header {
            Header::Name(name) => self.write(&format!("Name(data='{}')", name.data)),
            Header::Str(string) => self.write(&format!("String(data='{}')", string.data)),
            Header::Pattern(pattern) => {
                self.write(&format!("Pattern(data='{}')", pattern.data))
            }
        }
    }

    fn write_rvalue_inline(&mut self, rvalue: &RValue) {
        match rvalue {
            RValue::Name(name) => self.write(&format!("Name(data='{}')", name.data)),
            RValue::Literal(Literal::Str(string)) => {
                self.write(&format!("String(data='{}')", string.data))
            }
            RValue::Literal(Literal::Number(number)) => {
                self.write(&format!("Number(data='{}')", number.data))
            }
            RValue::Literal(Literal::Pattern(pattern)) => {
                self.write(&format!("Pattern(data='{}')", pattern.data))
            }
            RValue::Literal(Literal::Bool(boolean)) => {
                let data = if boolean.data { "True" } else { "False" };
                self.write(&format!("Boolean(data={data})"))
            }
            RValue::ColumnSelector(selector) => {
                self.write("ColumnSelector(header=");
                self.write_header_inline(&selector.header);
                self.write(")");
            }
        }
    }
}
