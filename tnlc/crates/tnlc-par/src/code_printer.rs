//! Canonical source printer.
//!
//! Emits a module back as TNL source such that reparsing the output yields a
//! structurally equal AST. Rule bodies with a single operation print inline
//! (`'a' -> trim`); bodies with two or more print as a braced block with one
//! `| op` per line.

use crate::ast::*;
use crate::visit::Visitor;

/// Pretty-prints a module as canonical TNL source with 4-space indentation.
pub fn print_module_code(module: &Module) -> String {
    let mut printer = CodePrinter::new(4);
    printer.visit_module(module);
    printer.out
}

/// The code-printing visitor. Owns the output buffer and current indent.
pub struct CodePrinter {
    out: String,
    indent_spaces: usize,
    cur_indent: usize,
}

impl CodePrinter {
    pub fn new(indent_spaces: usize) -> Self {
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

    /// Prints `lhs -> pipeline`, choosing the inline or block form. The
    /// left-hand side has already been written.
    fn write_rule_body(&mut self, pipeline: &Pipeline) {
        if pipeline.operations.len() > 1 {
            self.write(" -> {\n");
            self.indent();
            self.visit_pipeline(pipeline);
            self.dedent();
            self.write_indent();
            self.write("}\n");
        } else {
            self.write(" -> ");
            self.visit_pipeline(pipeline);
            self.write("\n");
        }
    }
}

impl Visitor for CodePrinter {
    fn visit_transform(&mut self, transform: &Transform) {
        self.write_indent();
        self.write("transform ");
        self.visit_name(&transform.name);
        self.write(" {\n");
        self.indent();
        for rule_block in &transform.rule_blocks {
            self.visit_rule_block(rule_block);
        }
        self.dedent();
        self.write_indent();
        self.write("}\n");
    }

    fn visit_header_block(&mut self, header_block: &HeaderBlock) {
        self.write_indent();
        self.write("headers {\n");
        self.indent();
        for header_rule in &header_block.header_rules {
            self.visit_header_rule(header_rule);
        }
        self.dedent();
        self.write_indent();
        self.write("}\n");
    }

    fn visit_value_block(&mut self, value_block: &ValueBlock) {
        self.write_indent();
        self.write("values {\n");
        self.indent();
        for value_rule in &value_block.value_rules {
            self.visit_value_rule(value_rule);
        }
        self.dedent();
        self.write_indent();
        self.write("}\n");
    }

    fn visit_header_rule(&mut self, header_rule: &HeaderRule) {
        self.write_indent();
        self.visit_header(&header_rule.header);
        self.write_rule_body(&header_rule.pipeline);
    }

    fn visit_value_rule(&mut self, value_rule: &ValueRule) {
        self.write_indent();
        self.visit_rvalue(&value_rule.rvalue);
        self.write_rule_body(&value_rule.pipeline);
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        match pipeline.operations.as_slice() {
            [] => self.write("{}"),
            [operation] => self.visit_operation(operation),
            operations => {
                for operation in operations {
                    self.write_indent();
                    self.write("| ");
                    self.visit_operation(operation);
                    self.write("\n");
                }
            }
        }
    }

    fn visit_conditional(&mut self, conditional: &Conditional) {
        self.write("if ");
        self.visit_expr(&conditional.test);
        self.write(" {\n");
        self.indent();
        self.visit_pipeline(&conditional.true_pipeline);
        self.dedent();
        self.write_indent();
        self.write("}");
        if let Some(false_pipeline) = &conditional.false_pipeline {
            self.write(" else {\n");
            self.indent();
            self.visit_pipeline(false_pipeline);
            self.dedent();
            self.write_indent();
            self.write("}");
        }
    }

    fn visit_binary_op(&mut self, binary_op: &BinaryOp) {
        self.write("(");
        self.visit_expr(&binary_op.left);
        self.write(&format!(" {} ", binary_op.op.symbol()));
        self.visit_expr(&binary_op.right);
        self.write(")");
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) {
        self.write(&format!("({} ", unary_op.op.symbol()));
        self.visit_expr(&unary_op.expr);
        self.write(")");
    }

    fn visit_map(&mut self, map: &Map) {
        self.visit_name(&map.name);
        for arg in &map.args {
            self.write(" ");
            self.visit_rvalue(arg);
        }
    }

    fn visit_column_selector(&mut self, column_selector: &ColumnSelector) {
        self.write("[");
        self.visit_header(&column_selector.header);
        self.write("]");
    }

    fn visit_name(&mut self, name: &Name) {
        self.write(&name.data);
    }

    fn visit_string(&mut self, string: &StringLit) {
        self.write(&format!("'{}'", string.data));
    }

    fn visit_number(&mut self, number: &NumberLit) {
        self.write(&number.data.to_string());
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        self.write(&format!("/{}/", pattern.data));
    }

    fn visit_boolean(&mut self, boolean: &BooleanLit) {
        self.write(if boolean.data { "True" } else { "False" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    fn reprint(src: &str) -> String {
        let module = parse_source(src, "test").expect("source should parse");
        print_module_code(&module)
    }

    #[test]
    fn test_already_canonical_source_is_fixed_point() {
        let src = "\
transform Test {
    headers {
        'a' -> 'AA'
        'B' -> 'BB'
        'C' -> 'CC'
    }
    values {
        ['AA'] -> {
            | add 1
            | mult 2
        }
        ['BB'] -> 999
        ['CC'] -> {
            | replace '  ' ' '
            | trim
        }
    }
}
";
        assert_eq!(reprint(src), src);
    }

    #[test]
    fn test_pattern_rules_round_trip() {
        let src = "\
transform Test {
    headers {
        /(\\s+.*)|(.*\\s+)/ -> trim
    }
    values {
        [/upp*./] -> upper
    }
}
";
        assert_eq!(reprint(src), src);
    }

    #[test]
    fn test_single_op_pipeline_prints_inline() {
        let src = "transform T {\n  headers { 'a' -> 'AA' | replace 'A' 'D'  'B' -> 'BB' }\n}\n";
        let expected = "\
transform T {
    headers {
        'a' -> {
            | 'AA'
            | replace 'A' 'D'
        }
        'B' -> 'BB'
    }
}
";
        assert_eq!(reprint(src), expected);
    }

    #[test]
    fn test_boolean_and_name_rvalues() {
        let src = "\
transform T {
    values {
        ['a'] -> True
        ['b'] -> False
    }
}
";
        assert_eq!(reprint(src), src);
    }

    #[test]
    fn test_print_parse_round_trip_is_structurally_equal() {
        let src = "transform Movies {
    headers {
        'date' -> 'Year'
        /b|d/ -> upper
    }
    values {
        ['Year'] -> slice 0 4
        ['Title'] -> trim | title | replace 'Of' 'of'
    }
}
";
        let first = parse_source(src, "test").unwrap();
        let printed = print_module_code(&first);
        let second = parse_source(&printed, "test").unwrap();
        assert_eq!(first, second);
    }
}
