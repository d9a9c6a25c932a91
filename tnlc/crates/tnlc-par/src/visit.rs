//! AST traversal.
//!
//! One visit method per node kind, each defaulting to [`walk`](self)
//! helpers that recurse into children. Implementors override only the
//! methods they care about, and exhaustive matching in the walkers means a
//! new node kind cannot be added without every traversal being revisited.

use crate::ast::*;

/// A read-only AST traversal.
pub trait Visitor {
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    fn visit_definition(&mut self, definition: &Definition) {
        walk_definition(self, definition);
    }

    fn visit_transform(&mut self, transform: &Transform) {
        walk_transform(self, transform);
    }

    fn visit_test(&mut self, _test: &Test) {}

    fn visit_rule_block(&mut self, rule_block: &RuleBlock) {
        walk_rule_block(self, rule_block);
    }

    fn visit_alias_block(&mut self, alias_block: &AliasBlock) {
        walk_alias_block(self, alias_block);
    }

    fn visit_alias_rule(&mut self, alias_rule: &AliasRule) {
        walk_alias_rule(self, alias_rule);
    }

    fn visit_header_block(&mut self, header_block: &HeaderBlock) {
        walk_header_block(self, header_block);
    }

    fn visit_value_block(&mut self, value_block: &ValueBlock) {
        walk_value_block(self, value_block);
    }

    fn visit_header_rule(&mut self, header_rule: &HeaderRule) {
        walk_header_rule(self, header_rule);
    }

    fn visit_value_rule(&mut self, value_rule: &ValueRule) {
        walk_value_rule(self, value_rule);
    }

    fn visit_header(&mut self, header: &Header) {
        walk_header(self, header);
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        walk_pipeline(self, pipeline);
    }

    fn visit_operation(&mut self, operation: &Operation) {
        walk_operation(self, operation);
    }

    fn visit_conditional(&mut self, conditional: &Conditional) {
        walk_conditional(self, conditional);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_binary_op(&mut self, binary_op: &BinaryOp) {
        walk_binary_op(self, binary_op);
    }

    fn visit_unary_op(&mut self, unary_op: &UnaryOp) {
        walk_unary_op(self, unary_op);
    }

    fn visit_map(&mut self, map: &Map) {
        walk_map(self, map);
    }

    fn visit_rvalue(&mut self, rvalue: &RValue) {
        walk_rvalue(self, rvalue);
    }

    fn visit_column_selector(&mut self, column_selector: &ColumnSelector) {
        walk_column_selector(self, column_selector);
    }

    fn visit_literal(&mut self, literal: &Literal) {
        walk_literal(self, literal);
    }

    fn visit_name(&mut self, _name: &Name) {}

    fn visit_string(&mut self, _string: &StringLit) {}

    fn visit_number(&mut self, _number: &NumberLit) {}

    fn visit_pattern(&mut self, _pattern: &Pattern) {}

    fn visit_boolean(&mut self, _boolean: &BooleanLit) {}
}

pub fn walk_module<V: Visitor + ?Sized>(visitor: &mut V, module: &Module) {
    for definition in &module.definitions {
        visitor.visit_definition(definition);
    }
}

pub fn walk_definition<V: Visitor + ?Sized>(visitor: &mut V, definition: &Definition) {
    match definition {
        Definition::Transform(transform) => visitor.visit_transform(transform),
        Definition::Test(test) => visitor.visit_test(test),
    }
}

pub fn walk_transform<V: Visitor + ?Sized>(visitor: &mut V, transform: &Transform) {
    visitor.visit_name(&transform.name);
    for rule_block in &transform.rule_blocks {
        visitor.visit_rule_block(rule_block);
    }
}

pub fn walk_rule_block<V: Visitor + ?Sized>(visitor: &mut V, rule_block: &RuleBlock) {
    match rule_block {
        RuleBlock::Alias(alias_block) => visitor.visit_alias_block(alias_block),
        RuleBlock::Header(header_block) => visitor.visit_header_block(header_block),
        RuleBlock::Value(value_block) => visitor.visit_value_block(value_block),
    }
}

pub fn walk_alias_block<V: Visitor + ?Sized>(visitor: &mut V, alias_block: &AliasBlock) {
    for alias_rule in &alias_block.alias_rules {
        visitor.visit_alias_rule(alias_rule);
    }
}

pub fn walk_alias_rule<V: Visitor + ?Sized>(visitor: &mut V, alias_rule: &AliasRule) {
    visitor.visit_name(&alias_rule.name);
    visitor.visit_literal(&alias_rule.value);
}

pub fn walk_header_block<V: Visitor + ?Sized>(visitor: &mut V, header_block: &HeaderBlock) {
    for header_rule in &header_block.header_rules {
        visitor.visit_header_rule(header_rule);
    }
}

pub fn walk_value_block<V: Visitor + ?Sized>(visitor: &mut V, value_block: &ValueBlock) {
    for value_rule in &value_block.value_rules {
        visitor.visit_value_rule(value_rule);
    }
}

pub fn walk_header_rule<V: Visitor + ?Sized>(visitor: &mut V, header_rule: &HeaderRule) {
    visitor.visit_header(&header_rule.header);
    visitor.visit_pipeline(&header_rule.pipeline);
}

pub fn walk_value_rule<V: Visitor + ?Sized>(visitor: &mut V, value_rule: &ValueRule) {
    visitor.visit_rvalue(&value_rule.rvalue);
    visitor.visit_pipeline(&value_rule.pipeline);
}

pub fn walk_header<V: Visitor + ?Sized>(visitor: &mut V, header: &Header) {
    match header {
        Header::Name(name) => visitor.visit_name(name),
        Header::Str(string) => visitor.visit_string(string),
        Header::Pattern(pattern) => visitor.visit_pattern(pattern),
    }
}

pub fn walk_pipeline<V: Visitor + ?Sized>(visitor: &mut V, pipeline: &Pipeline) {
    for operation in &pipeline.operations {
        visitor.visit_operation(operation);
    }
}

pub fn walk_operation<V: Visitor + ?Sized>(visitor: &mut V, operation: &Operation) {
    match operation {
        Operation::Expr(expr) => visitor.visit_expr(expr),
        Operation::Conditional(conditional) => visitor.visit_conditional(conditional),
        Operation::Map(map) => visitor.visit_map(map),
    }
}

pub fn walk_conditional<V: Visitor + ?Sized>(visitor: &mut V, conditional: &Conditional) {
    visitor.visit_expr(&conditional.test);
    visitor.visit_pipeline(&conditional.true_pipeline);
    if let Some(false_pipeline) = &conditional.false_pipeline {
        visitor.visit_pipeline(false_pipeline);
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Binary(binary_op) => visitor.visit_binary_op(binary_op),
        Expr::Unary(unary_op) => visitor.visit_unary_op(unary_op),
        Expr::RValue(rvalue) => visitor.visit_rvalue(rvalue),
    }
}

pub fn walk_binary_op<V: Visitor + ?Sized>(visitor: &mut V, binary_op: &BinaryOp) {
    visitor.visit_expr(&binary_op.left);
    visitor.visit_expr(&binary_op.right);
}

pub fn walk_unary_op<V: Visitor + ?Sized>(visitor: &mut V, unary_op: &UnaryOp) {
    visitor.visit_expr(&unary_op.expr);
}

pub fn walk_map<V: Visitor + ?Sized>(visitor: &mut V, map: &Map) {
    visitor.visit_name(&map.name);
    for arg in &map.args {
        visitor.visit_rvalue(arg);
    }
}

pub fn walk_rvalue<V: Visitor + ?Sized>(visitor: &mut V, rvalue: &RValue) {
    match rvalue {
        RValue::Name(name) => visitor.visit_name(name),
        RValue::Literal(literal) => visitor.visit_literal(literal),
        RValue::ColumnSelector(column_selector) => visitor.visit_column_selector(column_selector),
    }
}

pub fn walk_column_selector<V: Visitor + ?Sized>(
    visitor: &mut V,
    column_selector: &ColumnSelector,
) {
    visitor.visit_header(&column_selector.header);
}

pub fn walk_literal<V: Visitor + ?Sized>(visitor: &mut V, literal: &Literal) {
    match literal {
        Literal::Str(string) => visitor.visit_string(string),
        Literal::Number(number) => visitor.visit_number(number),
        Literal::Pattern(pattern) => visitor.visit_pattern(pattern),
        Literal::Bool(boolean) => visitor.visit_boolean(boolean),
    }
}
