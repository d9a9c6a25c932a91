//! tnlc-par - Parser for TNL.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! A hand-written recursive-descent parser: one `parse_*` method per
//! production, single-token lookahead throughout. The grammar, informally:
//!
//! ```text
//! module        := NL* definition* EOF
//! definition    := 'transform' NAME '{' NL* rule_block* '}' NL*
//! rule_block    := 'headers' block | 'values' block      ('aliases' reserved)
//! header_rule   := header '->' execution NL*
//! value_rule    := rvalue '->' execution NL*
//! header        := STRING | NAME | PATTERN
//! rvalue        := NAME | STRING | NUMBER | PATTERN | '[' header ']'
//! execution     := '{' NL* ('|'? operation (NL+ | '|'))* '}'   (multi-line)
//!                | '|'? operation ('|' operation)*             (single-line)
//! operation     := map | literal
//! map           := NAME rvalue{num_args of NAME}
//! ```
//!
//! Two things make the grammar pleasant to parse by hand:
//!
//! - A pipeline's form is decided by the single token after `->`: `{` means
//!   multi-line, anything else single-line.
//! - A single-line pipeline self-terminates at the first token that is not
//!   `|`, so rules may sit on one line with no separator between them.
//!
//! Map invocations are resolved against the primitive registry *during*
//! parsing: an unknown name is a syntax error, and the registry's declared
//! arity tells the parser exactly how many rvalues to consume. This is what
//! makes `replace 'A' 'D'  'B' -> 'BB'` unambiguous: `replace` takes two
//! arguments, so `'B'` starts the next rule.
//!
//! All errors here are fatal, in contrast to the semantic analyzer's
//! collected diagnostics.

pub mod ast;
pub mod ast_printer;
pub mod code_printer;
pub mod visit;

use tnlc_lex::{Lexer, Token, TokenKind};
use tnlc_util::SyntaxError;

use crate::ast::*;

/// Keywords of the surface language. Together with the built-in map names
/// they form the reserved set that cannot name a transform.
pub const KEYWORDS: [&str; 7] = [
    "transform",
    "test",
    "aliases",
    "headers",
    "values",
    "if",
    "else",
];

/// True if `name` is a keyword or a built-in map name.
pub fn is_reserved_name(name: &str) -> bool {
    KEYWORDS.contains(&name) || tnlc_map::is_builtin(name)
}

/// Lexes and parses `source` in one step.
pub fn parse_source(source: &str, file: &str) -> Result<Module, SyntaxError> {
    let tokens = Lexer::new(source, file).lex()?;
    Parser::new(tokens, file).parse()
}

/// Recursive-descent parser over a lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
    file: String,
    index: usize,
}

impl Parser {
    /// Creates a parser for `tokens`, reporting errors against `file`. The
    /// token stream must be EOF-terminated, as produced by the lexer.
    pub fn new(tokens: Vec<Token>, file: &str) -> Self {
        Self {
            tokens,
            file: file.to_string(),
            index: 0,
        }
    }

    /// Parses a whole module. Consumes the parser.
    pub fn parse(mut self) -> Result<Module, SyntaxError> {
        let module = self.parse_module()?;
        Ok(module)
    }

    // =========================================================================
    // TOKEN PLUMBING
    // =========================================================================

    fn cur(&self) -> &Token {
        &self.tokens[self.index]
    }

    fn cur_kind(&self) -> TokenKind {
        self.cur().kind
    }

    /// The current token's lexeme. Only called on kinds the lexer always
    /// attaches a lexeme to.
    fn cur_lexeme(&self) -> String {
        self.cur()
            .lexeme
            .clone()
            .expect("token kind always carries a lexeme")
    }

    fn eat(&mut self) -> Result<(), SyntaxError> {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
            Ok(())
        } else {
            Err(SyntaxError::new("Unexpected end of file.", &self.file))
        }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, &self.file)
    }

    fn error_expecting(&self, kinds: &[TokenKind]) -> SyntaxError {
        let found = self.cur();
        let message = if let [kind] = kinds {
            format!(
                "Expected token {}, but found {} at {}.",
                kind,
                found.kind,
                found.span
            )
        } else {
            let names: Vec<&str> = kinds.iter().map(|kind| kind.name()).collect();
            format!(
                "Expecting one of [{}], but found {} at {}.",
                names.join(", "),
                found.kind,
                found.span
            )
        };
        self.error(message)
    }

    fn expect(&self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.cur_kind() == kind {
            Ok(())
        } else {
            Err(self.error_expecting(&[kind]))
        }
    }

    fn expect_and_eat(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        self.expect(kind)?;
        self.eat()
    }

    fn eat_any_newlines(&mut self) -> Result<(), SyntaxError> {
        while self.cur_kind() == TokenKind::Newline {
            self.eat()?;
        }
        Ok(())
    }

    // =========================================================================
    // PRODUCTIONS
    // =========================================================================

    fn at_definition(&self) -> bool {
        self.cur_kind() == TokenKind::Name
            && matches!(self.cur().lexeme.as_deref(), Some("transform") | Some("test"))
    }

    fn parse_module(&mut self) -> Result<Module, SyntaxError> {
        let mut definitions = Vec::new();
        self.eat_any_newlines()?;
        while self.at_definition() {
            definitions.push(self.parse_definition()?);
            self.eat_any_newlines()?;
        }
        self.expect(TokenKind::Eof)?;
        Ok(Module { definitions })
    }

    fn parse_definition(&mut self) -> Result<Definition, SyntaxError> {
        if self.cur().lexeme.as_deref() == Some("transform") {
            Ok(Definition::Transform(self.parse_transform()?))
        } else {
            // `test` is reserved surface with no semantics yet; refuse it
            // loudly rather than guess.
            Err(self.error(format!(
                "test definitions are not yet supported (at {}).",
                self.cur().span
            )))
        }
    }

    fn parse_transform(&mut self) -> Result<Transform, SyntaxError> {
        self.expect_and_eat(TokenKind::Name)?; // 'transform'
        self.expect(TokenKind::Name)?;
        let name_token = self.cur().clone();
        let lexeme = self.cur_lexeme();
        if is_reserved_name(&lexeme) {
            return Err(self.error(format!(
                "Name {lexeme} is a reserved word and cannot be used as a Transform name."
            )));
        }
        self.eat()?;
        self.eat_any_newlines()?;
        self.expect_and_eat(TokenKind::LBracket)?;
        self.eat_any_newlines()?;
        let mut rule_blocks = Vec::new();
        while self.cur_kind() != TokenKind::RBracket {
            rule_blocks.push(self.parse_rule_block()?);
        }
        self.expect_and_eat(TokenKind::RBracket)?;
        self.eat_any_newlines()?;
        Ok(Transform {
            name: Name::new(lexeme, name_token.span),
            rule_blocks,
        })
    }

    fn parse_rule_block(&mut self) -> Result<RuleBlock, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let rule_kind = self.cur_lexeme();
        match rule_kind.as_str() {
            "headers" => Ok(RuleBlock::Header(self.parse_header_block()?)),
            "values" => Ok(RuleBlock::Value(self.parse_value_block()?)),
            "aliases" => Err(self.error(format!(
                "alias blocks are not yet supported (at {}).",
                self.cur().span
            ))),
            other => Err(self.error(format!(
                "Expected aliases, headers, or values, but found {other} at {}.",
                self.cur().span
            ))),
        }
    }

    fn parse_header_block(&mut self) -> Result<HeaderBlock, SyntaxError> {
        self.expect_and_eat(TokenKind::Name)?; // 'headers'
        self.eat_any_newlines()?;
        self.expect_and_eat(TokenKind::LBracket)?;
        self.eat_any_newlines()?;
        let mut header_rules = Vec::new();
        while self.cur_kind() != TokenKind::RBracket {
            header_rules.push(self.parse_header_rule()?);
        }
        self.expect_and_eat(TokenKind::RBracket)?;
        self.eat_any_newlines()?;
        Ok(HeaderBlock { header_rules })
    }

    fn parse_header_rule(&mut self) -> Result<HeaderRule, SyntaxError> {
        let header = self.parse_header()?;
        self.expect_and_eat(TokenKind::Arrow)?;
        let pipeline = self.parse_execution()?;
        self.eat_any_newlines()?;
        Ok(HeaderRule { header, pipeline })
    }

    fn parse_header(&mut self) -> Result<Header, SyntaxError> {
        match self.cur_kind() {
            TokenKind::String => Ok(Header::Str(self.parse_string()?)),
            TokenKind::Name => Ok(Header::Name(self.parse_name()?)),
            TokenKind::Pattern => Ok(Header::Pattern(self.parse_pattern()?)),
            _ => Err(self.error_expecting(&[
                TokenKind::String,
                TokenKind::Name,
                TokenKind::Pattern,
            ])),
        }
    }

    fn parse_value_block(&mut self) -> Result<ValueBlock, SyntaxError> {
        self.expect_and_eat(TokenKind::Name)?; // 'values'
        self.eat_any_newlines()?;
        self.expect_and_eat(TokenKind::LBracket)?;
        self.eat_any_newlines()?;
        let mut value_rules = Vec::new();
        while self.cur_kind() != TokenKind::RBracket {
            value_rules.push(self.parse_value_rule()?);
        }
        self.expect_and_eat(TokenKind::RBracket)?;
        self.eat_any_newlines()?;
        Ok(ValueBlock { value_rules })
    }

    fn parse_value_rule(&mut self) -> Result<ValueRule, SyntaxError> {
        let rvalue = self.parse_rvalue()?;
        self.expect_and_eat(TokenKind::Arrow)?;
        let pipeline = self.parse_execution()?;
        self.eat_any_newlines()?;
        Ok(ValueRule { rvalue, pipeline })
    }

    /// The pipeline after an arrow: `{` opens the multi-line form, anything
    /// else is single-line.
    fn parse_execution(&mut self) -> Result<Pipeline, SyntaxError> {
        let operations = if self.cur_kind() == TokenKind::LBracket {
            self.parse_multi_line_pipeline()?
        } else {
            self.parse_single_line_pipeline()?
        };
        Ok(Pipeline { operations })
    }

    fn parse_single_line_pipeline(&mut self) -> Result<Vec<Operation>, SyntaxError> {
        if self.cur_kind() == TokenKind::Pipe {
            self.eat()?;
        }
        let mut operations = vec![self.parse_operation()?];
        while self.cur_kind() == TokenKind::Pipe {
            self.eat()?;
            operations.push(self.parse_operation()?);
        }
        Ok(operations)
    }

    fn parse_multi_line_pipeline(&mut self) -> Result<Vec<Operation>, SyntaxError> {
        self.expect_and_eat(TokenKind::LBracket)?;
        self.eat_any_newlines()?;
        let mut operations = Vec::new();
        while self.cur_kind() != TokenKind::RBracket {
            operations.extend(self.parse_single_line_pipeline()?);
            self.eat_any_newlines()?;
        }
        self.expect_and_eat(TokenKind::RBracket)?;
        Ok(operations)
    }

    fn parse_operation(&mut self) -> Result<Operation, SyntaxError> {
        if self.cur_kind() == TokenKind::Name {
            match self.cur_lexeme().as_str() {
                "if" => Err(self.error(format!(
                    "conditionals are not yet supported (at {}).",
                    self.cur().span
                ))),
                "True" | "False" => {
                    let boolean = self.parse_boolean()?;
                    Ok(Operation::Expr(Expr::RValue(RValue::Literal(
                        Literal::Bool(boolean),
                    ))))
                }
                _ => Ok(Operation::Map(self.parse_map()?)),
            }
        } else {
            Ok(Operation::Expr(self.parse_expr()?))
        }
    }

    fn parse_map(&mut self) -> Result<Map, SyntaxError> {
        let name = self.parse_name()?;
        let Some(primitive) = tnlc_map::lookup(&name.data) else {
            return Err(self.error(format!("Unrecognized map '{}'.", name.data)));
        };
        let mut args = Vec::with_capacity(primitive.num_args);
        for _ in 0..primitive.num_args {
            args.push(self.parse_rvalue()?);
        }
        Ok(Map { name, args })
    }

    fn parse_rvalue(&mut self) -> Result<RValue, SyntaxError> {
        match self.cur_kind() {
            TokenKind::Name => match self.cur_lexeme().as_str() {
                "True" | "False" => Ok(RValue::Literal(Literal::Bool(self.parse_boolean()?))),
                _ => Ok(RValue::Name(self.parse_name()?)),
            },
            TokenKind::String => Ok(RValue::Literal(Literal::Str(self.parse_string()?))),
            TokenKind::Number => Ok(RValue::Literal(Literal::Number(self.parse_number()?))),
            TokenKind::Pattern => Ok(RValue::Literal(Literal::Pattern(self.parse_pattern()?))),
            TokenKind::LBrace => Ok(RValue::ColumnSelector(self.parse_column_selector()?)),
            _ => Err(self.error_expecting(&[
                TokenKind::Name,
                TokenKind::String,
                TokenKind::Number,
                TokenKind::Pattern,
                TokenKind::LBrace,
            ])),
        }
    }

    /// Literal expression in operation position. Operator expressions are
    /// reserved surface and not produced.
    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        match self.cur_kind() {
            TokenKind::Number => Ok(Expr::RValue(RValue::Literal(Literal::Number(
                self.parse_number()?,
            )))),
            TokenKind::String => Ok(Expr::RValue(RValue::Literal(Literal::Str(
                self.parse_string()?,
            )))),
            TokenKind::LBrace => Ok(Expr::RValue(RValue::ColumnSelector(
                self.parse_column_selector()?,
            ))),
            _ => Err(self.error_expecting(&[
                TokenKind::Number,
                TokenKind::String,
                TokenKind::LBrace,
            ])),
        }
    }

    fn parse_column_selector(&mut self) -> Result<ColumnSelector, SyntaxError> {
        self.expect_and_eat(TokenKind::LBrace)?;
        let header = self.parse_header()?;
        self.expect_and_eat(TokenKind::RBrace)?;
        Ok(ColumnSelector { header })
    }

    fn parse_string(&mut self) -> Result<StringLit, SyntaxError> {
        self.expect(TokenKind::String)?;
        let string = StringLit::new(self.cur_lexeme(), self.cur().span);
        self.eat()?;
        Ok(string)
    }

    fn parse_pattern(&mut self) -> Result<Pattern, SyntaxError> {
        self.expect(TokenKind::Pattern)?;
        let pattern = Pattern::new(self.cur_lexeme(), self.cur().span);
        self.eat()?;
        Ok(pattern)
    }

    fn parse_name(&mut self) -> Result<Name, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let name = Name::new(self.cur_lexeme(), self.cur().span);
        self.eat()?;
        Ok(name)
    }

    fn parse_boolean(&mut self) -> Result<BooleanLit, SyntaxError> {
        self.expect(TokenKind::Name)?;
        let data = self.cur_lexeme() == "True";
        let boolean = BooleanLit::new(data, self.cur().span);
        self.eat()?;
        Ok(boolean)
    }

    fn parse_number(&mut self) -> Result<NumberLit, SyntaxError> {
        self.expect(TokenKind::Number)?;
        let lexeme = self.cur_lexeme();
        let span = self.cur().span;
        let data: i64 = lexeme.parse().map_err(|_| {
            self.error(format!("Number literal '{lexeme}' is out of range at {span}."))
        })?;
        self.eat()?;
        Ok(NumberLit::new(data, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Module {
        parse_source(src, "test").expect("source should parse")
    }

    fn parse_err(src: &str) -> SyntaxError {
        parse_source(src, "test").expect_err("source should not parse")
    }

    fn only_transform(module: &Module) -> &Transform {
        match module.definitions.as_slice() {
            [Definition::Transform(transform)] => transform,
            other => panic!("expected one transform, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_module() {
        let module = parse("\n\n");
        assert!(module.definitions.is_empty());
    }

    #[test]
    fn test_minimal_transform() {
        let module = parse("transform T {\n}\n");
        let transform = only_transform(&module);
        assert_eq!(transform.name.data, "T");
        assert!(transform.rule_blocks.is_empty());
    }

    #[test]
    fn test_header_rules_one_per_line() {
        let module = parse(
            "transform T {\n    headers {\n        'a' -> 'AA'\n        'B' -> 'BB'\n    }\n}\n",
        );
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert_eq!(block.header_rules.len(), 2);
        assert_eq!(
            block.header_rules[0].header,
            Header::Str(StringLit::new("a", tnlc_util::Span::DUMMY))
        );
    }

    #[test]
    fn test_several_rules_on_one_line() {
        // Map arity bounds each pipeline, so rules need no separator.
        let module = parse(
            "transform Test {\n  headers { 'a' -> 'AA' | replace 'A' 'D'  'B' -> 'BB'  'C' -> 'CC' }\n}\n",
        );
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert_eq!(block.header_rules.len(), 3);
        assert_eq!(block.header_rules[0].pipeline.operations.len(), 2);
        assert_eq!(block.header_rules[1].pipeline.operations.len(), 1);
    }

    #[test]
    fn test_multi_line_pipeline() {
        let module = parse(
            "transform T {\n  values {\n    ['CC'] -> {\n      | replace '  ' ' '\n      | trim\n    }\n  }\n}\n",
        );
        let transform = only_transform(&module);
        let RuleBlock::Value(block) = &transform.rule_blocks[0] else {
            panic!("expected value block");
        };
        let pipeline = &block.value_rules[0].pipeline;
        assert_eq!(pipeline.operations.len(), 2);
        assert!(matches!(pipeline.operations[1], Operation::Map(_)));
    }

    #[test]
    fn test_map_arity_law() {
        let module = parse("transform T {\n  headers { 'a' -> replace 'x' 'y' | trim }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        for operation in &block.header_rules[0].pipeline.operations {
            let Operation::Map(map) = operation else {
                panic!("expected map operations");
            };
            let primitive = tnlc_map::lookup(&map.name.data).expect("map is registered");
            assert_eq!(map.args.len(), primitive.num_args);
        }
    }

    #[test]
    fn test_unrecognized_map() {
        let err = parse_err("transform T {\n  headers {\n    'hello' -> hello 'world'\n  }\n}\n");
        assert!(err.message.contains("Unrecognized map 'hello'."), "{err}");
    }

    #[test]
    fn test_reserved_transform_name() {
        let err = parse_err("transform values {\n}\n");
        assert!(err.message.contains("reserved word"), "{err}");

        let err = parse_err("transform trim {\n}\n");
        assert!(err.message.contains("reserved word"), "{err}");
    }

    #[test]
    fn test_column_selector_rvalue() {
        let module = parse("transform T {\n  values { ['DD'] -> add 1 }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Value(block) = &transform.rule_blocks[0] else {
            panic!("expected value block");
        };
        let RValue::ColumnSelector(selector) = &block.value_rules[0].rvalue else {
            panic!("expected column selector");
        };
        assert!(matches!(&selector.header, Header::Str(s) if s.data == "DD"));
    }

    #[test]
    fn test_pattern_selector() {
        let module = parse("transform T {\n  values { [/.*planet.*/] -> format 'hello {}' }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Value(block) = &transform.rule_blocks[0] else {
            panic!("expected value block");
        };
        let RValue::ColumnSelector(selector) = &block.value_rules[0].rvalue else {
            panic!("expected column selector");
        };
        assert!(matches!(&selector.header, Header::Pattern(p) if p.data == ".*planet.*"));
    }

    #[test]
    fn test_pattern_header_rule() {
        let module = parse("transform T {\n  headers { /b|d/ -> upper }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert!(matches!(&block.header_rules[0].header, Header::Pattern(p) if p.data == "b|d"));
    }

    #[test]
    fn test_true_false_promoted_to_boolean() {
        let module = parse("transform T {\n  values {\n    ['a'] -> True\n    ['b'] -> False\n  }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Value(block) = &transform.rule_blocks[0] else {
            panic!("expected value block");
        };
        let op = &block.value_rules[0].pipeline.operations[0];
        assert!(matches!(
            op,
            Operation::Expr(Expr::RValue(RValue::Literal(Literal::Bool(b)))) if b.data
        ));
    }

    #[test]
    fn test_number_literal_operation() {
        let module = parse("transform T {\n  values { ['BB'] -> 999 }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Value(block) = &transform.rule_blocks[0] else {
            panic!("expected value block");
        };
        let op = &block.value_rules[0].pipeline.operations[0];
        assert!(matches!(
            op,
            Operation::Expr(Expr::RValue(RValue::Literal(Literal::Number(n)))) if n.data == 999
        ));
    }

    #[test]
    fn test_test_definition_rejected() {
        let err = parse_err("test T {\n}\n");
        assert!(err.message.contains("not yet supported"), "{err}");
    }

    #[test]
    fn test_alias_block_rejected() {
        let err = parse_err("transform T {\n  aliases {\n  }\n}\n");
        assert!(err.message.contains("not yet supported"), "{err}");
    }

    #[test]
    fn test_conditional_rejected() {
        let err = parse_err("transform T {\n  values { ['a'] -> if }\n}\n");
        assert!(err.message.contains("conditionals"), "{err}");
    }

    #[test]
    fn test_unexpected_token_message_carries_location() {
        let err = parse_err("transform T {\n  headers { 'a' 'b' }\n}\n");
        assert!(err.message.contains("Expected token ARROW"), "{err}");
        assert!(err.message.contains("(2, 17)"), "{err}");
    }

    #[test]
    fn test_invalid_token_surfaces_at_parse_time() {
        let err = parse_err("transform T ; {\n}\n");
        assert!(err.message.contains("INVALID"), "{err}");
    }

    #[test]
    fn test_missing_closing_brace_is_eof_error() {
        let err = parse_err("transform T {\n  headers {\n");
        assert!(
            err.message.contains("Unexpected end of file")
                || err.message.contains("EOF"),
            "{err}"
        );
    }

    #[test]
    fn test_comment_lines_are_transparent() {
        let module = parse(
            "transform T {\n  headers {\n    # explain the next rule\n    'a' -> trim\n  }\n}\n",
        );
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert_eq!(block.header_rules.len(), 1);
    }

    #[test]
    fn test_division_is_not_an_operation() {
        let err = parse_err("transform T {\n  values { ['a'] -> 1/2 }\n}\n");
        // `1/2` lexes as NUMBER DIV NUMBER; the stray DIV fails rvalue parsing.
        assert!(err.message.contains("DIV"), "{err}");
    }

    #[test]
    fn test_name_rvalue_and_header() {
        let module = parse("transform T {\n  headers { col -> trim }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert!(matches!(&block.header_rules[0].header, Header::Name(n) if n.data == "col"));
    }

    #[test]
    fn test_leading_pipe_on_single_line() {
        let module = parse("transform T {\n  headers { 'a' -> | trim }\n}\n");
        let transform = only_transform(&module);
        let RuleBlock::Header(block) = &transform.rule_blocks[0] else {
            panic!("expected header block");
        };
        assert_eq!(block.header_rules[0].pipeline.operations.len(), 1);
    }

    #[test]
    fn test_two_transforms() {
        let module = parse("transform A {\n}\ntransform B {\n}\n");
        assert_eq!(module.definitions.len(), 2);
    }
}
