//! tnlc-sem - Static validation of parsed modules.
//!
//! ============================================================================
//! OVERVIEW
//! ============================================================================
//!
//! The semantic analyzer walks a parsed module and collects everything that
//! is syntactically fine but cannot work at run time:
//!
//! - regex literals that do not compile, and
//! - `format` maps whose format string is malformed.
//!
//! Unlike the parser, nothing here aborts: every finding is collected into a
//! list of [`SemanticError`]s and returned to the caller, who decides
//! whether to proceed. An empty list means the module passed.

use tnlc_par::ast::{Map, Module, Pattern};
use tnlc_par::visit::{walk_map, Visitor};
use tnlc_util::fmt::validate_format_string;
use tnlc_util::SemanticError;

/// Analyzes `module` and returns all findings, in source order.
pub fn analyze(module: &Module) -> Vec<SemanticError> {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.visit_module(module);
    analyzer.errors
}

/// The collecting visitor behind [`analyze`].
pub struct SemanticAnalyzer {
    errors: Vec<SemanticError>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for SemanticAnalyzer {
    /// Every pattern literal must compile. The compiled regex is memoized on
    /// the node, so a pattern that passes here is free at execution time.
    fn visit_pattern(&mut self, pattern: &Pattern) {
        if pattern.compiled().is_err() {
            self.errors.push(SemanticError::new(format!(
                "Invalid regex pattern /{}/",
                pattern.data
            )));
        }
    }

    /// A `format` map whose first argument is a string literal gets its
    /// format string checked against a dummy positional substitution.
    /// Non-literal arguments cannot be checked statically and are left to
    /// run time.
    fn visit_map(&mut self, map: &Map) {
        if map.name.data == "format" {
            if let Some(fmt) = map.args.first().and_then(string_literal) {
                if let Err(reason) = validate_format_string(fmt) {
                    self.errors.push(SemanticError::new(format!(
                        "Invalid format string ({reason})"
                    )));
                }
            }
        }
        walk_map(self, map);
    }
}

fn string_literal(rvalue: &tnlc_par::ast::RValue) -> Option<&str> {
    use tnlc_par::ast::{Literal, RValue};
    match rvalue {
        RValue::Literal(Literal::Str(string)) => Some(&string.data),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tnlc_par::parse_source;

    fn analyze_src(src: &str) -> Vec<SemanticError> {
        let module = parse_source(src, "test").expect("source should parse");
        analyze(&module)
    }

    #[test]
    fn test_clean_module_has_no_findings() {
        let errors = analyze_src(
            "transform T {\n  headers {\n    /b|d/ -> upper\n    'a' -> format 'x {}'\n  }\n}\n",
        );
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_invalid_pattern_yields_one_finding() {
        let errors = analyze_src("transform T {\n  headers {\n    /*/ -> 'world'\n  }\n}\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Invalid regex pattern /*/.");
    }

    #[test]
    fn test_invalid_format_string_yields_one_finding() {
        let errors =
            analyze_src("transform T {\n  headers {\n    'hello' -> format ' {planet'\n  }\n}\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Invalid format string (expected '}' before end of string)."
        );
    }

    #[test]
    fn test_pattern_in_column_selector_is_checked() {
        let errors = analyze_src("transform T {\n  values {\n    [/+/] -> trim\n  }\n}\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Invalid regex pattern /+/"));
    }

    #[test]
    fn test_multiple_findings_collected_in_order() {
        let errors = analyze_src(
            "transform T {\n  headers {\n    /*/ -> trim\n    'a' -> format '}'\n  }\n}\n",
        );
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("Invalid regex pattern"));
        assert!(errors[1].message.contains("Invalid format string"));
    }

    #[test]
    fn test_every_accepted_pattern_is_accepted_or_flagged_once() {
        // One pattern, at most one finding about it.
        for pattern in ["b|d", "*", "(", "[a-z]+"] {
            let src = format!("transform T {{\n  headers {{\n    /{pattern}/ -> trim\n  }}\n}}\n");
            let errors = analyze_src(&src);
            assert!(errors.len() <= 1, "pattern {pattern}: {errors:?}");
        }
    }
}
