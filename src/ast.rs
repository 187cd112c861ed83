//! CST-to-AST lowering (`SPEC_FULL.md` §6).
//!
//! The engine's job ends at a faithful CST; turning that CST into a
//! typed AST is a downstream concern left to whoever embeds the engine.
//! This module is a small worked example of that lowering, built purely
//! on the two read-only hooks `CstNode` exposes for it —
//! `find_child_by_name` and `find_children_by_name` — and not a full AST
//! for the grammar in `src/grammar`.

use crate::cst::{CstNode, RuleKind};
use crate::token::TokenKind;

/// The names bound by every top-level `let`/`const`/`var` declaration in
/// a parsed module, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub declared_names: Vec<String>,
}

impl Program {
    /// Lower a `Program` CST node (as returned by [`crate::parse`]) into
    /// its declared names. Declarations malformed enough to have been
    /// replaced by an `ErrorNode` during recovery simply contribute
    /// nothing, the same way they contribute no `VariableDeclaration`
    /// node to walk.
    pub fn lower(root: &CstNode) -> Program {
        let mut declared_names = Vec::new();
        if let Some(items) = root.find_child_by_name(RuleKind::ModuleItemList) {
            for item in items.find_children_by_name(RuleKind::StatementListItem) {
                collect_declared_names(item, &mut declared_names);
            }
        }
        Program { declared_names }
    }
}

fn collect_declared_names(item: &CstNode, out: &mut Vec<String>) {
    let Some(statement) = item.find_child_by_name(RuleKind::Statement) else {
        return;
    };
    let Some(declaration) = statement.find_child_by_name(RuleKind::VariableDeclaration) else {
        return;
    };
    let Some(list) = declaration.find_child_by_name(RuleKind::VariableDeclarationList) else {
        return;
    };
    for declarator in list.find_children_by_name(RuleKind::VariableDeclarator) {
        let Some(binding) = declarator.find_child_by_name(RuleKind::BindingIdentifier) else {
            continue;
        };
        if let Some(name) = binding
            .find_child_by_name(TokenKind::Identifier)
            .and_then(CstNode::value)
        {
            out.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    #[test]
    fn lowers_a_single_declaration() {
        let (cst, diagnostics) = parse_source("let x = 1;", None).unwrap();
        assert!(diagnostics.is_empty());
        let program = Program::lower(&cst);
        assert_eq!(program.declared_names, vec!["x".to_string()]);
    }

    #[test]
    fn skips_declarations_lost_to_recovery() {
        let (cst, diagnostics) = parse_source("let ; let y = 2;", None).unwrap();
        assert_eq!(diagnostics.len(), 2);
        let program = Program::lower(&cst);
        assert_eq!(program.declared_names, vec!["y".to_string()]);
    }

    #[test]
    fn multiple_declarators_in_one_statement() {
        let (cst, diagnostics) = parse_source("let a = 1, b = 2;", None).unwrap();
        assert!(diagnostics.is_empty());
        let program = Program::lower(&cst);
        assert_eq!(program.declared_names, vec!["a".to_string(), "b".to_string()]);
    }
}
