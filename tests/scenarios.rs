//! End-to-end scenarios exercising each piece of the engine through the
//! ECMAScript-subset grammar: an empty module, a single declaration, the
//! object-literal method/identifier ambiguity, clean `Option`
//! backtracking, fault-tolerant recovery, and a left-recursive
//! member/call chain parsed without any actual recursion on the left.

use pretty_assertions::assert_eq;
use rd_cst_parser::cst::{CstNode, NodeKind, RuleKind};
use rd_cst_parser::token::TokenKind;
use rd_cst_parser::parse_source;

fn child<'a>(node: &'a CstNode, rule: RuleKind) -> &'a CstNode {
    node.find_child_by_name(rule)
        .unwrap_or_else(|| panic!("expected a {rule:?} child, got {node:#?}"))
}

fn terminal_value<'a>(node: &'a CstNode, kind: TokenKind) -> &'a str {
    node.find_child_by_name(kind)
        .unwrap_or_else(|| panic!("expected a {kind:?} terminal, got {node:#?}"))
        .value()
        .expect("terminal nodes always carry a value")
}

#[test]
fn empty_module_has_an_empty_item_list() {
    let (program, diagnostics) = parse_source("", None).unwrap();
    assert_eq!(program.name(), NodeKind::Rule(RuleKind::Program));
    assert!(diagnostics.is_empty());

    let items = child(&program, RuleKind::ModuleItemList);
    assert!(items.children().is_empty());
    assert!(items.loc().is_none());
}

#[test]
fn single_variable_declaration() {
    let (program, diagnostics) = parse_source("let x = 1;", None).unwrap();
    assert!(diagnostics.is_empty());

    let items = child(&program, RuleKind::ModuleItemList);
    assert_eq!(items.children().len(), 1);

    let item = &items.children()[0];
    assert_eq!(item.name(), NodeKind::Rule(RuleKind::StatementListItem));

    let statement = child(item, RuleKind::Statement);
    let declaration = child(statement, RuleKind::VariableDeclaration);

    let keyword = child(declaration, RuleKind::VariableLetOrConst);
    assert_eq!(terminal_value(keyword, TokenKind::Let), "let");

    let list = child(declaration, RuleKind::VariableDeclarationList);
    assert_eq!(list.children().len(), 1);

    let declarator = child(list, RuleKind::VariableDeclarator);
    let binding = child(declarator, RuleKind::BindingIdentifier);
    assert_eq!(terminal_value(binding, TokenKind::Identifier), "x");

    let initializer = child(declarator, RuleKind::Initializer);
    let assignment = child(initializer, RuleKind::AssignmentExpression);
    assert!(assignment.loc().is_some());

    declaration
        .find_child_by_name(TokenKind::Semicolon)
        .expect("declaration is terminated by `;`");
}

#[test]
fn object_literal_method_definition_resolves_before_identifier_reference() {
    let (program, diagnostics) = parse_source("({ m() {} });", None).unwrap();
    assert!(diagnostics.is_empty());

    let items = child(&program, RuleKind::ModuleItemList);
    let statement = child(&items.children()[0], RuleKind::Statement);
    let expr_stmt = child(statement, RuleKind::ExpressionStatement);

    // Walk down the precedence ladder to the parenthesized object literal.
    let mut cursor = child(expr_stmt, RuleKind::AssignmentExpression);
    for rule in [
        RuleKind::ConditionalExpression,
        RuleKind::LogicalOrExpression,
        RuleKind::LogicalAndExpression,
        RuleKind::EqualityExpression,
        RuleKind::RelationalExpression,
        RuleKind::AdditiveExpression,
        RuleKind::MultiplicativeExpression,
        RuleKind::UnaryExpression,
        RuleKind::PostfixExpression,
        RuleKind::LeftHandSideExpression,
        RuleKind::MemberExpression,
        RuleKind::PrimaryExpression,
        RuleKind::ParenthesizedExpression,
        RuleKind::AssignmentExpression,
        RuleKind::ConditionalExpression,
        RuleKind::LogicalOrExpression,
        RuleKind::LogicalAndExpression,
        RuleKind::EqualityExpression,
        RuleKind::RelationalExpression,
        RuleKind::AdditiveExpression,
        RuleKind::MultiplicativeExpression,
        RuleKind::UnaryExpression,
        RuleKind::PostfixExpression,
        RuleKind::LeftHandSideExpression,
        RuleKind::MemberExpression,
        RuleKind::PrimaryExpression,
        RuleKind::ObjectLiteral,
    ] {
        cursor = child(cursor, rule);
    }
    let object_literal = cursor;

    let property = child(object_literal, RuleKind::PropertyDefinition);
    // The ambiguity is resolved in favor of `MethodDefinition`, never
    // falling back to a shorthand `IdentifierReference`.
    let method = child(property, RuleKind::MethodDefinition);
    assert!(property.find_child_by_name(RuleKind::IdentifierReference).is_none());
    assert_eq!(terminal_value(method, TokenKind::Identifier), "m");
}

#[test]
fn postfix_expression_backtracks_cleanly_without_a_trailing_operator() {
    let (program, diagnostics) = parse_source("a;", None).unwrap();
    assert!(diagnostics.is_empty());

    let items = child(&program, RuleKind::ModuleItemList);
    let statement = child(&items.children()[0], RuleKind::Statement);
    let expr_stmt = child(statement, RuleKind::ExpressionStatement);
    let assignment = child(expr_stmt, RuleKind::AssignmentExpression);
    let mut cursor = assignment;
    for rule in [
        RuleKind::ConditionalExpression,
        RuleKind::LogicalOrExpression,
        RuleKind::LogicalAndExpression,
        RuleKind::EqualityExpression,
        RuleKind::RelationalExpression,
        RuleKind::AdditiveExpression,
        RuleKind::MultiplicativeExpression,
        RuleKind::UnaryExpression,
        RuleKind::PostfixExpression,
    ] {
        cursor = child(cursor, rule);
    }
    let postfix = cursor;

    // `Option`'s lookahead for `++`/`--` failed and rolled all the way
    // back: the only child is the left-hand-side expression itself.
    assert_eq!(postfix.children().len(), 1);
    assert_eq!(
        postfix.children()[0].name(),
        NodeKind::Rule(RuleKind::LeftHandSideExpression)
    );
}

#[test]
fn fault_tolerant_recovery_skips_malformed_tokens_and_resumes() {
    let (program, diagnostics) = parse_source("let ; let y = 2;", None).unwrap();
    assert_eq!(diagnostics.len(), 2);

    let items = child(&program, RuleKind::ModuleItemList);
    assert_eq!(items.children().len(), 3);

    assert_eq!(items.children()[0].name(), NodeKind::Error);
    assert_eq!(items.children()[0].value(), Some("let"));
    assert_eq!(items.children()[1].name(), NodeKind::Error);
    assert_eq!(items.children()[1].value(), Some(";"));

    let recovered = &items.children()[2];
    assert_eq!(recovered.name(), NodeKind::Rule(RuleKind::StatementListItem));
    let statement = child(recovered, RuleKind::Statement);
    let declaration = child(statement, RuleKind::VariableDeclaration);
    let list = child(declaration, RuleKind::VariableDeclarationList);
    let declarator = child(list, RuleKind::VariableDeclarator);
    let binding = child(declarator, RuleKind::BindingIdentifier);
    assert_eq!(terminal_value(binding, TokenKind::Identifier), "y");
}

#[test]
fn left_recursive_member_and_call_chain() {
    let (program, diagnostics) = parse_source("a.b.c()[0];", None).unwrap();
    assert!(diagnostics.is_empty());

    let items = child(&program, RuleKind::ModuleItemList);
    let statement = child(&items.children()[0], RuleKind::Statement);
    let expr_stmt = child(statement, RuleKind::ExpressionStatement);
    let assignment = child(expr_stmt, RuleKind::AssignmentExpression);
    let mut cursor = assignment;
    for rule in [
        RuleKind::ConditionalExpression,
        RuleKind::LogicalOrExpression,
        RuleKind::LogicalAndExpression,
        RuleKind::EqualityExpression,
        RuleKind::RelationalExpression,
        RuleKind::AdditiveExpression,
        RuleKind::MultiplicativeExpression,
        RuleKind::UnaryExpression,
        RuleKind::PostfixExpression,
        RuleKind::LeftHandSideExpression,
    ] {
        cursor = child(cursor, rule);
    }
    let lhs = cursor;

    let call = child(lhs, RuleKind::CallExpression);
    assert!(
        lhs.find_child_by_name(RuleKind::MemberExpression).is_none(),
        "CallExpression alternative must win outright, not coexist with MemberExpression"
    );

    let member = child(call, RuleKind::MemberExpression);
    let dots: Vec<_> = member.find_children_by_name(TokenKind::Dot).collect();
    assert_eq!(dots.len(), 2);

    let primary = child(member, RuleKind::PrimaryExpression);
    let identifier_ref = child(primary, RuleKind::IdentifierReference);
    assert_eq!(terminal_value(identifier_ref, TokenKind::Identifier), "a");

    let suffix_idents: Vec<_> = member
        .children()
        .iter()
        .filter(|c| c.name() == NodeKind::Token(TokenKind::Identifier))
        .map(|c| c.value().unwrap())
        .collect();
    assert_eq!(suffix_idents, vec!["b", "c"]);

    let arguments = call
        .find_child_by_name(RuleKind::Arguments)
        .expect("call chain includes an empty argument list");
    assert!(arguments.children().is_empty());

    let bracket = call
        .find_child_by_name(RuleKind::BracketExpression)
        .expect("call chain includes a trailing index");
    let index = child(bracket, RuleKind::AssignmentExpression);
    assert!(index.loc().is_some());
}
