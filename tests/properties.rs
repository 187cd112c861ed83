//! Property-style checks for invariants the engine is supposed to hold
//! regardless of which grammar sits on top of it: span monotonicity,
//! terminal identity, determinism, guaranteed progress during recovery,
//! and fatal (non-recoverable) failures actually reaching the caller.

use rd_cst_parser::cst::CstNode;
use rd_cst_parser::error::ErrorKind;
use rd_cst_parser::lexer;
use rd_cst_parser::parse_source;

const SAMPLES: &[&str] = &[
    "",
    "let x = 1;",
    "let a = 1, b = 2;",
    "a.b.c()[0];",
    "let total = 1 + 2 * (3 - 4) / 5;",
    "let obj = { m() { return 1; }, shorthand };",
    "a ? b : c;",
];

#[test]
fn spans_are_monotonic_and_cover_their_children() {
    for source in SAMPLES {
        let (cst, _) = parse_source(source, None).unwrap();
        assert_span_covers_children(&cst);
    }
}

fn assert_span_covers_children(node: &CstNode) {
    if node.is_terminal() {
        return;
    }
    let mut last_index = None;
    for child in node.children() {
        if let Some(loc) = child.loc() {
            if let Some(prev) = last_index {
                assert!(
                    loc.index >= prev,
                    "children of {:?} are out of token order",
                    node.name()
                );
            }
            last_index = Some(loc.index);
        }
        assert_span_covers_children(child);
    }

    let first = node.children().iter().find_map(|c| c.loc());
    let last = node.children().iter().rev().find_map(|c| c.loc());
    match (first, last, node.loc()) {
        (Some(first), Some(last), Some(loc)) => {
            assert_eq!(loc.start, first.start, "{:?} span doesn't start at its first leaf", node.name());
            assert_eq!(loc.end, last.end, "{:?} span doesn't end at its last leaf", node.name());
        }
        (None, None, None) => {}
        other => panic!("{:?} has an inconsistent span: {:?}", node.name(), other),
    }
}

#[test]
fn terminal_leaves_match_the_token_stream_for_clean_input() {
    let source = "let total = a.b.c() + 1;";
    let (cst, diagnostics) = parse_source(source, None).unwrap();
    assert!(diagnostics.is_empty());

    let tokens = lexer::tokenize(source);
    let mut leaves = Vec::new();
    collect_terminals(&cst, &mut leaves);

    // Drop the trailing `Eof` sentinel; the grammar never matches it as
    // a leaf of its own.
    let expected: Vec<_> = tokens[..tokens.len() - 1]
        .iter()
        .map(|t| (t.kind, t.value.as_str()))
        .collect();
    assert_eq!(leaves, expected);
}

fn collect_terminals<'a>(node: &'a CstNode, out: &mut Vec<(rd_cst_parser::token::TokenKind, &'a str)>) {
    if let rd_cst_parser::cst::NodeKind::Token(kind) = node.name() {
        out.push((kind, node.value().unwrap_or_default()));
        return;
    }
    for child in node.children() {
        collect_terminals(child, out);
    }
}

#[test]
fn parsing_is_deterministic() {
    for source in SAMPLES {
        let (first, first_diagnostics) = parse_source(source, None).unwrap();
        let (second, second_diagnostics) = parse_source(source, None).unwrap();
        assert_eq!(first, second, "two parses of {source:?} produced different trees");
        assert_eq!(first_diagnostics, second_diagnostics);
    }
}

#[test]
fn fault_tolerant_recovery_always_terminates_and_reports_every_skip() {
    let source = ";;;;;;;;;;";
    let (cst, diagnostics) = parse_source(source, None).unwrap();
    assert_eq!(diagnostics.len(), 10);
    let items = cst
        .find_child_by_name(rd_cst_parser::cst::RuleKind::ModuleItemList)
        .unwrap();
    assert_eq!(items.children().len(), 10);
    assert!(items
        .children()
        .iter()
        .all(|c| c.name() == rd_cst_parser::cst::NodeKind::Error));
}

#[test]
fn recursion_limit_surfaces_as_a_fatal_error_with_a_location() {
    let source = format!("{}1{};", "(".repeat(64), ")".repeat(64));
    let tokens = lexer::tokenize(&source);
    let err = rd_cst_parser::parse(tokens, Some(20)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimitExceeded);
}
