//! Parse a small snippet and print the resulting CST as an indented
//! tree, one line per node: `RuleName` for non-terminals, `TokenKind
//! "value"` for leaves.
//!
//! Run with `cargo run --example parse_source`.

use rd_cst_parser::cst::{CstNode, NodeKind};
use rd_cst_parser::parse_source;

const SOURCE: &str = r#"
let total = 1 + 2 * 3;
let point = { x() { return 1; }, y };
point.x()[0];
"#;

fn main() {
    match parse_source(SOURCE, None) {
        Ok((cst, diagnostics)) => {
            print_tree(&cst, 0);
            if diagnostics.is_empty() {
                println!("\nno diagnostics");
            } else {
                println!("\n{} diagnostic(s):", diagnostics.len());
                for diagnostic in &diagnostics {
                    println!("  - {}", diagnostic.message);
                }
            }
        }
        Err(err) => eprintln!("parse failed: {err}"),
    }
}

fn print_tree(node: &CstNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.name() {
        NodeKind::Token(kind) => {
            println!("{indent}{:?} {:?}", kind, node.value().unwrap_or_default());
        }
        NodeKind::Error => {
            println!("{indent}ErrorNode {:?}", node.value().unwrap_or_default());
        }
        NodeKind::Rule(kind) => {
            println!("{indent}{:?}", kind);
            for child in node.children() {
                print_tree(child, depth + 1);
            }
        }
        NodeKind::Root => unreachable!("parse() never returns the synthetic root"),
    }
}
