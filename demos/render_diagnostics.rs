//! Render the recoverable [`rd_cst_parser::error::Diagnostic`]s
//! `FaultToleranceMany` collects alongside an otherwise-successful parse,
//! through `miette`, the way `apollo-parser`'s own `miette.rs` example
//! renders its parser errors.
//!
//! Run with `cargo run --example render_diagnostics`.

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use rd_cst_parser::parse_source;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("{message}")]
#[diagnostic(code("rd-cst-parser parsing error"))]
struct UnexpectedToken {
    message: String,
    #[source_code]
    src: NamedSource,
    #[label("here")]
    span: SourceSpan,
}

const SOURCE: &str = "let ; let y = 2;";

fn main() {
    match parse_source(SOURCE, None) {
        Ok((_, diagnostics)) => {
            for diagnostic in diagnostics {
                let offset = byte_offset(SOURCE, diagnostic.at.start.line, diagnostic.at.start.column);
                let report = Report::new(UnexpectedToken {
                    message: diagnostic.message,
                    src: NamedSource::new("snippet.js", SOURCE.to_string()),
                    span: (offset, 1).into(),
                });
                println!("{report:?}");
            }
        }
        Err(err) => eprintln!("unexpected fatal error: {err}"),
    }
}

/// Translate a 1-based line/column into a byte offset, since
/// `rd_cst_parser::token::Position` tracks line/column rather than a raw
/// byte offset directly.
fn byte_offset(source: &str, line: u32, column: u32) -> usize {
    let mut offset = 0usize;
    for (idx, text) in source.lines().enumerate() {
        if idx as u32 + 1 == line {
            return offset + (column.saturating_sub(1)) as usize;
        }
        offset += text.len() + 1;
    }
    offset
}
