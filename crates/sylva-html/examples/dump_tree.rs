//! Example: Dump the parse tree of a file with source offsets
//!
//! ```text
//! cargo run -p sylva-html --example dump_tree -- page.html
//! RUST_LOG=sylva_html=debug cargo run -p sylva-html --example dump_tree -- '<p>inline markup'
//! ```

use anyhow::Context;
use sylva_html::{Node, ParseOptions, parse_with_options};
use tracing_subscriber::EnvFilter;

fn dump(node: Node<'_>, depth: usize) {
    println!("{:>6}  {}{}", node.offset(), "  ".repeat(depth), node);
    if let Ok(children) = node.children() {
        for child in children {
            dump(child, depth + 1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .context("usage: dump_tree <file or markup>")?;
    let html = match std::fs::read(&input) {
        Ok(bytes) => bytes,
        Err(_) => input.into_bytes(),
    };

    let options = ParseOptions {
        replace_invalid_utf8: true,
        ..ParseOptions::default()
    };
    let output = parse_with_options(&html, options)?;

    dump(output.document(), 0);
    for issue in output.errors() {
        tracing::warn!("{}", issue);
    }
    Ok(())
}
