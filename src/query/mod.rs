//! Search query processing
//!
//! Implements the textual query mini-language used to narrow the graph:
//! - Field-scoped terms (`name:Foo`, `type:Class`, `path:src`)
//! - Regex literals (`/pattern/`, case-insensitive, start-anchored)
//! - Boolean composition (`AND` / `OR` / `NOT`, parentheses)
//!
//! Pipeline: raw string -> [`tokenize`] -> [`parse_query`] -> [`QueryAst`]
//! -> [`evaluate`] per node. Malformed queries never surface as errors to
//! the user: the [`filter`] entry point fails open and leaves the node set
//! untouched, so partial input while typing cannot blank the graph.

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use ast::QueryAst;
pub use eval::evaluate;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse_query, ParseError, ParseResult};

use crate::graph::Node;
use tracing::debug;

/// Filter nodes by a query string, failing open.
///
/// A parse error (or an empty query) returns the input unchanged, in input
/// order.
pub fn filter<'a>(nodes: &'a [Node], query: &str) -> Vec<&'a Node> {
    let ast = match parse_query(query) {
        Ok(ast) => ast,
        Err(err) => {
            debug!(query, %err, "query rejected, search filter disabled");
            return nodes.iter().collect();
        }
    };

    match ast {
        None => nodes.iter().collect(),
        Some(ast) => nodes
            .iter()
            .filter(|node| evaluate(Some(&ast), node))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new("a", "Class").with_name("TestFoo"),
            Node::new("b", "Interface").with_name("BarTest"),
            Node::new("c", "Class").with_name("Test"),
        ]
    }

    fn ids(filtered: &[&Node]) -> Vec<String> {
        filtered.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn test_empty_query_passes_through() {
        let nodes = nodes();
        let filtered = filter(&nodes, "");
        assert_eq!(ids(&filtered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_error_fails_open() {
        let nodes = nodes();
        let filtered = filter(&nodes, "((unterminated");
        assert_eq!(ids(&filtered), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_type_query() {
        let nodes = nodes();
        let filtered = filter(&nodes, "type:Class");
        assert_eq!(ids(&filtered), vec!["a", "c"]);
    }

    #[test]
    fn test_order_is_stable() {
        let nodes = nodes();
        let filtered = filter(&nodes, "test");
        assert_eq!(ids(&filtered), vec!["a", "b", "c"]);
    }
}
