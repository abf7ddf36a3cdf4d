//! Query AST evaluation against node records.
//!
//! Evaluation is a pure tree walk: no state is shared between nodes, and no
//! error escapes to the caller. A term that cannot be evaluated (an invalid
//! regex pattern) simply does not match.

use super::ast::QueryAst;
use crate::graph::Node;
use regex::RegexBuilder;
use tracing::trace;

/// Evaluate a parsed query against a single node.
///
/// `None` (the empty query) matches every node.
pub fn evaluate(ast: Option<&QueryAst>, node: &Node) -> bool {
    match ast {
        None => true,
        Some(ast) => eval_ast(ast, node),
    }
}

fn eval_ast(ast: &QueryAst, node: &Node) -> bool {
    match ast {
        QueryAst::Term {
            field,
            value,
            is_regex,
        } => match_term(field, value, *is_regex, node),
        QueryAst::Not { operand } => !eval_ast(operand, node),
        QueryAst::And { left, right } => eval_ast(left, node) && eval_ast(right, node),
        QueryAst::Or { left, right } => eval_ast(left, node) || eval_ast(right, node),
    }
}

/// Resolve a field name to the node text it scopes over.
///
/// The field set is closed; anything unrecognized degrades to a name
/// search rather than erroring, so a typo in the query box narrows the
/// result instead of blanking the graph.
fn field_text<'a>(field: &str, node: &'a Node) -> &'a str {
    match field {
        "name" => node.name.as_deref().unwrap_or(""),
        "type" => node.node_type.as_str(),
        "path" | "filepath" => node.path().unwrap_or(""),
        _ => node.name.as_deref().unwrap_or(""),
    }
}

fn match_term(field: &str, value: &str, is_regex: bool, node: &Node) -> bool {
    let text = field_text(field, node);

    if is_regex {
        // Patterns are anchored at the start of the field text (and only
        // there), matched case-insensitively. An invalid pattern matches
        // nothing; other nodes evaluate unaffected. The raw pattern is
        // validated before wrapping: `^(?:...)` around an unbalanced
        // pattern such as `)(` would otherwise parse.
        if let Err(err) = RegexBuilder::new(value).build() {
            trace!(pattern = value, %err, "invalid regex in query term");
            return false;
        }
        let anchored = format!("^(?:{})", value);
        match RegexBuilder::new(&anchored).case_insensitive(true).build() {
            Ok(re) => re.is_match(text),
            Err(err) => {
                trace!(pattern = value, %err, "invalid regex in query term");
                false
            }
        }
    } else {
        text.to_lowercase().contains(&value.to_lowercase())
    }
}
