//! Abstract syntax tree for search queries
//!
//! Built once per query string, then evaluated once per node. The tree is
//! immutable and evaluation is a pure walk, so a parsed query can be cached
//! by the caller and reused across graph snapshots.

/// Boolean structure of a parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAst {
    /// A single match term, optionally field-scoped (`field:value`)
    Term {
        /// Lowercased field name; `"name"` when the query gave none
        field: String,
        /// Raw match text or regex pattern
        value: String,
        /// Whether `value` came from a `/pattern/` literal
        is_regex: bool,
    },

    /// `NOT expr`
    Not { operand: Box<QueryAst> },

    /// `left AND right`
    And {
        left: Box<QueryAst>,
        right: Box<QueryAst>,
    },

    /// `left OR right`
    Or {
        left: Box<QueryAst>,
        right: Box<QueryAst>,
    },
}

impl QueryAst {
    /// Plain name term (the default field)
    pub fn term(value: impl Into<String>) -> Self {
        QueryAst::Term {
            field: "name".to_string(),
            value: value.into(),
            is_regex: false,
        }
    }

    /// Field-scoped term
    pub fn field_term(field: impl Into<String>, value: impl Into<String>) -> Self {
        QueryAst::Term {
            field: field.into(),
            value: value.into(),
            is_regex: false,
        }
    }
}
