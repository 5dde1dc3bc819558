//! Parsed knowledge-source documents.

use crate::syntax::Expr;

/// A `TELL`/`ASK` document: the clause formulas in declaration order and
/// the query formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub clauses: Vec<Expr>,
    pub query: Expr,
}
