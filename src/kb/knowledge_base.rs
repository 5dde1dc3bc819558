//! KnowledgeBase: an ordered list of clauses.

use crate::syntax::{Clause, Expr, SymbolUniverse};

/// An ordered sequence of clauses.
///
/// Declaration order matters: forward and backward chaining visit clauses in
/// this order, so ties go to the earliest-declared clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        KnowledgeBase {
            clauses: Vec::new(),
        }
    }

    /// Create a knowledge base from parsed clause formulas, one clause each.
    pub fn from_exprs(exprs: impl IntoIterator<Item = Expr>) -> Self {
        KnowledgeBase {
            clauses: exprs.into_iter().map(Clause::new).collect(),
        }
    }

    /// Add a clause to the knowledge base.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Get the clauses in declaration order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn facts(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|c| c.is_fact())
    }

    pub fn rules(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|c| c.is_rule())
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Symbols of every clause plus the query.
    pub fn universe(&self, query: &Expr) -> SymbolUniverse {
        SymbolUniverse::from_clauses(&self.clauses, query)
    }

    /// Check if every clause is a Horn clause.
    pub fn is_horn(&self) -> bool {
        self.clauses.iter().all(|c| c.is_horn())
    }
}

impl FromIterator<Clause> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        KnowledgeBase {
            clauses: iter.into_iter().collect(),
        }
    }
}
