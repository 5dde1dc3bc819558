//! The symbol universe of a knowledge base and query.

use indexmap::IndexSet;

use super::{Clause, Expr, Symbol};

/// Every symbol that appears in the clauses or the query.
///
/// Symbols are kept in first-appearance order (clauses first, then the
/// query) so that model enumeration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolUniverse {
    symbols: IndexSet<Symbol>,
}

impl SymbolUniverse {
    pub fn empty() -> Self {
        SymbolUniverse::default()
    }

    /// Collect symbols from clauses and a query.
    pub fn from_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>, query: &Expr) -> Self {
        let mut universe = SymbolUniverse::empty();
        for clause in clauses {
            universe.extend_from(clause.content());
        }
        universe.extend_from(query);
        universe
    }

    /// Merge the symbols of an expression into this universe.
    pub fn extend_from(&mut self, expr: &Expr) {
        expr.collect_symbols(&mut self.symbols);
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn to_vec(&self) -> Vec<Symbol> {
        self.symbols.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_covers_clauses_and_query() {
        let clauses = vec![
            Clause::new(Expr::implies(Expr::symbol("a"), Expr::symbol("b"))),
            Clause::new(Expr::symbol("a")),
        ];
        let universe = SymbolUniverse::from_clauses(&clauses, &Expr::symbol("q"));
        let names: Vec<&str> = universe.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["a", "b", "q"]);
    }

    #[test]
    fn test_universe_of_nothing_is_empty() {
        let universe = SymbolUniverse::empty();
        assert!(universe.is_empty());
        assert!(!universe.contains(&Symbol::new("a")));
    }
}
