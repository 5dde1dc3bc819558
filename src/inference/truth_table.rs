//! Entailment by truth-table enumeration.

use log::{debug, warn};

use super::Model;
use crate::error::ModelFormationError;
use crate::kb::KnowledgeBase;
use crate::syntax::Expr;

/// Result of a truth-table check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTableVerdict {
    pub entailed: bool,
    /// Models in which both the knowledge base and the query hold.
    ///
    /// Zero with `entailed == true` means the knowledge base is
    /// unsatisfiable and the query holds vacuously.
    pub models: usize,
}

impl TruthTableVerdict {
    const REFUTED: TruthTableVerdict = TruthTableVerdict {
        entailed: false,
        models: 0,
    };
}

/// Decide whether `kb` entails `query` by checking every model.
///
/// A clause holds in a model when its full formula does, so an implication
/// clause is checked as an implication and not just by its conclusion. The
/// first model satisfying the knowledge base but not the query refutes
/// entailment. Accepts arbitrary propositional clauses.
pub fn entails<I>(kb: &KnowledgeBase, query: &Expr, models: I) -> TruthTableVerdict
where
    I: IntoIterator<Item = Model>,
{
    match count_models(kb, query, models) {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!("truth table: {}; treating query as not entailed", e);
            TruthTableVerdict::REFUTED
        }
    }
}

fn count_models<I>(
    kb: &KnowledgeBase,
    query: &Expr,
    models: I,
) -> Result<TruthTableVerdict, ModelFormationError>
where
    I: IntoIterator<Item = Model>,
{
    let mut count = 0;
    let mut checked = 0usize;
    for model in models {
        checked += 1;
        if !kb_holds(kb, &model)? {
            continue;
        }
        if !query.evaluate(&model)? {
            debug!("truth table: counterexample after {} models", checked);
            return Ok(TruthTableVerdict::REFUTED);
        }
        count += 1;
    }
    debug!(
        "truth table: {} of {} models satisfy knowledge base and query",
        count, checked
    );
    Ok(TruthTableVerdict {
        entailed: true,
        models: count,
    })
}

fn kb_holds(kb: &KnowledgeBase, model: &Model) -> Result<bool, ModelFormationError> {
    for clause in kb.clauses() {
        if !clause.content().evaluate(model)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::ModelEnumerator;
    use crate::syntax::Symbol;

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    fn check(kb: &KnowledgeBase, query: &Expr) -> TruthTableVerdict {
        let models = ModelEnumerator::new(kb.universe(query).to_vec());
        entails(kb, query, models)
    }

    #[test]
    fn test_fact_entails_itself() {
        let kb = KnowledgeBase::from_exprs(vec![sym("a")]);
        assert_eq!(
            check(&kb, &sym("a")),
            TruthTableVerdict {
                entailed: true,
                models: 1
            }
        );
    }

    #[test]
    fn test_unconstrained_symbol_not_entailed() {
        let kb = KnowledgeBase::from_exprs(vec![sym("a")]);
        assert_eq!(check(&kb, &sym("b")), TruthTableVerdict::REFUTED);
    }

    #[test]
    fn test_implication_clause_evaluated_as_whole() {
        // a => b alone does not make b true: a=false, b=false satisfies it.
        let kb = KnowledgeBase::from_exprs(vec![Expr::implies(sym("a"), sym("b"))]);
        assert!(!check(&kb, &sym("b")).entailed);
    }

    #[test]
    fn test_non_horn_reasoning() {
        // a || b, ~a  entails b
        let kb = KnowledgeBase::from_exprs(vec![
            Expr::or(sym("a"), sym("b")),
            Expr::negation(sym("a")),
        ]);
        let verdict = check(&kb, &sym("b"));
        assert!(verdict.entailed);
        assert_eq!(verdict.models, 1);
    }

    #[test]
    fn test_unsatisfiable_kb_entails_vacuously() {
        let kb = KnowledgeBase::from_exprs(vec![sym("a"), Expr::negation(sym("a"))]);
        assert_eq!(
            check(&kb, &sym("b")),
            TruthTableVerdict {
                entailed: true,
                models: 0
            }
        );
    }

    #[test]
    fn test_partial_models_fail_closed() {
        let kb = KnowledgeBase::from_exprs(vec![sym("a")]);
        let partial = ModelEnumerator::new(vec![Symbol::new("a")]);
        assert_eq!(entails(&kb, &sym("b"), partial), TruthTableVerdict::REFUTED);
    }
}
