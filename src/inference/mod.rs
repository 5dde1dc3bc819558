//! Entailment algorithms: truth tables, forward chaining, backward chaining.

mod backward;
mod forward;
mod model;
mod outcome;
pub mod truth_table;

pub use backward::{backward_chain, BackwardResult};
pub use forward::{forward_chain, forward_closure, ForwardResult};
pub use model::{Model, ModelEnumerator};
pub use outcome::{Evidence, Method, Outcome};
pub use truth_table::TruthTableVerdict;

use crate::kb::KnowledgeBase;
use crate::syntax::Expr;

/// Run one method on a knowledge base and query.
///
/// Every call builds its own search state, so repeated calls on the same
/// input give identical outcomes.
pub fn entails(kb: &KnowledgeBase, query: &Expr, method: Method) -> Outcome {
    match method {
        Method::TruthTable => {
            let models = ModelEnumerator::new(kb.universe(query).to_vec());
            let verdict = truth_table::entails(kb, query, models);
            if verdict.entailed {
                Outcome {
                    method,
                    entailed: true,
                    evidence: Evidence::Models(verdict.models),
                }
            } else {
                Outcome::not_entailed(method)
            }
        }
        Method::ForwardChaining => {
            let result = forward_chain(kb, query);
            if result.entailed {
                Outcome {
                    method,
                    entailed: true,
                    evidence: Evidence::Trace(
                        result.trace.iter().map(|s| s.name().to_string()).collect(),
                    ),
                }
            } else {
                Outcome::not_entailed(method)
            }
        }
        Method::BackwardChaining => {
            let result = backward_chain(kb, query);
            if result.entailed {
                Outcome {
                    method,
                    entailed: true,
                    evidence: Evidence::Trace(result.path.iter().map(|e| e.to_string()).collect()),
                }
            } else {
                Outcome::not_entailed(method)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn test_all_methods_agree_on_chain() {
        let kb = KnowledgeBase::from_exprs(vec![
            Expr::implies(Expr::and(sym("a"), sym("b")), sym("c")),
            sym("a"),
            sym("b"),
        ]);
        for method in Method::ALL {
            assert!(entails(&kb, &sym("c"), method).entailed, "{} failed", method);
        }
    }

    #[test]
    fn test_negative_outcome_has_no_evidence() {
        let kb = KnowledgeBase::from_exprs(vec![sym("a")]);
        for method in Method::ALL {
            let outcome = entails(&kb, &sym("b"), method);
            assert_eq!(outcome, Outcome::not_entailed(method));
        }
    }
}
