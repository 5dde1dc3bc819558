//! Knowledge-base clauses: facts and implications.

use super::Expr;

/// One knowledge-base entry.
///
/// An implication `P => C` becomes a rule with premise `P` and conclusion
/// `C`. Any other formula (a bare symbol, a conjunction, a disjunction, ...)
/// is a fact: no premise, and the whole formula is the conclusion.
///
/// Examples (in the input syntax):
/// - Fact: `a`
/// - Rule: `a & b => c`
/// - Non-Horn fact: `a || b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    content: Expr,
    premise: Option<Expr>,
    conclusion: Expr,
}

impl Clause {
    /// Derive a clause from a parsed formula.
    pub fn new(content: Expr) -> Self {
        let (premise, conclusion) = match &content {
            Expr::Implies(p, c) => (Some((**p).clone()), (**c).clone()),
            other => (None, other.clone()),
        };
        Clause {
            content,
            premise,
            conclusion,
        }
    }

    /// The original formula; its truth is the clause's truth.
    pub fn content(&self) -> &Expr {
        &self.content
    }

    pub fn premise(&self) -> Option<&Expr> {
        self.premise.as_ref()
    }

    pub fn conclusion(&self) -> &Expr {
        &self.conclusion
    }

    pub fn is_fact(&self) -> bool {
        self.premise.is_none()
    }

    pub fn is_rule(&self) -> bool {
        self.premise.is_some()
    }

    /// Distinct premise conjuncts in listed order; empty for facts.
    ///
    /// A bare-symbol premise is a single conjunct.
    pub fn premise_conjuncts(&self) -> Vec<&Expr> {
        let mut out: Vec<&Expr> = Vec::new();
        if let Some(premise) = &self.premise {
            for c in premise.conjuncts() {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Whether this clause establishes `goal`: the conclusion is `goal`, or a
    /// conjunction with `goal` among its conjuncts.
    pub fn concludes(&self, goal: &Expr) -> bool {
        self.conclusion == *goal || self.conclusion.conjuncts().contains(&goal)
    }

    /// Check if this is a Horn clause: premise and conclusion are both a
    /// symbol or a conjunction of symbols.
    pub fn is_horn(&self) -> bool {
        let premise_ok = self
            .premise
            .as_ref()
            .map_or(true, |p| p.is_symbol_conjunction());
        premise_ok && self.conclusion.is_symbol_conjunction()
    }
}

impl From<Expr> for Clause {
    fn from(content: Expr) -> Self {
        Clause::new(content)
    }
}
