//! Normalization of expressions into conjunctive normal form.

use crate::syntax::Expr;

/// A disjunction of literals.
type Disjunction = Vec<Expr>;

/// Convert an expression into conjunctive normal form.
///
/// Implications and biconditionals are eliminated, negations pushed down to
/// symbols, and disjunction distributed over conjunction. Duplicate literals
/// within a disjunction and duplicate disjunctions are dropped; operand order
/// otherwise follows the input. A bare symbol comes back unchanged.
pub fn to_cnf(expr: &Expr) -> Expr {
    let conjuncts = clauses(expr, false)
        .into_iter()
        .filter_map(Expr::any)
        .fold(Vec::new(), |mut acc: Vec<Expr>, e| {
            if !acc.contains(&e) {
                acc.push(e);
            }
            acc
        });
    Expr::all(conjuncts).unwrap_or_else(|| expr.clone())
}

/// Clause set of `expr`, or of its negation when `negated` is set.
fn clauses(expr: &Expr, negated: bool) -> Vec<Disjunction> {
    match expr {
        Expr::Symbol(_) => {
            let literal = if negated {
                Expr::negation(expr.clone())
            } else {
                expr.clone()
            };
            vec![vec![literal]]
        }
        Expr::Not(inner) => clauses(inner, !negated),
        Expr::And(items) if !negated => items.iter().flat_map(|i| clauses(i, false)).collect(),
        Expr::And(items) => product_all(items.iter().map(|i| clauses(i, true))),
        Expr::Or(items) if !negated => product_all(items.iter().map(|i| clauses(i, false))),
        Expr::Or(items) => items.iter().flat_map(|i| clauses(i, true)).collect(),
        // p => c  is  ~p || c;  its negation is  p & ~c
        Expr::Implies(p, c) if !negated => product(&clauses(p, true), &clauses(c, false)),
        Expr::Implies(p, c) => {
            let mut out = clauses(p, false);
            out.extend(clauses(c, true));
            out
        }
        // l <=> r  is  (~l || r) & (l || ~r);  its negation is  (l || r) & (~l || ~r)
        Expr::Equivalent(l, r) => {
            let mut out = product(&clauses(l, !negated), &clauses(r, false));
            out.extend(product(&clauses(l, negated), &clauses(r, true)));
            out
        }
    }
}

fn product_all(mut sets: impl Iterator<Item = Vec<Disjunction>>) -> Vec<Disjunction> {
    let first = sets.next().unwrap_or_default();
    sets.fold(first, |acc, next| product(&acc, &next))
}

/// Pairwise union of two clause sets: `(A1 & A2) || (B1 & B2)` gives
/// `(A1 || B1) & (A1 || B2) & (A2 || B1) & (A2 || B2)`.
fn product(left: &[Disjunction], right: &[Disjunction]) -> Vec<Disjunction> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for a in left {
        for b in right {
            let mut merged = a.clone();
            for lit in b {
                if !merged.contains(lit) {
                    merged.push(lit.clone());
                }
            }
            out.push(merged);
        }
    }
    out
}
