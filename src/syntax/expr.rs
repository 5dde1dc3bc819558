//! Propositional expressions.

use std::fmt;

use indexmap::IndexSet;

use super::Symbol;
use crate::error::ModelFormationError;
use crate::inference::Model;

/// A propositional formula.
///
/// `And`/`Or` are n-ary and always hold at least two operands; the
/// constructors flatten nested operands of the same connective.
/// `Implies`/`Equivalent` are binary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Symbol(Symbol),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Equivalent(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    pub fn negation(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(flatten_and(vec![left, right]))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(flatten_or(vec![left, right]))
    }

    pub fn implies(premise: Expr, conclusion: Expr) -> Self {
        Expr::Implies(Box::new(premise), Box::new(conclusion))
    }

    pub fn equivalent(left: Expr, right: Expr) -> Self {
        Expr::Equivalent(Box::new(left), Box::new(right))
    }

    /// Conjunction of every item; `None` when there are no items.
    pub fn all(items: impl IntoIterator<Item = Expr>) -> Option<Self> {
        let mut items = flatten_and(items.into_iter().collect());
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Expr::And(items)),
        }
    }

    /// Disjunction of every item; `None` when there are no items.
    pub fn any(items: impl IntoIterator<Item = Expr>) -> Option<Self> {
        let mut items = flatten_or(items.into_iter().collect());
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Expr::Or(items)),
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Expr::Symbol(_))
    }

    /// Operands of a conjunction, or the expression itself.
    pub fn conjuncts(&self) -> Vec<&Expr> {
        match self {
            Expr::And(items) => items.iter().flat_map(|e| e.conjuncts()).collect(),
            other => vec![other],
        }
    }

    /// True for a symbol or a conjunction made only of symbols.
    pub fn is_symbol_conjunction(&self) -> bool {
        self.conjuncts().iter().all(|c| c.is_symbol())
    }

    /// Free symbols in first-appearance order.
    pub fn symbols(&self) -> IndexSet<Symbol> {
        let mut out = IndexSet::new();
        self.collect_symbols(&mut out);
        out
    }

    pub(crate) fn collect_symbols(&self, out: &mut IndexSet<Symbol>) {
        match self {
            Expr::Symbol(s) => {
                out.insert(s.clone());
            }
            Expr::Not(inner) => inner.collect_symbols(out),
            Expr::And(items) | Expr::Or(items) => {
                for item in items {
                    item.collect_symbols(out);
                }
            }
            Expr::Implies(l, r) | Expr::Equivalent(l, r) => {
                l.collect_symbols(out);
                r.collect_symbols(out);
            }
        }
    }

    /// Truth value under a model.
    ///
    /// Every symbol must be assigned; an unassigned symbol is reported instead
    /// of defaulting to a truth value.
    pub fn evaluate(&self, model: &Model) -> Result<bool, ModelFormationError> {
        Ok(match self {
            Expr::Symbol(s) => model.value(s).ok_or_else(|| ModelFormationError {
                symbol: s.clone(),
            })?,
            Expr::Not(inner) => !inner.evaluate(model)?,
            Expr::And(items) => {
                for item in items {
                    if !item.evaluate(model)? {
                        return Ok(false);
                    }
                }
                true
            }
            Expr::Or(items) => {
                for item in items {
                    if item.evaluate(model)? {
                        return Ok(true);
                    }
                }
                false
            }
            Expr::Implies(p, c) => !p.evaluate(model)? || c.evaluate(model)?,
            Expr::Equivalent(l, r) => l.evaluate(model)? == r.evaluate(model)?,
        })
    }
}

fn flatten_and(items: Vec<Expr>) -> Vec<Expr> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Expr::And(inner) => out.extend(inner),
            other => out.push(other),
        }
    }
    out
}

fn flatten_or(items: Vec<Expr>) -> Vec<Expr> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Expr::Or(inner) => out.extend(inner),
            other => out.push(other),
        }
    }
    out
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Not(inner) => {
                write!(f, "~")?;
                write_operand(f, inner)
            }
            Expr::And(items) => write_joined(f, items, " & "),
            Expr::Or(items) => write_joined(f, items, " || "),
            Expr::Implies(l, r) => {
                write_operand(f, l)?;
                write!(f, " => ")?;
                write_operand(f, r)
            }
            Expr::Equivalent(l, r) => {
                write_operand(f, l)?;
                write!(f, " <=> ")?;
                write_operand(f, r)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, e: &Expr) -> fmt::Result {
    match e {
        Expr::Symbol(_) | Expr::Not(_) => write!(f, "{}", e),
        _ => write!(f, "({})", e),
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write_operand(f, item)?;
    }
    Ok(())
}
