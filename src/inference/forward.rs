//! Forward chaining over Horn clauses.

use std::collections::{HashMap, VecDeque};

use log::{debug, warn};

use crate::error::ModelFormationError;
use crate::kb::KnowledgeBase;
use crate::syntax::{Expr, Symbol, SymbolUniverse};

/// Result of a forward-chaining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResult {
    pub entailed: bool,
    /// Symbols in the order they were taken off the agenda. On failure this
    /// is everything the knowledge base proves.
    pub trace: Vec<Symbol>,
}

/// Decide whether `kb` entails `query` by forward chaining.
///
/// The query is a symbol or a conjunction of symbols; a conjunction is
/// entailed once every conjunct has been taken off the agenda. Any other
/// query runs the agenda to exhaustion and is not entailed.
///
/// Requires a Horn knowledge base; other clauses are ignored by the
/// propagation and a warning is logged.
pub fn forward_chain(kb: &KnowledgeBase, query: &Expr) -> ForwardResult {
    if !kb.is_horn() {
        warn!("forward chaining over a non-Horn knowledge base; result may be incomplete");
    }
    let universe = kb.universe(query);
    let targets = if query.is_symbol_conjunction() {
        let mut targets: Vec<Symbol> = Vec::new();
        for s in query.conjuncts().into_iter().filter_map(Expr::as_symbol) {
            if !targets.contains(s) {
                targets.push(s.clone());
            }
        }
        Some(targets)
    } else {
        debug!("forward chaining: query `{}` is not a conjunction of symbols", query);
        None
    };
    match ForwardChainer::new(kb, &universe).run(targets.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            warn!("forward chaining: {}; treating query as not entailed", e);
            ForwardResult {
                entailed: false,
                trace: Vec::new(),
            }
        }
    }
}

/// Every symbol `kb` proves by forward chaining, in proof order.
pub fn forward_closure(kb: &KnowledgeBase) -> Vec<Symbol> {
    let mut universe = SymbolUniverse::empty();
    for clause in kb.clauses() {
        universe.extend_from(clause.content());
    }
    match ForwardChainer::new(kb, &universe).run(None) {
        Ok(result) => result.trace,
        Err(e) => {
            warn!("forward closure: {}", e);
            Vec::new()
        }
    }
}

/// State of one forward-chaining run.
struct ForwardChainer<'a> {
    kb: &'a KnowledgeBase,
    /// Unproven distinct premise conjuncts, per clause index.
    remaining: Vec<usize>,
    proven: HashMap<Symbol, bool>,
    /// Rule indices in declaration order, per premise symbol.
    watchers: HashMap<Symbol, Vec<usize>>,
    agenda: VecDeque<Symbol>,
    trace: Vec<Symbol>,
}

impl<'a> ForwardChainer<'a> {
    fn new(kb: &'a KnowledgeBase, universe: &SymbolUniverse) -> Self {
        let mut remaining = Vec::with_capacity(kb.len());
        let mut watchers: HashMap<Symbol, Vec<usize>> = HashMap::new();
        let mut agenda = VecDeque::new();

        for (idx, clause) in kb.clauses().iter().enumerate() {
            let conjuncts = clause.premise_conjuncts();
            remaining.push(conjuncts.len());
            for c in conjuncts {
                if let Some(s) = c.as_symbol() {
                    watchers.entry(s.clone()).or_default().push(idx);
                }
            }
            if clause.is_fact() {
                enqueue_conclusion(&mut agenda, clause.conclusion());
            }
        }

        ForwardChainer {
            kb,
            remaining,
            proven: universe.iter().map(|s| (s.clone(), false)).collect(),
            watchers,
            agenda,
            trace: Vec::new(),
        }
    }

    /// Propagate until every target has been traced, or until the agenda
    /// runs dry. `None` runs to exhaustion.
    fn run(mut self, targets: Option<&[Symbol]>) -> Result<ForwardResult, ModelFormationError> {
        while let Some(p) = self.agenda.pop_front() {
            if !self.trace.contains(&p) {
                self.trace.push(p.clone());
            }
            let reached = targets.is_some_and(|ts| {
                !ts.is_empty() && ts.contains(&p) && ts.iter().all(|t| self.trace.contains(t))
            });
            if reached {
                debug!("forward chaining: reached `{}` after {} symbols", p, self.trace.len());
                return Ok(ForwardResult {
                    entailed: true,
                    trace: self.trace,
                });
            }

            let proven = self
                .proven
                .get_mut(&p)
                .ok_or_else(|| ModelFormationError { symbol: p.clone() })?;
            if *proven {
                continue;
            }
            *proven = true;

            let Some(rules) = self.watchers.get(&p) else {
                continue;
            };
            for &idx in rules {
                self.remaining[idx] -= 1;
                if self.remaining[idx] == 0 {
                    enqueue_conclusion(&mut self.agenda, self.kb.clauses()[idx].conclusion());
                }
            }
        }

        debug!(
            "forward chaining: agenda exhausted with {} symbols proven",
            self.trace.len()
        );
        Ok(ForwardResult {
            entailed: false,
            trace: self.trace,
        })
    }
}

/// Push the symbols a clause conclusion asserts. Each conjunct of a
/// conjunctive conclusion is inferred independently.
fn enqueue_conclusion(agenda: &mut VecDeque<Symbol>, conclusion: &Expr) {
    if !conclusion.is_symbol_conjunction() {
        debug!("forward chaining: skipping non-Horn conclusion `{}`", conclusion);
        return;
    }
    for c in conclusion.conjuncts() {
        if let Some(s) = c.as_symbol() {
            agenda.push_back(s.clone());
        }
    }
}
