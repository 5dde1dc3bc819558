//! Backward chaining: goal-directed proof search with a cycle guard.

use log::{debug, warn};

use crate::kb::KnowledgeBase;
use crate::syntax::Expr;

/// Result of a backward-chaining run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackwardResult {
    pub entailed: bool,
    /// Established goals, dependencies before dependents. Empty on failure.
    pub path: Vec<Expr>,
}

/// Decide whether `kb` entails `query` by backward chaining.
///
/// A conjunctive query is proved one distinct conjunct at a time, left to
/// right; it is entailed only if every conjunct is.
pub fn backward_chain(kb: &KnowledgeBase, query: &Expr) -> BackwardResult {
    if !kb.is_horn() {
        warn!("backward chaining over a non-Horn knowledge base; result may be incomplete");
    }
    let mut chainer = BackwardChainer::new(kb);
    let mut goals: Vec<&Expr> = Vec::new();
    for c in query.conjuncts() {
        if !goals.contains(&c) {
            goals.push(c);
        }
    }
    let entailed = goals.into_iter().all(|g| chainer.prove(g));
    if !entailed {
        chainer.path.clear();
    }
    debug!(
        "backward chaining: `{}` {} after {} goal expansions",
        query,
        if entailed { "proved" } else { "failed" },
        chainer.expansions
    );
    BackwardResult {
        entailed,
        path: chainer.path,
    }
}

/// State of one backward-chaining run.
struct BackwardChainer<'a> {
    kb: &'a KnowledgeBase,
    /// Proof trace; doubles as the set of goals already established.
    path: Vec<Expr>,
    /// Goals on the current recursion stack.
    visited: Vec<Expr>,
    expansions: usize,
}

impl<'a> BackwardChainer<'a> {
    fn new(kb: &'a KnowledgeBase) -> Self {
        BackwardChainer {
            kb,
            path: Vec::new(),
            visited: Vec::new(),
            expansions: 0,
        }
    }

    fn prove(&mut self, goal: &Expr) -> bool {
        let kb = self.kb;
        self.expansions += 1;

        if kb.facts().any(|c| c.concludes(goal)) {
            self.establish(goal);
            return true;
        }
        if !kb.rules().any(|c| c.concludes(goal)) {
            return false;
        }

        self.visited.push(goal.clone());
        let mut proved = false;
        for rule in kb.rules().filter(|c| c.concludes(goal)) {
            let checkpoint = self.path.len();
            if self.prove_all(goal, &rule.premise_conjuncts()) {
                proved = true;
                break;
            }
            // Drop whatever the abandoned rule established.
            self.path.truncate(checkpoint);
        }
        self.visited.pop();

        if proved {
            self.establish(goal);
        }
        proved
    }

    /// Prove every premise conjunct in order. A conjunct equal to the goal or
    /// already on the recursion stack fails the rule.
    fn prove_all(&mut self, goal: &Expr, conjuncts: &[&Expr]) -> bool {
        for &c in conjuncts {
            if c == goal || self.visited.contains(c) {
                debug!("backward chaining: cycle through `{}` while proving `{}`", c, goal);
                return false;
            }
            if !self.prove(c) {
                return false;
            }
        }
        true
    }

    fn establish(&mut self, goal: &Expr) {
        if !self.path.contains(goal) {
            self.path.push(goal.clone());
        }
    }
}
