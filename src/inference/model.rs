//! Truth assignments and their enumeration.

use std::collections::HashMap;

use crate::syntax::Symbol;

/// A truth assignment to symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: HashMap<Symbol, bool>,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    pub fn assign(&mut self, symbol: Symbol, value: bool) {
        self.values.insert(symbol, value);
    }

    /// The value of `symbol`, or `None` if it is unassigned.
    pub fn value(&self, symbol: &Symbol) -> Option<bool> {
        self.values.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Symbol, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Model {
            values: iter.into_iter().collect(),
        }
    }
}

/// Lazily yields every model over a fixed list of symbols.
///
/// Models come in binary counting order starting from all-false, with the
/// last symbol varying fastest. `n` symbols give exactly `2^n` models; zero
/// symbols give one empty model. Cloning the enumerator (or building a new
/// one over the same symbols) replays the same sequence.
#[derive(Debug, Clone)]
pub struct ModelEnumerator {
    symbols: Vec<Symbol>,
    /// Assignment to yield next; `None` once the sequence is exhausted.
    next: Option<Vec<bool>>,
}

impl ModelEnumerator {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        let next = Some(vec![false; symbols.len()]);
        ModelEnumerator { symbols, next }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Iterator for ModelEnumerator {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        let current = self.next.take()?;
        let model = self
            .symbols
            .iter()
            .cloned()
            .zip(current.iter().copied())
            .collect();

        // Odometer increment: flip trailing trues to false, then the first
        // false to true. All trues means this was the last model.
        let mut succ = current;
        let mut carried = true;
        for bit in succ.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                carried = false;
                break;
            }
        }
        if !carried {
            self.next = Some(succ);
        }

        Some(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(Symbol::new).collect()
    }

    #[test]
    fn test_zero_symbols_yield_one_empty_model() {
        let models: Vec<Model> = ModelEnumerator::new(Vec::new()).collect();
        assert_eq!(models.len(), 1);
        assert!(models[0].is_empty());
    }

    #[test]
    fn test_last_symbol_varies_fastest() {
        let models: Vec<(bool, bool)> = ModelEnumerator::new(symbols(&["a", "b"]))
            .map(|m| {
                (
                    m.value(&Symbol::new("a")).unwrap(),
                    m.value(&Symbol::new("b")).unwrap(),
                )
            })
            .collect();
        assert_eq!(
            models,
            vec![(false, false), (false, true), (true, false), (true, true)]
        );
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let enumerator = ModelEnumerator::new(symbols(&["a", "b", "c"]));
        let first: Vec<Model> = enumerator.clone().collect();
        let second: Vec<Model> = enumerator.collect();
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assign_overwrites_value() {
        let a = Symbol::new("a");
        let mut model = Model::new();
        assert_eq!(model.value(&a), None);
        model.assign(a.clone(), true);
        model.assign(a.clone(), false);
        assert_eq!(model.value(&a), Some(false));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_enumerator_keeps_symbol_order() {
        let enumerator = ModelEnumerator::new(symbols(&["b", "a"]));
        assert_eq!(enumerator.symbols(), &symbols(&["b", "a"])[..]);
    }

    #[test]
    fn test_models_are_total() {
        for model in ModelEnumerator::new(symbols(&["a", "b", "c"])) {
            assert_eq!(model.len(), 3);
        }
    }
}
