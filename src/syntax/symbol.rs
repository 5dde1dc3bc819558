//! Propositional symbols.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// An atomic propositional variable.
///
/// Identity is by name: two symbols spelled the same are the same variable
/// wherever they occur. The name is reference counted so that cloning a
/// symbol (and the expressions holding it) never copies the string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: Arc<str>,
}

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Symbol {
            name: Arc::from(name.as_ref()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity_is_by_name() {
        assert_eq!(Symbol::new("a"), Symbol::from("a"));
        assert_ne!(Symbol::new("a"), Symbol::new("ab"));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("p2").to_string(), "p2");
    }
}
