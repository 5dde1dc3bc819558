//! Syntax types for propositional expressions and knowledge-base clauses.

mod clause;
mod expr;
mod symbol;
mod universe;

pub use clause::Clause;
pub use expr::Expr;
pub use symbol::Symbol;
pub use universe::SymbolUniverse;
