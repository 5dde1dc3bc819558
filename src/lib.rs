//! iengine: propositional entailment for knowledge bases
//!
//! This crate decides whether a query follows from a knowledge base of
//! propositional clauses, by truth-table enumeration, forward chaining or
//! backward chaining.

pub mod error;
pub mod inference;
pub mod kb;
pub mod normalize;
pub mod parser;
pub mod session;
pub mod syntax;

pub use error::{EngineError, ModelFormationError};
pub use inference::{entails, Evidence, Method, Outcome};
pub use kb::KnowledgeBase;
pub use session::{EngineConfig, OutputFormat, Session};
pub use syntax::{Clause, Expr, Symbol};
