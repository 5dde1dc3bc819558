//! Knowledge bases: ordered clause sequences.

mod knowledge_base;

pub use knowledge_base::KnowledgeBase;
