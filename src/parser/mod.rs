//! Parser for the `TELL`/`ASK` knowledge-source format.

mod ast;
mod lexer;
mod parser;

pub use ast::Document;
pub use parser::{parse_clauses, parse_document, parse_expr, ParseError};
