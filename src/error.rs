//! Error types for the entailment engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::syntax::Symbol;

/// Top-level error for loading a knowledge source and running a query.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Bad method name, option or command-line usage.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The knowledge source could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    ModelFormation(#[from] ModelFormationError),
}

/// A formula mentions a symbol the model does not assign.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("symbol `{symbol}` is outside the model's universe")]
pub struct ModelFormationError {
    pub symbol: Symbol,
}

pub type Result<T> = std::result::Result<T, EngineError>;
