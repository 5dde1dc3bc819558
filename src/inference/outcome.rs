//! Inference methods and their uniform result.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EngineError;

/// The three entailment strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    TruthTable,
    ForwardChaining,
    BackwardChaining,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::TruthTable,
        Method::ForwardChaining,
        Method::BackwardChaining,
    ];

    /// Short name used on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Method::TruthTable => "TT",
            Method::ForwardChaining => "FC",
            Method::BackwardChaining => "BC",
        }
    }
}

impl FromStr for Method {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', " ").as_str() {
            "tt" | "truth table" => Ok(Method::TruthTable),
            "fc" | "forward chaining" => Ok(Method::ForwardChaining),
            "bc" | "backward chaining" => Ok(Method::BackwardChaining),
            _ => Err(EngineError::Configuration(format!(
                "unknown inference method `{}` (expected TT, FC or BC)",
                s
            ))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Supporting evidence for a positive answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Evidence {
    /// Models satisfying both knowledge base and query.
    Models(usize),
    /// Symbols or goals in proof order.
    Trace(Vec<String>),
    None,
}

/// The decision of one method on one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub method: Method,
    pub entailed: bool,
    pub evidence: Evidence,
}

impl Outcome {
    pub fn not_entailed(method: Method) -> Self {
        Outcome {
            method,
            entailed: false,
            evidence: Evidence::None,
        }
    }

    /// Render as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `YES: <evidence>` or `NO`.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.entailed {
            return write!(f, "NO");
        }
        match &self.evidence {
            Evidence::Models(count) => write!(f, "YES: {}", count),
            Evidence::Trace(names) => write!(f, "YES: {}", names.join(", ")),
            Evidence::None => write!(f, "YES"),
        }
    }
}
