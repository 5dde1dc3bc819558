//! Session: end-to-end API for loading knowledge sources and answering queries.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::error::{EngineError, Result};
use crate::inference::{self, Method, Outcome};
use crate::kb::KnowledgeBase;
use crate::normalize::to_cnf;
use crate::parser::parse_document;
use crate::syntax::Expr;

/// How outcomes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `YES: ...` or `NO`.
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(EngineError::Configuration(format!(
                "unknown output format `{}` (expected text or json)",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for answering queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub method: Method,
    pub format: OutputFormat,
}

/// A session holds the current knowledge base, query and configuration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    kb: KnowledgeBase,
    query: Option<Expr>,
    config: EngineConfig,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Session {
            config,
            ..Session::default()
        }
    }

    /// Read a `TELL`/`ASK` file, replacing the knowledge base and query.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loading knowledge source {}", path.display());
        self.load_source(&source)
    }

    /// Parse a `TELL`/`ASK` document, replacing the knowledge base and query.
    ///
    /// Nothing changes when parsing fails.
    pub fn load_source(&mut self, source: &str) -> Result<()> {
        let document = parse_document(source)?;
        self.kb = KnowledgeBase::from_exprs(document.clauses);
        self.query = Some(document.query);
        debug!(
            "loaded {} clauses ({} facts, horn: {})",
            self.kb.len(),
            self.kb.facts().count(),
            self.kb.is_horn()
        );
        Ok(())
    }

    /// Update the configuration from a key/value pair.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "method" => self.config.method = value.parse()?,
            "format" => self.config.format = value.parse()?,
            _ => {
                return Err(EngineError::Configuration(format!(
                    "unknown option `{}`",
                    key
                )))
            }
        }
        Ok(())
    }

    /// Answer the loaded query with the configured method.
    pub fn ask(&self) -> Result<Outcome> {
        let query = self.query.as_ref().ok_or_else(|| {
            EngineError::Configuration("no query loaded; load a TELL/ASK source first".to_string())
        })?;
        Ok(self.ask_query(query))
    }

    /// Answer `query` against the loaded knowledge base.
    ///
    /// The query is put into conjunctive normal form first.
    pub fn ask_query(&self, query: &Expr) -> Outcome {
        let query = to_cnf(query);
        debug!("asking `{}` with {}", query, self.config.method);
        inference::entails(&self.kb, &query, self.config.method)
    }

    /// Render an outcome in the configured format.
    pub fn render(&self, outcome: &Outcome) -> Result<String> {
        match self.config.format {
            OutputFormat::Text => Ok(outcome.to_string()),
            OutputFormat::Json => outcome
                .to_json()
                .map_err(|e| EngineError::Configuration(format!("cannot render outcome: {}", e))),
        }
    }

    /// Access the current knowledge base.
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// The loaded query, if any.
    pub fn query(&self) -> Option<&Expr> {
        self.query.as_ref()
    }

    /// Access the current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
