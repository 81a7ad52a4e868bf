//! Unified Error Model
//!
//! Conversion itself is total; only loading rule tables can fail.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MwdjError {
    #[error("RULES/{0}")]
    RuleTable(String),

    #[error("IO/{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML/{0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MwdjError {
    pub fn rule_table(message: impl Into<String>) -> Self {
        Self::RuleTable(message.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MwdjError>;
