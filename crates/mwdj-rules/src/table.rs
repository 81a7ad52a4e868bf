//! Rule table loading and representation.
//!
//! A table file has five ordered groups:
//! - `vowels`, `consonants`, `syllabic`: the context-free chain, run in that order
//! - `stressed`: run on syllables that open with a stress mark
//! - `unstressed`: run on every other syllable

use crate::audit::{find_collisions, Collision};
use crate::rule::Rule;
use lazy_static::lazy_static;
use mwdj_core::error::{MwdjError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Table shipped with the crate
pub const DEFAULT_RULES_YAML: &str = include_str!("../rules/merriam-webster.yaml");

const SUPPORTED_VERSION: &str = "1.0";

lazy_static! {
    /// Merriam-Webster → Daniel Jones table, parsed once
    pub static ref DEFAULT_RULES: RuleSet =
        RuleSet::from_yaml(DEFAULT_RULES_YAML).expect("embedded rule table is valid");
}

/// Top-level table file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFile {
    pub version: String,
    #[serde(default)]
    pub vowels: Vec<Rule>,
    #[serde(default)]
    pub consonants: Vec<Rule>,
    #[serde(default)]
    pub syllabic: Vec<Rule>,
    #[serde(default)]
    pub stressed: Vec<Rule>,
    #[serde(default)]
    pub unstressed: Vec<Rule>,
}

/// Validated rule table ready for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    vowels: Vec<Rule>,
    consonants: Vec<Rule>,
    syllabic: Vec<Rule>,
    stressed: Vec<Rule>,
    unstressed: Vec<Rule>,
}

impl RuleSet {
    /// Load and validate a table from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MwdjError::io(format!("reading rule table {}", path), e))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a table from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: RuleFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    pub fn from_file(file: RuleFile) -> Result<Self> {
        if file.version != SUPPORTED_VERSION {
            return Err(MwdjError::rule_table(format!(
                "unsupported table version {:?}, expected {:?}",
                file.version, SUPPORTED_VERSION
            )));
        }

        let groups = [
            ("vowels", &file.vowels),
            ("consonants", &file.consonants),
            ("syllabic", &file.syllabic),
            ("stressed", &file.stressed),
            ("unstressed", &file.unstressed),
        ];
        for (name, rules) in groups {
            if let Some(pos) = rules.iter().position(|r| r.from.is_empty()) {
                return Err(MwdjError::rule_table(format!("empty pattern in {}[{}]", name, pos)));
            }
        }

        let set = Self {
            vowels: file.vowels,
            consonants: file.consonants,
            syllabic: file.syllabic,
            stressed: file.stressed,
            unstressed: file.unstressed,
        };

        for collision in set.collisions() {
            debug!(%collision, "rule chain collision");
        }

        Ok(set)
    }

    /// Vowels, then consonants, then syllabic consonants
    pub fn context_free(&self) -> impl Iterator<Item = &Rule> + Clone {
        self.vowels
            .iter()
            .chain(self.consonants.iter())
            .chain(self.syllabic.iter())
    }

    pub fn vowels(&self) -> &[Rule] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[Rule] {
        &self.consonants
    }

    pub fn syllabic(&self) -> &[Rule] {
        &self.syllabic
    }

    pub fn stressed(&self) -> &[Rule] {
        &self.stressed
    }

    pub fn unstressed(&self) -> &[Rule] {
        &self.unstressed
    }

    /// Collisions along the context-free chain
    pub fn collisions(&self) -> Vec<Collision> {
        find_collisions(self.context_free())
    }

    /// Back to the serializable file form
    pub fn to_file(&self) -> RuleFile {
        RuleFile {
            version: SUPPORTED_VERSION.to_string(),
            vowels: self.vowels.clone(),
            consonants: self.consonants.clone(),
            syllabic: self.syllabic.clone(),
            stressed: self.stressed.clone(),
            unstressed: self.unstressed.clone(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}
