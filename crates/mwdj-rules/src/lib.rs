//! MWDJ Rules: ordered replacement tables and their interpreter.
//!
//! A rule is a literal `(from, to)` pair. Rules are kept as ordered lists,
//! never maps: each rule sees the output of every rule before it.
//!
//! # Example
//!
//! ```
//! use mwdj_rules::{apply_rules, DEFAULT_RULES};
//!
//! let out = apply_rules(DEFAULT_RULES.context_free(), "ˈbī");
//! assert_eq!(out, "ˈbaɪ");
//! ```

pub mod audit;
pub mod rule;
pub mod table;

pub use audit::{find_collisions, Collision};
pub use rule::{apply_rules, Rule};
pub use table::{RuleFile, RuleSet, DEFAULT_RULES, DEFAULT_RULES_YAML};
