//! MWDJ: Merriam-Webster respelling to Daniel Jones IPA
//!
//! Converts one dictionary pronunciation at a time. Conversion is total:
//! any string, including the empty one, yields a result.
//!
//! # Example
//!
//! ```
//! use mwdj::{Converter, ConverterConfig};
//!
//! let converter = Converter::new(ConverterConfig::target_only());
//! assert_eq!(converter.convert(" ˈfər-t͟hər "), "ˈfɚ-ðɚ\u{a0}");
//!
//! let converter = Converter::new(ConverterConfig::default());
//! assert_eq!(converter.convert("ˈbī"), "ˈbī | ˈbaɪ\u{a0}");
//! ```
//!
//! A `Converter` holds no mutable state and can be shared across threads.

use mwdj_core::{ConversionContext, PipelineRunner};
use mwdj_stages::{core_stages, render};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub use mwdj_core::{ConverterConfig, MwdjError, StageProof};
pub use mwdj_rules::{Collision, Rule, RuleSet, DEFAULT_RULES};
pub use mwdj_stages::{
    is_stress, NBSP, PRIMARY_STRESS, SECONDARY_STRESS, SOURCE_SEPARATOR, SYLLABLE_DELIMITER,
};

/// Result of one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Trimmed input
    pub source: String,
    /// Converted notation, without formatting
    pub converted: String,
    /// What [`Converter::convert`] returns
    pub rendered: String,
}

/// Rewrites Merriam-Webster respellings with a fixed rule table and display mode
pub struct Converter {
    config: ConverterConfig,
    runner: PipelineRunner,
}

impl Converter {
    /// Converter with the built-in rule table
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_rules(config, DEFAULT_RULES.clone())
    }

    /// Converter with a custom rule table
    pub fn with_rules(config: ConverterConfig, rules: RuleSet) -> Self {
        let runner = PipelineRunner::new(core_stages(Arc::new(rules)));
        Self { config, runner }
    }

    /// Display mode from `MWDJ_SHOW_SOURCE`
    pub fn from_env() -> Self {
        Self::new(ConverterConfig::from_env())
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert one transcription and format it for display.
    pub fn convert(&self, raw: &str) -> String {
        self.convert_detailed(raw).rendered
    }

    pub fn convert_detailed(&self, raw: &str) -> Conversion {
        let ctx = self.context(raw);
        let converted = self.runner.run(&ctx.source, &ctx);
        self.finish(ctx, converted)
    }

    /// Like [`convert_detailed`](Self::convert_detailed), plus one proof per stage
    pub fn convert_traced(&self, raw: &str) -> (Conversion, Vec<StageProof>) {
        let ctx = self.context(raw);
        let (converted, proofs) = self.runner.run_traced(&ctx.source, &ctx);
        (self.finish(ctx, converted), proofs)
    }

    /// Convert each transcription independently, in order
    pub fn convert_many<I, S>(&self, raws: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter().map(|raw| self.convert(raw.as_ref())).collect()
    }

    fn context(&self, raw: &str) -> ConversionContext {
        ConversionContext::new(self.config, raw.trim())
    }

    fn finish(&self, ctx: ConversionContext, converted: String) -> Conversion {
        let rendered = render(&ctx.source, &converted, &ctx.config);
        debug!(source = %ctx.source, converted = %converted, "converted transcription");
        Conversion {
            source: ctx.source,
            converted,
            rendered,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}
