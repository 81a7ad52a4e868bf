use crate::syllable::{join, segment};
use mwdj_core::{ConversionContext, Stage};
use mwdj_rules::{apply_rules, RuleSet};
use std::sync::Arc;
use tracing::trace;

/// Stages 2 and 3: split into syllables, rewrite each by its stress, rejoin
pub struct StressStage {
    rules: Arc<RuleSet>,
}

impl StressStage {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }
}

impl Stage for StressStage {
    fn id(&self) -> &'static str {
        "stress.syllable.v1"
    }

    fn run(&self, input: &str, _ctx: &ConversionContext) -> String {
        let rewritten: Vec<String> = segment(input)
            .into_iter()
            .map(|syllable| {
                let stressed = syllable.is_stressed();
                trace!(syllable = syllable.text, stressed, "rewriting syllable");
                let rules = if stressed {
                    self.rules.stressed()
                } else {
                    self.rules.unstressed()
                };
                apply_rules(rules, syllable.text)
            })
            .collect();

        join(&rewritten)
    }
}
