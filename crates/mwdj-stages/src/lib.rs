//! MWDJ Stages: the conversion pipeline.
//!
//! # Pipeline Flow
//!
//! ```text
//! trimmed input → context-free → syllables + stress → render → output
//!                   ↓                 ↓                  ↓
//!              vowels/consonants   ē, ə by stress    "src | dj\u{a0}"
//! ```
//!
//! Segmentation (stage 2) lives in [`syllable`]; the stress stage splits,
//! rewrites and rejoins inside a single pass.

mod context_free;
mod render;
mod stress;
pub mod syllable;

pub use context_free::ContextFreeStage;
pub use render::{render, RenderStage, NBSP, SOURCE_SEPARATOR};
pub use stress::StressStage;
pub use syllable::{is_stress, Syllable, PRIMARY_STRESS, SECONDARY_STRESS, SYLLABLE_DELIMITER};

use mwdj_core::{PipelineRunner, Stage};
use mwdj_rules::RuleSet;
use std::sync::Arc;

/// Stages 1 to 3, without output formatting
pub fn core_stages(rules: Arc<RuleSet>) -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(ContextFreeStage::new(Arc::clone(&rules))),
        Box::new(StressStage::new(rules)),
    ]
}

/// Full pipeline: stages 1 to 3 followed by rendering
pub fn default_pipeline(rules: Arc<RuleSet>) -> PipelineRunner {
    let mut stages = core_stages(rules);
    stages.push(Box::new(RenderStage));
    PipelineRunner::new(stages)
}
