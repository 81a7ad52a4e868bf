//! Stage Trait: single contract for every conversion stage
use crate::context::ConversionContext;

/// Contract of one MWDJ stage.
///
/// A stage receives the whole transcription produced by the previous stage
/// and returns a new string. Stages never fail: text they do not recognise
/// passes through untouched.
pub trait Stage: Send + Sync {
    /// Unique stage ID (ex: "substitute.context_free.v1")
    fn id(&self) -> &'static str;

    /// Whether the stage is deterministic (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Run the stage
    fn run(&self, input: &str, ctx: &ConversionContext) -> String;
}
