//! Pipeline Runner: chains stages in order and optionally records a trace
use crate::context::ConversionContext;
use crate::data_model::StageProof;
use crate::stage::Stage;
use tracing::debug;

pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Fold the input through every stage
    pub fn run(&self, input: &str, ctx: &ConversionContext) -> String {
        let mut current = input.to_string();

        for stage in &self.stages {
            let next = stage.run(&current, ctx);
            debug!(stage = stage.id(), changed = next != current, "stage finished");
            current = next;
        }

        current
    }

    /// Same as [`run`](Self::run), plus one proof per stage
    pub fn run_traced(&self, input: &str, ctx: &ConversionContext) -> (String, Vec<StageProof>) {
        let mut current = input.to_string();
        let mut proofs = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let result = stage.run(&current, ctx);

            let proof = StageProof {
                id: stage.id().to_string(),
                in_hash: hash_text(&current),
                out_hash: hash_text(&result),
                input: current,
                output: result.clone(),
                deterministic: stage.deterministic(),
            };
            debug!(stage = %proof.id, changed = proof.changed(), "stage finished");
            proofs.push(proof);

            current = result;
        }

        (current, proofs)
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

fn hash_text(text: &str) -> String {
    format!("blake3:{}", blake3::hash(text.as_bytes()))
}
