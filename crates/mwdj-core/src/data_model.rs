//! Data Model: per-stage trace records
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProof {
    pub id: String,
    pub input: String,
    pub output: String,
    pub in_hash: String,
    pub out_hash: String,
    pub deterministic: bool,
}

impl StageProof {
    /// Whether the stage rewrote anything
    pub fn changed(&self) -> bool {
        self.in_hash != self.out_hash
    }
}
