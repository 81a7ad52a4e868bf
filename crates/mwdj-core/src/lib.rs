//! MWDJ Core: Stage trait, runner and data model
//!
//! Generic staged core for the Merriam-Webster to Daniel Jones converter.
//! Every stage is a pure `&str -> String` rewrite and declares itself
//! deterministic.

pub mod stage;
pub mod runner;
pub mod data_model;
pub mod error;
pub mod context;

pub use stage::Stage;
pub use runner::PipelineRunner;
pub use data_model::StageProof;
pub use context::{ConversionContext, ConverterConfig};
pub use error::MwdjError;

/// Converter engine version
pub const MWDJ_VERSION: &str = "0.1.0";
