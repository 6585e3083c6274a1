pub mod orchestrator;

pub use orchestrator::{DeploymentPipeline, PipelineResult};
