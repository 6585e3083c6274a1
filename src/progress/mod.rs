//! Progress reporting for pipeline runs

mod handler;
mod logging;

pub use handler::{PipelineStage, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;
