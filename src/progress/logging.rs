//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { has_repository } => {
                info!(has_repository, "Processing deployment request");
            }
            ProgressEvent::StageComplete { stage, duration } => {
                debug!(
                    stage = %stage,
                    duration_ms = duration.as_millis(),
                    "Stage complete"
                );
            }
            ProgressEvent::Completed {
                artifacts,
                total_time,
            } => {
                info!(
                    artifacts,
                    total_time_ms = total_time.as_millis(),
                    "Deployment configuration generated"
                );
            }
        }
    }
}
