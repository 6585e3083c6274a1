//! Progress handler trait and events

use std::fmt;
use std::time::Duration;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Extract,
    Probe,
    Resolve,
    Generate,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Probe => "probe",
            Self::Resolve => "resolve",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Events emitted while a pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Pipeline started
    Started { has_repository: bool },

    /// A stage finished
    StageComplete {
        stage: PipelineStage,
        duration: Duration,
    },

    /// Pipeline finished
    Completed {
        artifacts: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_handler_receives_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            has_repository: false,
        });
        handler.on_progress(&ProgressEvent::StageComplete {
            stage: PipelineStage::Extract,
            duration: Duration::from_millis(1),
        });

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(PipelineStage::Probe.to_string(), "probe");
    }
}
