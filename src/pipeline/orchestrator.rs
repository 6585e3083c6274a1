use crate::deployment::DeploymentConfig;
use crate::generate::{generate, ArtifactSet};
use crate::intent;
use crate::probe::{ArchiveFetcher, HttpFetcher, RepoSignal, RepositoryProber};
use crate::progress::{PipelineStage, ProgressEvent, ProgressHandler};
use crate::resolve::resolve;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub config: DeploymentConfig,
    pub signal: RepoSignal,
    pub artifacts: ArtifactSet,
}

/// Where the prober should look for source code
#[derive(Debug, Clone, Copy)]
enum RepositorySource<'a> {
    Remote(Option<&'a str>),
    Local(&'a Path),
}

/// Runs extract -> probe -> resolve -> generate for a single request
pub struct DeploymentPipeline<F: ArchiveFetcher = HttpFetcher> {
    prober: RepositoryProber<F>,
    progress_handler: Option<Box<dyn ProgressHandler>>,
}

impl DeploymentPipeline<HttpFetcher> {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(RepositoryProber::with_timeout(timeout))
    }
}

impl Default for DeploymentPipeline<HttpFetcher> {
    fn default() -> Self {
        Self::new(RepositoryProber::default())
    }
}

impl<F: ArchiveFetcher> DeploymentPipeline<F> {
    pub fn new(prober: RepositoryProber<F>) -> Self {
        Self {
            prober,
            progress_handler: None,
        }
    }

    pub fn with_progress(mut self, handler: impl ProgressHandler + 'static) -> Self {
        self.progress_handler = Some(Box::new(handler));
        self
    }

    /// Processes a request with an optional remote repository location
    pub fn run(&self, text: &str, location: Option<&str>) -> PipelineResult {
        self.execute(text, RepositorySource::Remote(location))
    }

    /// Processes a request against a repository already on disk
    pub fn run_with_directory(&self, text: &str, path: &Path) -> PipelineResult {
        self.execute(text, RepositorySource::Local(path))
    }

    fn execute(&self, text: &str, source: RepositorySource<'_>) -> PipelineResult {
        let start = Instant::now();
        info!("Processing request: {}", text);

        let has_repository = !matches!(source, RepositorySource::Remote(None));
        self.report(ProgressEvent::Started { has_repository });

        let base = self.stage(PipelineStage::Extract, || intent::extract(text));
        info!(
            "Detected configuration: {} ({})",
            base.name, base.runtime_type
        );

        let signal = self.stage(PipelineStage::Probe, || match source {
            RepositorySource::Remote(location) => self.prober.probe(location),
            RepositorySource::Local(path) => self.prober.probe_directory(path),
        });

        let config = self.stage(PipelineStage::Resolve, || resolve(base, &signal));
        if has_repository {
            info!(
                "Updated configuration: {}, port: {}",
                config.runtime_type, config.port
            );
        }

        let artifacts = self.stage(PipelineStage::Generate, || generate(&config));

        self.report(ProgressEvent::Completed {
            artifacts: artifacts.len(),
            total_time: start.elapsed(),
        });

        PipelineResult {
            config,
            signal,
            artifacts,
        }
    }

    fn stage<T>(&self, stage: PipelineStage, f: impl FnOnce() -> T) -> T {
        debug!("Stage: {}", stage);
        let stage_start = Instant::now();
        let output = f();
        self.report(ProgressEvent::StageComplete {
            stage,
            duration: stage_start.elapsed(),
        });
        output
    }

    fn report(&self, event: ProgressEvent) {
        if let Some(handler) = &self.progress_handler {
            handler.on_progress(&event);
        }
    }
}
