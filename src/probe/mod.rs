//! Repository prober - refines text intent by inspecting the actual source tree
//!
//! Probing is best effort. Every failure (unreachable host, non-2xx answer,
//! unsupported archive, unreadable files) ends in [`RepoSignal::Unknown`] so the
//! pipeline falls back to what the request text said.

pub mod archive;
pub mod detectors;
mod error;
pub mod fetch;
pub mod signal;
pub mod source;

pub use error::ProbeError;
pub use fetch::{ArchiveFetcher, HttpFetcher, DEFAULT_FETCH_TIMEOUT};
pub use signal::{RepoSignal, SignalAccumulator, SignalUpdate};

use crate::fs::{FileSystem, RealFileSystem};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct RepositoryProber<F: ArchiveFetcher = HttpFetcher> {
    fetcher: F,
}

impl RepositoryProber<HttpFetcher> {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(HttpFetcher::new(timeout))
    }
}

impl Default for RepositoryProber<HttpFetcher> {
    fn default() -> Self {
        Self::new(HttpFetcher::default())
    }
}

impl<F: ArchiveFetcher> RepositoryProber<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches, unpacks and scans the archive at `location`.
    ///
    /// Returns [`RepoSignal::Unknown`] without any I/O when no location is given.
    pub fn probe(&self, location: Option<&str>) -> RepoSignal {
        let Some(location) = location else {
            debug!("No repository location, skipping probe");
            return RepoSignal::Unknown;
        };

        info!(location, "Analyzing repository");
        match self.try_probe(location) {
            Ok(signal) => signal,
            Err(e) => {
                warn!(location, error = %e, "Repository analysis failed, keeping text intent");
                RepoSignal::Unknown
            }
        }
    }

    /// Scans a directory that is already on disk with the same detectors
    pub fn probe_directory(&self, path: &Path) -> RepoSignal {
        self.probe_directory_with(&RealFileSystem::new(), path)
    }

    pub fn probe_directory_with<S: FileSystem + ?Sized>(&self, fs: &S, path: &Path) -> RepoSignal {
        if !fs.is_dir(path) {
            let e = ProbeError::MissingDirectory(path.display().to_string());
            warn!(error = %e, "Repository analysis failed, keeping text intent");
            return RepoSignal::Unknown;
        }

        info!(path = %path.display(), "Analyzing local repository");
        detectors::scan_tree(fs, path)
    }

    fn try_probe(&self, location: &str) -> Result<RepoSignal, ProbeError> {
        let url = source::normalize_location(location);
        let bytes = self.fetcher.fetch(&url)?;
        let unpacked = archive::unpack(&bytes)?;

        let signal = detectors::scan_tree(&RealFileSystem::new(), unpacked.root());
        debug!(?signal, "Repository scan complete");
        Ok(signal)
    }
}
