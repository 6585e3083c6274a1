use thiserror::Error;

/// Failures inside the repository prober.
///
/// None of these escape [`super::RepositoryProber::probe`]; they are logged
/// and collapse into [`super::RepoSignal::Unknown`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Archive at {url} is empty")]
    EmptyBody { url: String },

    #[error("Failed to unpack archive: {0}")]
    Unpack(String),

    #[error("Local directory not found: {0}")]
    MissingDirectory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
