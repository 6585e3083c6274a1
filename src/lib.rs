//! autodeploy - deployment artifacts from a plain-language request
//!
//! A request such as "Deploy my Flask app on AWS" is turned into a
//! [`DeploymentConfig`] by keyword heuristics. When a repository is supplied it
//! is downloaded and scanned, and whatever the code says about runtime and port
//! overrides the text. The resolved configuration is then rendered into a
//! Dockerfile, Terraform file, deploy script and docker-compose file.
//!
//! # Example Usage
//!
//! ```no_run
//! use autodeploy::DeploymentPipeline;
//!
//! let pipeline = DeploymentPipeline::default();
//! let result = pipeline.run(
//!     "Deploy my Flask app on AWS",
//!     Some("https://github.com/user/repo"),
//! );
//!
//! println!("{} on port {}", result.config.runtime_type, result.config.port);
//! for (kind, content) in result.artifacts.iter() {
//!     println!("{}: {} bytes", kind.file_name(), content.len());
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`intent`]: keyword extraction from request text
//! - [`probe`]: repository download, unpacking and scanning
//! - [`resolve`]: merging the repository signal over the text intent
//! - [`generate`]: artifact templates
//! - [`pipeline`]: the end-to-end orchestrator
//! - [`output`]: writing a deployment directory to disk

pub mod cli;
pub mod config;
pub mod deployment;
pub mod fs;
pub mod generate;
pub mod intent;
pub mod output;
pub mod pipeline;
pub mod probe;
pub mod progress;
pub mod resolve;
pub mod util;

pub use config::{AutodeployConfig, ConfigError};
pub use deployment::{CloudProvider, DeploymentConfig, RuntimeType};
pub use generate::{generate, ArtifactKind, ArtifactSet};
pub use pipeline::{DeploymentPipeline, PipelineResult};
pub use probe::{ArchiveFetcher, HttpFetcher, ProbeError, RepoSignal, RepositoryProber};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
