//! On-disk output for generated deployments

pub mod summary;
pub mod writer;

pub use summary::{render_summary, SUMMARY_FILE_NAME};
pub use writer::{ArtifactWriter, WrittenDeployment};
