//! Writes a pipeline result to `deployment_<name>/`

use super::summary::{render_summary, SUMMARY_FILE_NAME};
use crate::pipeline::PipelineResult;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths produced by [`ArtifactWriter::write`]
#[derive(Debug, Clone)]
pub struct WrittenDeployment {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes every artifact plus the summary document, overwriting existing files
    pub fn write(&self, result: &PipelineResult) -> Result<WrittenDeployment> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {}", self.dir.display()))?;

        let mut files = Vec::new();
        for (kind, content) in result.artifacts.iter() {
            let path = self.write_file(kind.file_name(), content)?;
            if kind.is_executable() {
                make_executable(&path)?;
            }
            files.push(path);
        }

        let summary = render_summary(&result.config);
        files.push(self.write_file(SUMMARY_FILE_NAME, &summary)?);

        info!("Files saved to: {}", self.dir.display());
        Ok(WrittenDeployment {
            dir: self.dir.clone(),
            files,
        })
    }

    fn write_file(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(file = %path.display(), bytes = content.len(), "Wrote artifact");
        Ok(path)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
