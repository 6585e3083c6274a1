//! Report formatting for pipeline results
//!
//! Human output mirrors what an operator needs after a run; JSON and YAML carry
//! the full resolved configuration, repository signal and artifact contents.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::deployment::DeploymentConfig;
use crate::generate::{ArtifactKind, ArtifactSet};
use crate::output::WrittenDeployment;
use crate::pipeline::PipelineResult;
use crate::probe::RepoSignal;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a DeploymentConfig,
    signal: &'a RepoSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
    artifacts: &'a ArtifactSet,
}

/// Output formatter for pipeline results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(
        &self,
        result: &PipelineResult,
        written: Option<&WrittenDeployment>,
    ) -> Result<String> {
        let report = Report {
            config: &result.config,
            signal: &result.signal,
            output_dir: written.map(|w| w.dir.display().to_string()),
            artifacts: &result.artifacts,
        };

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(&report).context("Failed to serialize report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(result, written)),
        }
    }

    fn format_human(&self, result: &PipelineResult, written: Option<&WrittenDeployment>) -> String {
        let config = &result.config;
        let mut out = String::new();

        match written {
            Some(written) => {
                let _ = writeln!(out, "Success!");
                let _ = writeln!(out, "Output directory: {}", written.dir.display());
                let _ = writeln!(out, "Run: cd {} && ./deploy.sh", written.dir.display());
            }
            None => {
                let _ = writeln!(out, "Dry run - no files written");
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Generated configuration:");
        let _ = writeln!(out, "   • Application: {}", config.name);
        let _ = writeln!(out, "   • Type: {}", config.runtime_type);
        let _ = writeln!(out, "   • Port: {}", config.port);
        let _ = writeln!(out, "   • Cloud: {}", config.cloud_provider);
        let _ = writeln!(
            out,
            "   • Files: {} configuration files",
            result.artifacts.len()
        );
        if let RepoSignal::Detected { runtime_type, port } = result.signal {
            let _ = writeln!(out, "   • Repository: {} on port {}", runtime_type, port);
        }

        out
    }
}

/// First `lines` lines of the generated Dockerfile, for previews
pub fn dockerfile_preview(artifacts: &ArtifactSet, lines: usize) -> Vec<&str> {
    artifacts
        .get(ArtifactKind::ContainerBuildFile)
        .map(|content| content.lines().take(lines).collect())
        .unwrap_or_default()
}
