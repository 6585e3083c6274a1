//! Artifact generation - renders deployment files from a resolved configuration
//!
//! Every renderer is a pure function of [`DeploymentConfig`]; identical input
//! always yields byte-identical output.

mod compose;
mod deploy_script;
mod dockerfile;
mod terraform;

pub use compose::render_compose;
pub use deploy_script::render_deploy_script;
pub use dockerfile::render_dockerfile;
pub use terraform::{render_terraform, AWS_REGION};

use crate::deployment::DeploymentConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed family of generated artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    ContainerBuildFile,
    InfraFile,
    DeployScript,
    ComposeFile,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        Self::ContainerBuildFile,
        Self::InfraFile,
        Self::DeployScript,
        Self::ComposeFile,
    ];

    /// Stable key used by writers and reports
    pub fn key(&self) -> &'static str {
        match self {
            Self::ContainerBuildFile => "container-build-file",
            Self::InfraFile => "infra-file",
            Self::DeployScript => "deploy-script",
            Self::ComposeFile => "compose-file",
        }
    }

    /// File name the artifact is written under
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::ContainerBuildFile => "Dockerfile",
            Self::InfraFile => "main.tf",
            Self::DeployScript => "deploy.sh",
            Self::ComposeFile => "docker-compose.yml",
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Self::DeployScript)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ContainerBuildFile => "Docker image configuration",
            Self::InfraFile => "Terraform infrastructure configuration",
            Self::DeployScript => "Automated deployment script",
            Self::ComposeFile => "Local development environment",
        }
    }

    fn render(&self, config: &DeploymentConfig) -> String {
        match self {
            Self::ContainerBuildFile => render_dockerfile(config),
            Self::InfraFile => render_terraform(config),
            Self::DeployScript => render_deploy_script(config),
            Self::ComposeFile => render_compose(config),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Rendered artifacts keyed by kind
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ArtifactSet {
    artifacts: BTreeMap<ArtifactKind, String>,
}

impl ArtifactSet {
    pub fn get(&self, kind: ArtifactKind) -> Option<&str> {
        self.artifacts.get(&kind).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        self.artifacts.iter().map(|(kind, content)| (*kind, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Renders the complete artifact set for `config`
pub fn generate(config: &DeploymentConfig) -> ArtifactSet {
    let artifacts = ArtifactKind::ALL
        .iter()
        .map(|kind| (*kind, kind.render(config)))
        .collect();

    ArtifactSet { artifacts }
}
