//! Deployment configuration threaded through the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used when the request text carries no usable token
pub const DEFAULT_APP_NAME: &str = "my-app";

/// Port assumed until a repository says otherwise
pub const DEFAULT_PORT: u16 = 5000;

/// Application runtime the artifacts are rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    #[default]
    Python,
    Flask,
    Django,
    #[serde(rename = "nodejs")]
    NodeJs,
}

impl RuntimeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Flask => "flask",
            Self::Django => "django",
            Self::NodeJs => "nodejs",
        }
    }

    pub fn all_variants() -> &'static [Self] {
        &[Self::Python, Self::Flask, Self::Django, Self::NodeJs]
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Target cloud provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    #[default]
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gcp => "gcp",
            Self::Azure => "azure",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolved description of what is being deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub name: String,
    pub runtime_type: RuntimeType,
    pub port: u16,
    pub cloud_provider: CloudProvider,
}

impl DeploymentConfig {
    /// Creates a config with default runtime, port and provider
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_type: RuntimeType::default(),
            port: DEFAULT_PORT,
            cloud_provider: CloudProvider::default(),
        }
    }

    pub fn with_runtime(mut self, runtime_type: RuntimeType) -> Self {
        self.runtime_type = runtime_type;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_cloud(mut self, cloud_provider: CloudProvider) -> Self {
        self.cloud_provider = cloud_provider;
        self
    }
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME)
    }
}
