//! Configuration resolution - merges repository signal over text intent

use crate::deployment::DeploymentConfig;
use crate::probe::RepoSignal;
use tracing::debug;

/// Applies a repository signal to the text-derived configuration.
///
/// Only `runtime_type` and `port` are replaced, and only together. Name and cloud
/// provider always come from the request text.
pub fn resolve(base: DeploymentConfig, signal: &RepoSignal) -> DeploymentConfig {
    match *signal {
        RepoSignal::Unknown => base,
        RepoSignal::Detected { runtime_type, port } => {
            debug!(
                from_runtime = %base.runtime_type,
                from_port = base.port,
                to_runtime = %runtime_type,
                to_port = port,
                "Repository signal overrides text intent"
            );
            base.with_runtime(runtime_type).with_port(port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::{CloudProvider, RuntimeType};

    fn base() -> DeploymentConfig {
        DeploymentConfig::new("inventory")
            .with_runtime(RuntimeType::Flask)
            .with_cloud(CloudProvider::Azure)
    }

    #[test]
    fn test_unknown_signal_keeps_base() {
        assert_eq!(resolve(base(), &RepoSignal::Unknown), base());
    }

    #[test]
    fn test_detected_signal_replaces_runtime_and_port_only() {
        let resolved = resolve(
            base(),
            &RepoSignal::Detected {
                runtime_type: RuntimeType::NodeJs,
                port: 3000,
            },
        );

        assert_eq!(resolved.runtime_type, RuntimeType::NodeJs);
        assert_eq!(resolved.port, 3000);
        assert_eq!(resolved.name, "inventory");
        assert_eq!(resolved.cloud_provider, CloudProvider::Azure);
    }
}
