//! Summary document rendered next to the artifacts

use crate::deployment::DeploymentConfig;
use crate::generate::ArtifactKind;

pub const SUMMARY_FILE_NAME: &str = "README.md";

/// Capitalizes the first letter of every alphabetic run ("node.js" -> "Node.Js")
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

pub fn render_summary(config: &DeploymentConfig) -> String {
    let files: String = ArtifactKind::ALL
        .iter()
        .map(|kind| format!("- `{}`: {}\n", kind.file_name(), kind.description()))
        .collect();

    format!(
        r#"# {title} Deployment Configuration

Auto-generated deployment configuration for your {runtime} application.

## Quick Start

1. Build Docker image:
```bash
docker build -t {name} .
```

2. Deploy to AWS:
```bash
terraform init
terraform apply
```

3. Local development:
```bash
docker-compose up
```

## Files Description
{files}
## Configuration Details
- **Application Type**: {runtime}
- **Port**: {port}
- **Cloud Provider**: {cloud}

Generated by: {tool} {version}
"#,
        title = title_case(&config.name),
        runtime = config.runtime_type,
        name = config.name,
        port = config.port,
        cloud = config.cloud_provider.name().to_uppercase(),
        tool = crate::NAME,
        version = crate::VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::{CloudProvider, RuntimeType};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("flask"), "Flask");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("my-app"), "My-App");
    }

    #[test]
    fn test_summary_lists_config_and_files() {
        let config = DeploymentConfig::new("flask")
            .with_runtime(RuntimeType::Flask)
            .with_cloud(CloudProvider::Gcp);
        let summary = render_summary(&config);

        assert!(summary.starts_with("# Flask Deployment Configuration\n"));
        assert!(summary.contains("- **Application Type**: flask"));
        assert!(summary.contains("- **Port**: 5000"));
        assert!(summary.contains("- **Cloud Provider**: GCP"));
        for kind in ArtifactKind::ALL {
            assert!(summary.contains(&format!("`{}`", kind.file_name())));
        }
    }
}
