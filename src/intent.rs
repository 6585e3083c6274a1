//! Intent extraction - keyword heuristics over free-text deployment requests
//!
//! Classification is table driven: each table is an ordered list of
//! `(keywords, category)` rules and the first rule with any keyword contained
//! in the lowercased request wins. Anything unmatched falls back to the
//! defaults of [`DeploymentConfig`].

use crate::deployment::{CloudProvider, DeploymentConfig, RuntimeType, DEFAULT_APP_NAME};
use tracing::debug;

/// Runtime rules in priority order
pub const RUNTIME_RULES: &[(&[&str], RuntimeType)] = &[
    (&["flask"], RuntimeType::Flask),
    (&["node", "javascript"], RuntimeType::NodeJs),
    (&["django"], RuntimeType::Django),
];

/// Cloud provider rules in priority order
pub const CLOUD_RULES: &[(&[&str], CloudProvider)] = &[
    (&["gcp", "google"], CloudProvider::Gcp),
    (&["azure", "microsoft"], CloudProvider::Azure),
];

/// Tokens never used as an application name
pub const NAME_STOP_WORDS: &[&str] = &["deploy", "this", "application", "using"];

const MIN_NAME_LEN: usize = 3;

/// Returns the category of the first rule whose keywords occur in `text`
pub fn classify<T: Copy>(text: &str, rules: &[(&[&str], T)]) -> Option<T> {
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|(_, category)| *category)
}

/// Picks the first whitespace token longer than three characters that is not a stop word
pub fn extract_name(text: &str) -> String {
    text.split_whitespace()
        .find(|word| word.chars().count() > MIN_NAME_LEN && !NAME_STOP_WORDS.contains(word))
        .map(|word| word.replace(' ', "-"))
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

/// Turns a free-text request into an initial deployment configuration
pub fn extract(text: &str) -> DeploymentConfig {
    let text = text.to_lowercase();

    let runtime_type = classify(&text, RUNTIME_RULES).unwrap_or_default();
    let cloud_provider = classify(&text, CLOUD_RULES).unwrap_or_default();
    let name = extract_name(&text);

    debug!(
        name = %name,
        runtime = %runtime_type,
        cloud = %cloud_provider,
        "Extracted deployment intent"
    );

    DeploymentConfig::new(name)
        .with_runtime(runtime_type)
        .with_cloud(cloud_provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::DEFAULT_PORT;
    use yare::parameterized;

    #[parameterized(
        flask = { "Deploy my Flask app on AWS", RuntimeType::Flask },
        node = { "Deploy Node.js API", RuntimeType::NodeJs },
        javascript = { "ship the javascript frontend", RuntimeType::NodeJs },
        django = { "Deploy Django web app", RuntimeType::Django },
        plain = { "Deploy my service", RuntimeType::Python },
        flask_beats_node = { "flask backend with node tooling", RuntimeType::Flask },
        node_beats_django = { "django admin behind a node proxy", RuntimeType::NodeJs },
    )]
    fn test_runtime_detection(text: &str, expected: RuntimeType) {
        assert_eq!(extract(text).runtime_type, expected);
    }

    #[parameterized(
        aws_default = { "Deploy my Flask app", CloudProvider::Aws },
        gcp = { "deploy to GCP please", CloudProvider::Gcp },
        google = { "run it on Google cloud", CloudProvider::Gcp },
        azure = { "Azure hosting", CloudProvider::Azure },
        microsoft = { "microsoft cloud", CloudProvider::Azure },
        gcp_beats_azure = { "google or azure", CloudProvider::Gcp },
    )]
    fn test_cloud_detection(text: &str, expected: CloudProvider) {
        assert_eq!(extract(text).cloud_provider, expected);
    }

    #[test]
    fn test_name_skips_short_tokens_and_stop_words() {
        assert_eq!(extract("Deploy my Flask app on AWS").name, "flask");
        assert_eq!(extract("Deploy this application using containers").name, "containers");
        assert_eq!(extract("Deploy Node.js API").name, "node.js");
    }

    #[test]
    fn test_name_falls_back_to_placeholder() {
        assert_eq!(extract("").name, DEFAULT_APP_NAME);
        assert_eq!(extract("deploy my app now").name, DEFAULT_APP_NAME);
        assert_eq!(extract("   ").name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_name_is_never_empty() {
        for text in ["", "a b c", "deploy this", "Deploy Django web app", "\t\n"] {
            assert!(!extract(text).name.is_empty(), "empty name for {:?}", text);
        }
    }

    #[test]
    fn test_extractor_never_sets_type_specific_port() {
        assert_eq!(extract("Deploy Node.js API").port, DEFAULT_PORT);
        assert_eq!(extract("Deploy Django web app").port, DEFAULT_PORT);
    }

    #[test]
    fn test_classify_returns_none_without_match() {
        assert_eq!(classify("nothing here", RUNTIME_RULES), None);
        assert_eq!(classify("nothing here", CLOUD_RULES), None);
    }
}
