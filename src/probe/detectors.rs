//! File detectors - per-file heuristics for runtime type and listening port
//!
//! Each file is offered to the detector table in order; the first detector whose
//! file-name predicate matches handles it. Detection favors recall over precision:
//! the word "port" anywhere before four digits counts as a port declaration.

use super::signal::{RepoSignal, SignalAccumulator, SignalUpdate};
use crate::deployment::RuntimeType;
use crate::fs::{walk_files, FileSystem};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const PORT_PATTERN: &str = r"(?i)port.*?(\d{4})";

pub struct FileDetector {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    /// Whether `detect` needs the file content
    pub reads_content: bool,
    pub detect: fn(&str) -> Option<SignalUpdate>,
}

pub const DETECTORS: &[FileDetector] = &[
    FileDetector {
        name: "requirements",
        matches: is_requirements,
        reads_content: true,
        detect: detect_requirements,
    },
    FileDetector {
        name: "package-json",
        matches: is_package_json,
        reads_content: false,
        detect: detect_package_json,
    },
    FileDetector {
        name: "source-port",
        matches: is_source_file,
        reads_content: true,
        detect: detect_port,
    },
];

fn is_requirements(name: &str) -> bool {
    name == "requirements.txt"
}

fn is_package_json(name: &str) -> bool {
    name == "package.json"
}

fn is_source_file(name: &str) -> bool {
    name.ends_with(".py") || name.ends_with(".js")
}

fn detect_package_json(_content: &str) -> Option<SignalUpdate> {
    Some(SignalUpdate::runtime(RuntimeType::NodeJs, 3000))
}

fn detect_requirements(content: &str) -> Option<SignalUpdate> {
    let content = content.to_lowercase();
    if content.contains("flask") {
        Some(SignalUpdate::runtime(RuntimeType::Flask, 5000))
    } else if content.contains("django") {
        Some(SignalUpdate::runtime(RuntimeType::Django, 8000))
    } else {
        None
    }
}

fn port_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PORT_PATTERN).expect("port pattern is valid"))
}

fn detect_port(content: &str) -> Option<SignalUpdate> {
    let caps = port_regex().captures(content)?;
    let port = caps.get(1)?.as_str().parse().ok()?;
    Some(SignalUpdate::port(port))
}

/// Runs the detector table against one file, skipping it if unreadable
pub fn detect_file<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Option<SignalUpdate> {
    let file_name = path.file_name()?.to_str()?;
    let detector = DETECTORS.iter().find(|d| (d.matches)(file_name))?;

    let content = if detector.reads_content {
        match fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(file = %path.display(), error = %e, "Skipping unreadable file");
                return None;
            }
        }
    } else {
        String::new()
    };

    let update = (detector.detect)(&content);
    if let Some(update) = &update {
        debug!(
            file = %path.display(),
            detector = detector.name,
            runtime = ?update.runtime_type,
            port = ?update.port,
            "Detector fired"
        );
    }
    update
}

/// Folds every file under `root` into a single signal
pub fn scan_tree<F: FileSystem + ?Sized>(fs: &F, root: &Path) -> RepoSignal {
    let files = walk_files(fs, root);
    debug!(root = %root.display(), files = files.len(), "Scanning repository tree");

    files
        .iter()
        .filter_map(|path| detect_file(fs, path))
        .fold(SignalAccumulator::default(), SignalAccumulator::apply)
        .finish()
}
