//! CLI integration tests
//!
//! These run the built binary and check exit codes, reports and written files.
//! No test passes a repository URL, so nothing here needs the network.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn autodeploy(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autodeploy"))
        .args(args)
        .current_dir(cwd)
        .env_remove("AUTODEPLOY_OUTPUT_DIR")
        .env_remove("AUTODEPLOY_FETCH_TIMEOUT")
        .env_remove("AUTODEPLOY_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute autodeploy")
}

#[test]
fn test_cli_help() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(&["--help"], temp.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("autodeploy"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("demo"));
}

#[test]
fn test_cli_version() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(&["--version"], temp.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_deployment_directory() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(&["generate", "Deploy my Flask app on AWS"], temp.path());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Success!"));
    assert!(stdout.contains("• Type: flask"));

    let dir = temp.path().join("deployment_flask");
    for file in ["Dockerfile", "main.tf", "deploy.sh", "docker-compose.yml", "README.md"] {
        assert!(dir.join(file).is_file(), "missing {}", file);
    }

    let dockerfile = fs::read_to_string(dir.join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("EXPOSE 5000"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(dir.join("deploy.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}

#[test]
fn test_generate_dry_run_json_report() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(
        &["generate", "Deploy Node.js API", "--dry-run", "--format", "json"],
        temp.path(),
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["runtime_type"], "nodejs");
    assert_eq!(report["config"]["port"], 5000);
    assert_eq!(report["signal"]["status"], "unknown");
    assert!(report.get("output_dir").is_none());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_yaml_report_with_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let output = autodeploy(
        &[
            "generate",
            "Deploy Django web app on Azure",
            "--output-dir",
            out.to_str().unwrap(),
            "--format",
            "yaml",
        ],
        temp.path(),
    );

    assert!(output.status.success());
    let report: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["cloud_provider"].as_str(), Some("azure"));
    assert!(out.join("deployment_django/main.tf").is_file());
}

#[test]
fn test_generate_with_repo_path() {
    let temp = TempDir::new().unwrap();
    let repo = TempDir::new().unwrap();
    fs::write(repo.path().join("requirements.txt"), "flask==3.0\n").unwrap();
    fs::write(repo.path().join("wsgi.py"), "app.run(host='0.0.0.0', port=9090)\n").unwrap();

    let output = autodeploy(
        &[
            "generate",
            "Deploy the billing service",
            "--repo-path",
            repo.path().to_str().unwrap(),
            "--dry-run",
            "--format",
            "json",
        ],
        temp.path(),
    );

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["runtime_type"], "flask");
    assert_eq!(report["config"]["port"], 9090);
    assert_eq!(report["signal"]["status"], "detected");
}

#[test]
fn test_generate_rejects_out_of_range_timeout() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(
        &["generate", "Deploy my Flask app", "--timeout", "500"],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fetch timeout"));
}

#[test]
fn test_repo_url_and_repo_path_conflict() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(
        &[
            "generate",
            "Deploy it",
            "https://github.com/user/repo",
            "--repo-path",
            ".",
        ],
        temp.path(),
    );

    assert!(!output.status.success());
}

#[test]
fn test_demo_offline() {
    let temp = TempDir::new().unwrap();
    let output = autodeploy(&["demo", "--offline"], temp.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Demo Scenario 1: Deploy my Flask app on AWS"));
    assert!(stdout.contains("Demo Scenario 3: Deploy Django web app"));
    assert!(!stdout.contains("Repository:"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
