//! Command handlers; each returns the process exit code

use super::commands::{DemoArgs, GenerateArgs, OutputFormatArg};
use super::output::{dockerfile_preview, OutputFormat, OutputFormatter};
use crate::config::AutodeployConfig;
use crate::output::ArtifactWriter;
use crate::pipeline::{DeploymentPipeline, PipelineResult};
use crate::progress::LoggingHandler;
use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use tracing::error;

/// Fixed demo scenarios: request text and optional repository
pub const DEMO_SCENARIOS: &[(&str, Option<&str>)] = &[
    (
        "Deploy my Flask app on AWS",
        Some("https://github.com/Arvo-AI/hello_world"),
    ),
    ("Deploy Node.js application using containers", None),
    ("Deploy Django web app", None),
];

pub fn handle_generate(args: &GenerateArgs, config: &AutodeployConfig) -> i32 {
    exit_code(run_generate(args, config))
}

pub fn handle_demo(args: &DemoArgs, config: &AutodeployConfig) -> i32 {
    exit_code(run_demo(args, config))
}

/// Prompts for a description and an optional repository URL on stdin
pub fn handle_interactive(config: &AutodeployConfig) -> i32 {
    exit_code(run_interactive(config, &mut io::stdin().lock(), &mut io::stdout()))
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn pipeline(config: &AutodeployConfig) -> DeploymentPipeline {
    DeploymentPipeline::with_timeout(config.fetch_timeout()).with_progress(LoggingHandler)
}

fn run_generate(args: &GenerateArgs, config: &AutodeployConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(timeout) = args.timeout {
        config.fetch_timeout_secs = timeout;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    config.validate()?;

    if args.description.trim().is_empty() {
        bail!("Please enter a deployment description");
    }

    let pipeline = pipeline(&config);
    let result = match &args.repo_path {
        Some(path) => pipeline.run_with_directory(&args.description, path),
        None => pipeline.run(&args.description, args.repo_url.as_deref()),
    };

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    let written = if args.dry_run {
        None
    } else {
        let writer = ArtifactWriter::new(config.deployment_dir(&result.config.name));
        Some(writer.write(&result)?)
    };

    println!("{}", formatter.format(&result, written.as_ref())?);
    Ok(())
}

fn run_demo(args: &DemoArgs, config: &AutodeployConfig) -> Result<()> {
    config.validate()?;
    let pipeline = pipeline(config);

    println!("Demo Mode - Auto Deployment Tool");
    println!("{}", "=".repeat(50));

    for (i, (description, repo)) in DEMO_SCENARIOS.iter().enumerate() {
        let repo = if args.offline { None } else { *repo };

        println!();
        println!("Demo Scenario {}: {}", i + 1, description);
        if let Some(repo) = repo {
            println!("Repository: {}", repo);
        }

        let result = pipeline.run(description, repo);
        print_demo_result(&result);

        if i + 1 < DEMO_SCENARIOS.len() {
            println!("{}", "-".repeat(40));
        }
    }

    Ok(())
}

fn print_demo_result(result: &PipelineResult) {
    let config = &result.config;
    println!("Configuration generated successfully");
    println!("   • App: {} ({})", config.name, config.runtime_type);
    println!("   • Port: {}", config.port);
    println!("   • Files: {}", result.artifacts.len());
    println!("Dockerfile preview:");
    for line in dockerfile_preview(&result.artifacts, 2) {
        println!("   {}", line);
    }
    println!("   ...");
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn run_interactive<R: BufRead, W: Write>(
    config: &AutodeployConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Simple Auto Deployment Tool")?;
    writeln!(output, "{}", "=".repeat(40))?;

    let description = prompt(input, output, "Describe your deployment needs: ")?;
    if description.is_empty() {
        bail!("Please enter a deployment description");
    }

    let repo_url = prompt(input, output, "Code repository URL (optional): ")?;
    let args = GenerateArgs {
        description,
        repo_url: (!repo_url.is_empty()).then_some(repo_url),
        repo_path: None,
        output_dir: None,
        format: OutputFormatArg::Human,
        dry_run: false,
        timeout: None,
    };

    run_generate(&args, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AutodeployConfig {
        AutodeployConfig {
            fetch_timeout_secs: 2,
            output_dir: dir.path().to_path_buf(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    fn generate_args(description: &str) -> GenerateArgs {
        GenerateArgs {
            description: description.to_string(),
            repo_url: None,
            repo_path: None,
            output_dir: None,
            format: OutputFormatArg::Human,
            dry_run: false,
            timeout: None,
        }
    }

    #[test]
    fn test_generate_writes_deployment_dir() {
        let temp = TempDir::new().unwrap();
        let code = handle_generate(&generate_args("Deploy my Flask app on AWS"), &config_in(&temp));

        assert_eq!(code, 0);
        assert!(temp.path().join("deployment_flask/Dockerfile").is_file());
        assert!(temp.path().join("deployment_flask/README.md").is_file());
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut args = generate_args("Deploy my Flask app on AWS");
        args.dry_run = true;

        assert_eq!(handle_generate(&args, &config_in(&temp)), 0);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_with_local_repository() {
        let temp = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();
        std::fs::write(repo.path().join("package.json"), "{}").unwrap();

        let mut args = generate_args("Deploy the storefront");
        args.repo_path = Some(repo.path().to_path_buf());

        assert_eq!(handle_generate(&args, &config_in(&temp)), 0);
        let dockerfile =
            std::fs::read_to_string(temp.path().join("deployment_storefront/Dockerfile")).unwrap();
        assert!(dockerfile.contains("EXPOSE 3000"));
    }

    #[test]
    fn test_generate_rejects_invalid_timeout() {
        let temp = TempDir::new().unwrap();
        let mut args = generate_args("Deploy my Flask app");
        args.timeout = Some(0);

        assert_eq!(handle_generate(&args, &config_in(&temp)), 1);
    }

    #[test]
    fn test_generate_output_dir_override() {
        let temp = TempDir::new().unwrap();
        let mut args = generate_args("Deploy Django web app");
        args.output_dir = Some(temp.path().join("nested"));

        let config = AutodeployConfig {
            output_dir: PathBuf::from("/nonexistent-base"),
            ..config_in(&temp)
        };
        assert_eq!(handle_generate(&args, &config), 0);
        assert!(temp.path().join("nested/deployment_django/main.tf").is_file());
    }

    #[test]
    fn test_interactive_reads_description_and_skips_empty_url() {
        let temp = TempDir::new().unwrap();
        let mut input = Cursor::new("Deploy Django web app\n\n");
        let mut output = Vec::new();

        run_interactive(&config_in(&temp), &mut input, &mut output).unwrap();

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Describe your deployment needs: "));
        assert!(prompts.contains("Code repository URL (optional): "));
        assert!(temp.path().join("deployment_django/deploy.sh").is_file());
    }

    #[test]
    fn test_interactive_requires_description() {
        let temp = TempDir::new().unwrap();
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        assert!(run_interactive(&config_in(&temp), &mut input, &mut output).is_err());
    }

    #[test]
    fn test_demo_offline() {
        let temp = TempDir::new().unwrap();
        assert_eq!(handle_demo(&DemoArgs { offline: true }, &config_in(&temp)), 0);
    }
}
