use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Generate deployment artifacts from a plain-language request
#[derive(Parser, Debug)]
#[command(
    name = "autodeploy",
    about = "Generate deployment artifacts from a plain-language request",
    version,
    long_about = "autodeploy reads a short deployment request such as \"Deploy my Flask app on AWS\", \
                  optionally inspects the application's repository, and writes a Dockerfile, \
                  Terraform configuration, deploy script, docker-compose file and README.\n\n\
                  Run without a subcommand for interactive mode."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate deployment artifacts",
        long_about = "Extracts intent from the description, refines it by inspecting the \
                      repository when one is given, and writes the artifacts to \
                      deployment_<name>/.\n\n\
                      Examples:\n  \
                      autodeploy generate \"Deploy my Flask app on AWS\"\n  \
                      autodeploy generate \"Deploy Node.js API\" https://github.com/user/repo\n  \
                      autodeploy generate \"Deploy Django web app\" --repo-path ./site --dry-run"
    )]
    Generate(GenerateArgs),

    #[command(about = "Run the built-in demo scenarios without writing files")]
    Demo(DemoArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(value_name = "DESCRIPTION", help = "Plain-language deployment request")]
    pub description: String,

    #[arg(value_name = "REPO_URL", help = "Repository URL to inspect (optional)")]
    pub repo_url: Option<String>,

    #[arg(
        long,
        value_name = "DIR",
        conflicts_with = "repo_url",
        help = "Inspect a local directory instead of downloading a repository"
    )]
    pub repo_path: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Base directory for deployment_<name>/ (default: AUTODEPLOY_OUTPUT_DIR or .)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Print the report without writing any files")]
    pub dry_run: bool,

    #[arg(long, value_name = "SECONDS", help = "Repository download timeout")]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    #[arg(long, help = "Skip the scenario that downloads a public repository")]
    pub offline: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Yaml => Self::Yaml,
            OutputFormatArg::Human => Self::Human,
        }
    }
}
