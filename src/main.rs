use autodeploy::cli::commands::{CliArgs, Commands};
use autodeploy::cli::handlers::{handle_demo, handle_generate, handle_interactive};
use autodeploy::util::logging::{init_logging, parse_level, LoggingConfig};
use autodeploy::{AutodeployConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let config = AutodeployConfig::default();
    init_logging_from_args(&args, &config);

    debug!("autodeploy v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Some(Commands::Generate(generate_args)) => handle_generate(generate_args, &config),
        Some(Commands::Demo(demo_args)) => handle_demo(demo_args, &config),
        None => handle_interactive(&config),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &AutodeployConfig) {
    let mut logging = LoggingConfig::from_config(config);

    logging.level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        logging.level
    };

    init_logging(logging);
}
