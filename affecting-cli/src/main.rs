use clap::Parser;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, Map, Source, Value, ValueKind};
use slog::{Drain, Level, Logger, debug};
use std::path::PathBuf;
use std::sync::Arc;

use affecting_cli::CommandContext;
use affecting_cli::commands::{CommandOutput, EvaluatorCommands};
use affecting_cli::common::StdResult;

const ENV_PREFIX: &str = "AFFECTING";

/// CLI args
#[derive(Parser, Debug, Clone)]
#[clap(name = "affecting-cli")]
#[clap(
    about = "This program runs the evaluators over a configured collaborator.",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// Available commands
    #[clap(subcommand)]
    command: EvaluatorCommands,

    /// Run Mode.
    #[clap(long, env = "RUN_MODE", default_value = "dev")]
    run_mode: String,

    /// Verbosity level (-v=warning, -vv=info, -vvv=debug).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory where configuration file is located.
    #[clap(long, default_value = "./config")]
    config_directory: PathBuf,

    /// Override configuration collaborator value.
    #[clap(long, allow_negative_numbers = true)]
    val: Option<i32>,

    /// Override configuration static dependency value.
    #[clap(long, allow_negative_numbers = true)]
    static_dependency_value: Option<i32>,

    /// Enable JSON output for logs displayed according to verbosity level
    #[clap(long)]
    log_format_json: bool,
}

impl Args {
    fn execute(&self, root_logger: Logger) -> StdResult<CommandOutput> {
        self.execute_with_environment(Environment::with_prefix(ENV_PREFIX), root_logger)
    }

    fn execute_with_environment(
        &self,
        environment: Environment,
        root_logger: Logger,
    ) -> StdResult<CommandOutput> {
        debug!(
            root_logger,
            "Affecting CLI version: {}",
            env!("CARGO_PKG_VERSION")
        );
        let config_builder = self.config_builder(environment, &root_logger)?;
        let context = CommandContext::new(config_builder, root_logger);

        self.command.execute(&context)
    }

    /// Assemble the configuration sources, from lowest to highest precedence: defaults,
    /// run mode configuration file, environment, command line arguments.
    fn config_builder(
        &self,
        environment: Environment,
        logger: &Logger,
    ) -> StdResult<ConfigBuilder<DefaultState>> {
        debug!(logger, "Run Mode: {}", self.run_mode);
        let filename = format!("{}/{}.json", self.config_directory.display(), self.run_mode);
        debug!(logger, "Reading configuration file '{filename}'.");

        let config_builder = config::Config::builder()
            .set_default("val", 0i64)?
            .add_source(config::File::with_name(&filename).required(false))
            .add_source(environment)
            .add_source(self.clone());

        Ok(config_builder)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Error,
            1 => Level::Warning,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn build_logger(&self) -> Logger {
        let drain = if self.log_format_json {
            let drain = slog_bunyan::with_name("affecting-cli", std::io::stderr())
                .set_pretty(false)
                .build()
                .fuse();
            let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

            slog_async::Async::new(drain).build().fuse()
        } else {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = slog_term::CompactFormat::new(decorator).build().fuse();
            let drain = slog::LevelFilter::new(drain, self.log_level()).fuse();

            slog_async::Async::new(drain).build().fuse()
        };

        Logger::root(Arc::new(drain), slog::o!())
    }
}

impl Source for Args {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut map = Map::new();
        let namespace = "clap arguments".to_string();

        if let Some(val) = self.val {
            map.insert(
                "val".to_string(),
                Value::new(Some(&namespace), ValueKind::from(i64::from(val))),
            );
        }
        if let Some(static_dependency_value) = self.static_dependency_value {
            map.insert(
                "static_dependency_value".to_string(),
                Value::new(
                    Some(&namespace),
                    ValueKind::from(i64::from(static_dependency_value)),
                ),
            );
        }

        Ok(map)
    }
}

fn main() -> StdResult<()> {
    let args = Args::parse();
    let logger = args.build_logger();

    let output = args.execute(logger)?;
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}
