use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, FromArgMatches, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use housing_eligibility::api::{AppState, create_router};
use housing_eligibility::calculation::evaluate;
use housing_eligibility::config::ConfigLoader;
use housing_eligibility::error::EngineError;
use housing_eligibility::models::HouseholdProfile;
use housing_eligibility::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "housing-eligibility",
    about = "Subsidized-housing eligibility service",
    version
)]
struct Cli {
    /// Directory with program.yaml, thresholds.yaml and bonuses.yaml (built-in tables if unset)
    #[arg(long, global = true, env = "ELIGIBILITY_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate one household profile from a JSON file and print the result
    Check {
        /// Path to a JSON household profile
        #[arg(long)]
        profile: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "ELIGIBILITY_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, env = "ELIGIBILITY_PORT", default_value_t = 8000)]
    port: u16,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "ELIGIBILITY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Returns the requested command, or `serve` when none was given.
    fn into_command(self) -> Result<Command, clap::Error> {
        match self.command {
            Some(command) => Ok(command),
            None => ServeArgs::from_env().map(Command::Serve),
        }
    }
}

impl ServeArgs {
    /// Resolves serve settings from environment variables and defaults only.
    fn from_env() -> Result<Self, clap::Error> {
        let matches = Self::augment_args(clap::Command::new("serve"))
            .try_get_matches_from(["serve"])?;
        Self::from_arg_matches(&matches)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("invalid bind address '{0}'")]
    Address(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Args(#[from] clap::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let loader = load_config(cli.config_dir.as_deref())?;

    match cli.into_command()? {
        Command::Serve(args) => serve(loader, args).await,
        Command::Check { profile } => {
            println!("{}", check(&loader, &profile)?);
            Ok(())
        }
    }
}

fn load_config(dir: Option<&Path>) -> Result<ConfigLoader, EngineError> {
    match dir {
        Some(dir) => ConfigLoader::load(dir),
        None => Ok(ConfigLoader::standard()),
    }
}

async fn serve(loader: ConfigLoader, args: ServeArgs) -> Result<(), CliError> {
    telemetry::init(&args.log_level)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", args.host, args.port)))?;

    info!(
        program = %loader.program().code,
        version = %loader.program().version,
        child_bonus_reporting = ?loader.child_bonus_reporting(),
        "Loaded eligibility tables"
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Eligibility service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Evaluates the profile stored at `path` and renders the result as pretty JSON.
fn check(loader: &ConfigLoader, path: &Path) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path)?;
    let profile: HouseholdProfile = serde_json::from_str(&content)?;
    let evaluation = evaluate(&profile, loader.config())?;
    Ok(serde_json::to_string_pretty(&evaluation.result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn write_profile(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "housing-eligibility-cli-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_no_subcommand_reads_serve_settings_from_env() {
        // SAFETY: no other test in this binary reads these variables.
        unsafe {
            std::env::set_var("ELIGIBILITY_HOST", "0.0.0.0");
            std::env::set_var("ELIGIBILITY_PORT", "18123");
        }
        let command = Cli::try_parse_from(["housing-eligibility"])
            .unwrap()
            .into_command();
        unsafe {
            std::env::remove_var("ELIGIBILITY_HOST");
            std::env::remove_var("ELIGIBILITY_PORT");
        }

        match command.unwrap() {
            Command::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 18123);
                assert_eq!(args.log_level, "info");
            }
            other => panic!("Expected Serve, got {:?}", other),
        }
    }

    #[test]
    fn test_serve_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "housing-eligibility",
            "serve",
            "--host",
            "10.0.0.1",
            "--port",
            "9000",
            "--log-level",
            "debug",
        ])
        .unwrap();

        match cli.into_command().unwrap() {
            Command::Serve(args) => {
                assert_eq!(args.host, "10.0.0.1");
                assert_eq!(args.port, 9000);
                assert_eq!(args.log_level, "debug");
            }
            other => panic!("Expected Serve, got {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_profile() {
        assert!(Cli::try_parse_from(["housing-eligibility", "check"]).is_err());
    }

    #[test]
    fn test_config_dir_is_global() {
        let cli = Cli::try_parse_from([
            "housing-eligibility",
            "check",
            "--profile",
            "household.json",
            "--config-dir",
            "./config/default",
        ])
        .unwrap();

        assert_eq!(cli.config_dir.as_deref(), Some(Path::new("./config/default")));
        let loader = load_config(cli.config_dir.as_deref()).unwrap();
        assert_eq!(loader.program().code, "default");
    }

    #[test]
    fn test_missing_config_dir_is_reported() {
        assert!(matches!(
            load_config(Some(Path::new("/nonexistent/path"))),
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_check_evaluates_profile_file() {
        let path = write_profile(
            "group-a",
            r#"{
                "adultCount": 1,
                "childCount": 2,
                "isMarried": true,
                "isRetired": false,
                "isDisabled": false,
                "grossIncome": "64668",
                "netIncome": "36600"
            }"#,
        );

        let output = check(&ConfigLoader::standard(), &path).unwrap();
        let result: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(result["group"], "GroupA");
        assert_eq!(result["reasonCode"], "group-a-qualified");
        assert_eq!(result["adjustedLimits"]["grossB"], "87543");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_check_rejects_malformed_profile() {
        let path = write_profile("malformed", r#"{"adultCount": 1"#);

        let result = check(&ConfigLoader::standard(), &path);
        assert!(matches!(result, Err(CliError::Json(_))));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_check_missing_profile_file() {
        let result = check(
            &ConfigLoader::standard(),
            Path::new("/nonexistent/household.json"),
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
