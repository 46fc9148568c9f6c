//! affirmation-studio - builds a design specification from a JSON request.
//!
//! Reads a `BuildSpecRequest` from the file given as argument, or from stdin
//! when none is given, and prints the specification as JSON. With `--brief`
//! the rendered art-direction brief is printed instead.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;

use affirmation_studio::adapters::SystemClock;
use affirmation_studio::application::{BuildSpecCommand, BuildSpecHandler};
use affirmation_studio::config::{
    AppConfig, ConfigError, LogFormat, LoggingConfig, ValidationError as ConfigValidationError,
};
use affirmation_studio::domain::registry::Registry;
use affirmation_studio::domain::spec::{BuildSpecRequest, SpecBuilder, SpecError};

#[derive(Debug, Parser)]
#[command(name = "affirmation-studio", version, about = "Build affirmation design specifications")]
struct Args {
    /// Request JSON file; stdin is read when omitted
    input: Option<PathBuf>,

    /// Print the rendered brief instead of the specification
    #[arg(long)]
    brief: bool,

    /// Print the specification on a single line
    #[arg(long, conflicts_with = "brief")]
    compact: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to read request: {0}")]
    ReadInput(#[source] io::Error),

    #[error("malformed request: {0}")]
    Request(#[source] serde_json::Error),

    #[error("failed to encode specification: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), CliError> {
    let args = Args::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_logging(&config.logging)?;

    let request = match &args.input {
        Some(path) => read_request_file(path)?,
        None => parse_request(io::stdin().lock())?,
    };

    let output = run(&args, &config, request)?;
    println!("{}", output);
    Ok(())
}

/// Logs go to stderr so stdout carries only the result.
fn init_logging(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter = logging.env_filter()?;
    let result = match logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };
    result.map_err(|e| CliError::Logging(e.to_string()))
}

fn read_request_file(path: &Path) -> Result<BuildSpecRequest, CliError> {
    let file = fs::File::open(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(file)
}

fn parse_request(mut reader: impl Read) -> Result<BuildSpecRequest, CliError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(CliError::ReadInput)?;
    serde_json::from_str(&raw).map_err(CliError::Request)
}

fn run(args: &Args, config: &AppConfig, request: BuildSpecRequest) -> Result<String, CliError> {
    let builder = SpecBuilder::new(
        Registry::shared(),
        config.engine.keyword_detector(),
        Arc::new(SystemClock::new()),
    );
    let handler = BuildSpecHandler::new(Arc::new(builder));
    let result = handler.handle(BuildSpecCommand { request })?;

    if args.brief {
        return Ok(result.brief);
    }
    let encoded = if args.compact {
        serde_json::to_string(&result.specification)
    } else {
        serde_json::to_string_pretty(&result.specification)
    };
    encoded.map_err(CliError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use affirmation_studio::domain::spec::DesignSpecification;
    use std::io::Write;

    fn args(brief: bool, compact: bool) -> Args {
        Args {
            input: None,
            brief,
            compact,
        }
    }

    #[test]
    fn parses_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme":"clarity","mood":"monochrome","seed":5}}"#).unwrap();

        let request = read_request_file(file.path()).unwrap();

        assert_eq!(request.theme, "clarity");
        assert_eq!(request.mood, "monochrome");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_request_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }

    #[test]
    fn malformed_json_is_a_request_error() {
        let err = parse_request("{\"theme\":".as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::Request(_)));
    }

    #[test]
    fn prints_specification_json() {
        let request = parse_request(r#"{"theme":"wisdom","mood":"vintage","seed":"owl"}"#.as_bytes()).unwrap();
        let output = run(&args(false, true), &AppConfig::default(), request).unwrap();

        let spec: DesignSpecification = serde_json::from_str(&output).unwrap();
        assert!(!spec.headline().is_empty());
        assert!(!output.contains('\n'));
    }

    #[test]
    fn prints_brief_when_requested() {
        let request = BuildSpecRequest::new("renewal", "forest").with_seed(8u64);
        let output = run(&args(true, false), &AppConfig::default(), request).unwrap();
        assert!(output.starts_with("Create a gallery-quality affirmation art print"));
    }

    #[test]
    fn unknown_theme_surfaces_spec_error() {
        let request = BuildSpecRequest::new("nostalgia", "forest");
        let err = run(&args(false, false), &AppConfig::default(), request).unwrap_err();
        assert_eq!(err.to_string(), "Unknown theme: 'nostalgia'");
    }
}
