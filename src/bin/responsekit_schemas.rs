use anyhow::Context;
use clap::{Parser, ValueEnum};
use responsekit::config::Settings;
use responsekit::models::{ErrorModel, ErrorResponse, ReadyResponse};
use responsekit::otel::{init_logging_with_config, LogConfig};
use responsekit::schema::{components, JsonSchema};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Print the JSON Schema documents of the response models
#[derive(Parser)]
#[command(name = "responsekit-schemas")]
#[command(about = "Print the response model schemas as an OpenAPI components document", long_about = None)]
struct Cli {
    /// Settings file (YAML); environment variables still override it
    #[arg(short, long, env = "RESPONSEKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Print a single model schema instead of the components document
    #[arg(short, long, value_enum)]
    model: Option<Model>,

    /// Print on one line
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Model {
    #[value(name = "ReadyResponse")]
    ReadyResponse,
    #[value(name = "ErrorModel")]
    ErrorModel,
    #[value(name = "ErrorResponse")]
    ErrorResponse,
}

impl Model {
    fn schema(self) -> Value {
        match self {
            Model::ReadyResponse => ReadyResponse::schema(),
            Model::ErrorModel => ErrorModel::schema(),
            Model::ErrorResponse => ErrorResponse::schema(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::from_env(),
    };
    init_logging_with_config(&LogConfig::for_settings(&settings))?;

    let document = match cli.model {
        Some(model) => model.schema(),
        None => components(&settings),
    };
    info!(project = %settings.project_name, model = ?cli.model, "printing schema");

    let text = if cli.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .context("Failed to serialize schema")?;
    println!("{text}");
    Ok(())
}
