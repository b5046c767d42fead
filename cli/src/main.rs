//! CLI entrypoint for Hike Predictor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hike_application::{
    InMemoryPredictionCache, NoTelemetry, PredictionIdCache, SubmitPredictionUseCase,
    TelemetrySink,
};
use hike_domain::{FormVariant, OutputFormat};
use hike_infrastructure::{
    ConfigLoader, FileConfig, FilePredictionIdCache, HttpPredictionGateway, JsonlTelemetrySink,
};
use hike_presentation::{AnswersRunner, Cli, HikeWizard, load_answers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Hike Predictor");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // CLI flags take precedence over every file and the environment
    if let Some(url) = &cli.api_url {
        config.api.base_url = Some(url.clone());
    }
    if let Some(variant) = cli.variant {
        config.form.variant = variant.into();
    }
    if let Some(output) = cli.output {
        config.output.format = Some(output.into());
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    let base_url = match config.validate() {
        Ok(url) => url.to_string(),
        Err(e) => bail!("{}", e),
    };

    if !config.output.use_color() {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpPredictionGateway::new(
        &base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )?);
    let cache = build_cache(&config);
    let telemetry = build_telemetry(&config);
    let variant: FormVariant = config.form.variant;
    let output: OutputFormat = config.output.format();

    info!("Prediction service: {} ({} form)", gateway.base_url(), variant);

    // Answers mode
    if let Some(path) = &cli.answers {
        let answers = load_answers(path)?;
        let submit = SubmitPredictionUseCase::new(gateway)
            .with_telemetry(telemetry)
            .with_cache(cache);
        let rendered = AnswersRunner::new(submit)
            .with_variant(variant)
            .with_output(output)
            .with_progress(!cli.quiet && output == OutputFormat::Text)
            .run(&answers)
            .await?;
        println!("{}", rendered);
        return Ok(());
    }

    // Interactive mode
    let mut wizard = HikeWizard::new(gateway)
        .with_telemetry(telemetry)
        .with_cache(cache)
        .with_variant(variant)
        .with_output(output)
        .with_progress(!cli.quiet);
    if cli.plain_progress {
        wizard = wizard.with_simple_progress();
    }

    wizard.run().await?;
    Ok(())
}

fn build_cache(config: &FileConfig) -> Arc<dyn PredictionIdCache> {
    if !config.cache.enabled {
        return Arc::new(InMemoryPredictionCache::new());
    }
    match config
        .cache
        .path
        .as_ref()
        .map(PathBuf::from)
        .or_else(FilePredictionIdCache::default_path)
    {
        Some(path) => Arc::new(FilePredictionIdCache::new(path)),
        None => {
            warn!("No data directory available; prediction id will not be persisted");
            Arc::new(InMemoryPredictionCache::new())
        }
    }
}

fn build_telemetry(config: &FileConfig) -> Arc<dyn TelemetrySink> {
    if !config.telemetry.enabled {
        return Arc::new(NoTelemetry);
    }
    let sink = config
        .telemetry
        .log_path
        .as_ref()
        .map(PathBuf::from)
        .or_else(JsonlTelemetrySink::default_path)
        .and_then(JsonlTelemetrySink::new);
    match sink {
        Some(sink) => {
            info!("Telemetry events written to {}", sink.path().display());
            Arc::new(sink)
        }
        None => {
            warn!("Telemetry enabled but no log file could be opened");
            Arc::new(NoTelemetry)
        }
    }
}
