use anyhow::Context;
use chrono::{Local, Utc};
use clap::Parser;
use nhl_shot_chart::{
    build_from_feed, AppConfig, AppResult, ChartOptions, ChartTitle, FeedProvider,
    FileFeedProvider, GameId, GameMeta, JsonExporter, NhlApiClient, Renderer, SummaryPrinter,
};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use sysinfo::System;

const LOG_TARGET_STARTUP: &str = "nhl_shot_chart::startup";

#[derive(Parser)]
#[command(name = "nhl-shot-chart")]
#[command(about = "Build shot charts from NHL play-by-play feeds", long_about = None)]
struct Cli {
    /// Game ids, e.g. 2022020728
    #[arg(required = true)]
    game_ids: Vec<GameId>,

    /// Read feeds from {DIR}/{game_id}.json instead of the NHL API
    #[arg(long, value_name = "DIR")]
    feed_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output directory for --json
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Export each chart result as JSON
    #[arg(long)]
    json: bool,

    /// Do not draw goals
    #[arg(long)]
    hide_goals: bool,

    /// Do not draw shots on goal
    #[arg(long)]
    hide_shots: bool,

    /// Do not draw missed shots
    #[arg(long)]
    hide_missed: bool,

    /// Show start times in UTC instead of the local time zone
    #[arg(long)]
    utc: bool,
}

/// Daily rolling log under `{config_dir}/NHLShotChart/logs/`, mirrored to
/// stderr in debug builds. `RUST_LOG` overrides the default filter.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = AppConfig::app_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from("logs"));
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nhl_shot_chart=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(rolling::daily(&log_dir, "nhl-shot-chart.log"))
        .with_ansi(false)
        .with_thread_ids(true)
        .with_line_number(true);

    // stdout stays reserved for chart summaries
    let console_layer = cfg!(debug_assertions).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::debug!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let architecture = std::env::consts::ARCH;

    tracing::info!(target: LOG_TARGET_STARTUP, "Starting nhl-shot-chart v{} ({})", version, architecture);
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {}", os_name);
    tracing::debug!(
        target: LOG_TARGET_STARTUP,
        "Worker threads: {}",
        rayon::current_num_threads()
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    initialize_tracing();
    log_runtime_environment();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .with_context(|| {
        format!(
            "Failed to load configuration ({})",
            cli.config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(AppConfig::config_path_display)
        )
    })?;

    if cli.hide_goals {
        config.visibility.goals = false;
    }
    if cli.hide_shots {
        config.visibility.shots_on_goal = false;
    }
    if cli.hide_missed {
        config.visibility.missed_shots = false;
    }

    let provider: Box<dyn FeedProvider> =
        match cli.feed_dir.clone().or_else(|| config.feed_dir.as_ref().map(PathBuf::from)) {
            Some(dir) => Box::new(FileFeedProvider::new(dir)),
            None => Box::new(NhlApiClient::new(
                config.api_base_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            )),
        };
    tracing::info!("Using feed provider: {}", provider.name());

    let mut renderers: Vec<Box<dyn Renderer>> = vec![Box::new(SummaryPrinter)];
    if cli.json {
        let exporter = JsonExporter::new(cli.out.clone().unwrap_or_else(|| config.output_dir()));
        tracing::info!("Exporting JSON to {}", exporter.output_dir().display());
        renderers.push(Box::new(exporter));
    }

    let options = config.chart_options();

    // Each game gets its own pipeline run and accumulator
    let failures: Vec<(GameId, anyhow::Error)> = cli
        .game_ids
        .par_iter()
        .filter_map(|&game_id| {
            process_game(game_id, provider.as_ref(), &renderers, &options, cli.utc)
                .err()
                .map(|e| (game_id, e))
        })
        .collect();

    if failures.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    for (game_id, e) in &failures {
        tracing::error!("Game {} failed: {:#}", game_id, e);
        eprintln!("✗ Game {}: {:#}", game_id, e);
    }
    Ok(ExitCode::FAILURE)
}

fn process_game(
    game_id: GameId,
    provider: &dyn FeedProvider,
    renderers: &[Box<dyn Renderer>],
    options: &ChartOptions,
    utc: bool,
) -> AppResult<()> {
    let feed = provider
        .fetch_game_feed(game_id)
        .with_context(|| format!("Failed to fetch feed for game {}", game_id))?;

    let meta = if utc {
        GameMeta::from_feed(&feed, &Utc)
    } else {
        GameMeta::from_feed(&feed, &Local)
    }
    .with_context(|| format!("Failed to resolve metadata for game {}", game_id))?;

    let result = build_from_feed(&feed, meta, options);
    let title = ChartTitle::from_result(&result);

    for renderer in renderers {
        renderer
            .render(game_id, &result, &title)
            .with_context(|| format!("{} failed for game {}", renderer.name(), game_id))?;
    }

    Ok(())
}
