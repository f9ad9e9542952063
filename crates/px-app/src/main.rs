use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use px_core::config::RenderConfig;
use px_source::ImageFileDecoder;

pub mod cli;
pub mod pipeline;

/// Fichier de configuration lu s'il existe et si `--config` est absent.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn main() -> ExitCode {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr, jamais mélangé à l'art sur stdout)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(failed_saves) => {
            if failed_saves > 0 {
                log::info!("{failed_saves} save(s) failed, rendering itself succeeded");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one conversion. Returns the number of failed saves.
fn run(cli: &cli::Cli) -> Result<usize> {
    // 3. Charger la config puis appliquer les overrides CLI
    let config = apply_overrides(resolve_config(cli)?, cli);

    // 4. Pipeline complet
    let stdout = std::io::stdout();
    if config.color_enabled && !stdout.is_tty() {
        log::debug!("--color with a non-terminal stdout, markers are written verbatim");
    }
    let mut stdout = stdout.lock();
    let pipeline = pipeline::Pipeline::new(ImageFileDecoder, config);
    let report = pipeline.run(&cli.image, cli.output.as_deref(), &mut stdout)?;

    let mut failed = 0;
    for err in report.failures() {
        eprintln!("Error: {err}");
        failed += 1;
    }
    Ok(failed)
}

/// Resolve config: explicit --config must exist, the default file is optional.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if let Some(ref path) = cli.config {
        return px_core::config::load_config(path);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        px_core::config::load_config(default_path)
    } else {
        log::debug!(
            "no config at {}, using defaults",
            default_path.display()
        );
        Ok(RenderConfig::default())
    }
}

/// CLI flags win over the config file.
fn apply_overrides(mut config: RenderConfig, cli: &cli::Cli) -> RenderConfig {
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(ref chars) = cli.chars {
        config.charset.clone_from(chars);
    }
    if cli.color {
        config.color_enabled = true;
    }
    if let Some(ref dir) = cli.output_dir {
        config.output_dir.clone_from(dir);
    }
    config
}
