//! CLI entry point for gearsmith.

use std::io::{self, Read};

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use gearsmith::cli::{Cli, OutputFormat};
use gearsmith::config::AppConfig;
use gearsmith::logging::init_logging;
use gearsmith::view::ViewModel;
use gearsmith::{script, tui};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gearsmith", &mut io::stdout());
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    let _guard = init_logging(Some(&config.logging.file), Some(&config.logging.level));
    info!(?config, "Configuration loaded");

    let Some(script_path) = cli.script.as_ref() else {
        return tui::run(&config);
    };

    let source = if cli.script_from_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("Failed to read script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(script_path)
            .wrap_err_with(|| format!("Failed to read {}", script_path.display()))?
    };

    let steps = script::parse(&source).wrap_err("Invalid script")?;
    let mut session = config.start_session();
    script::run(&mut session, &steps).wrap_err("Script rejected")?;
    info!(steps = steps.len(), "Script finished");

    print!("{}", render(&session.view(), cli.format)?);
    Ok(())
}

fn render(view: &ViewModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(view).wrap_err("Failed to serialize view to YAML"),
        OutputFormat::Json => serde_json::to_string_pretty(view)
            .map(|json| json + "\n")
            .wrap_err("Failed to serialize view to JSON"),
    }
}
