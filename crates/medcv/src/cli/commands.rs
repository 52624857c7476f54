//! # CLI Layer
//!
//! This module is **one possible UI client** for medcv. It is the **only** place in the
//! codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Configuration**: Layer command-line flags over [`MedcvConfig`]
//! 3. **Context Setup**: Build the [`AppState`] the session works on
//! 4. **Dispatch**: Run the interactive loop, a script, or a one-shot command
//! 5. **Error Handling**: Bubble errors up to `main`, which prints them and exits 1

use anyhow::Context;
use clap::Parser;
use medcvapp::config::MedcvConfig;
use medcvapp::export::HtmlFileExporter;
use medcvapp::model::Template;
use std::io::{self, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::handlers::AppState;
use super::render::Renderer;
use super::session::Session;
use super::setup::{Cli, Commands};

/// Env var read for the log filter before falling back to `RUST_LOG`.
pub const LOG_ENV: &str = "MEDCV_LOG";

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = MedcvConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let renderer = Renderer::new()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Commands::Options) = cli.command {
        write!(out, "{}", renderer.options()?)?;
        return Ok(());
    }

    let state = create_app_state(&cli, &config)?;
    let mut session = Session::new(state, renderer);

    match cli.command {
        Some(Commands::Run { script }) => {
            let source = std::fs::read_to_string(&script)
                .with_context(|| format!("Failed to read {}", script.display()))?;
            session.run_script(&source, &mut out)
        }
        _ => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session.run_interactive(stdin.lock(), &mut out, prompt)
        }
    }
}

/// Logs go to stderr so they never mix with session output. `--verbose` wins over the env.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,medcv=debug,medcvapp=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

/// Command-line flags override the config file, which overrides the defaults.
fn create_app_state(cli: &Cli, config: &MedcvConfig) -> anyhow::Result<AppState> {
    let template: Template = match &cli.template {
        Some(name) => name.parse()?,
        None => config.template()?,
    };
    let out_dir = cli
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let export_options = config.export.options()?;
    debug!(%template, out_dir = %out_dir.display(), "session state");

    AppState::new(template, HtmlFileExporter::new(out_dir), export_options)
}
