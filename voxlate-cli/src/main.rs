use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use voxlate_core::{language, SettingsManager};

mod commands;
mod formatter;
mod interactive_app;
mod oneshot;
mod tui;

use crate::interactive_app::InteractiveApp;
use crate::tui::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "voxlate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "voxlate - translate English text and hear it spoken")]
struct Args {
    /// Settings file to use instead of ~/.voxlate/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Text to translate once, then exit
    #[arg(long, requires = "language")]
    text: Option<String>,

    /// Target language for --text (e.g. German)
    #[arg(long, requires = "text")]
    language: Option<String>,

    /// Play the pronunciation after a one-shot translation
    #[arg(long, requires = "text")]
    play: bool,

    /// Print the selectable languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Disable TUI and use line-based interactive mode
    #[arg(long)]
    no_tui: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let local = tokio::task::LocalSet::new();
        local.run_until(async_main()).await
    })
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!(
        "CLI startup: no_tui={}, settings={:?}, one_shot={}",
        args.no_tui,
        args.settings,
        args.text.is_some()
    );

    if args.list_languages {
        for entry in language::all() {
            println!(
                "{:<8} {:<3} {}",
                entry.display_name, entry.translation_code, entry.voice_id
            );
        }
        return Ok(());
    }

    let settings_manager = load_settings(args.settings)?;

    if let (Some(text), Some(language)) = (args.text, args.language) {
        return oneshot::run_once(settings_manager, &text, &language, args.play).await;
    }

    if args.no_tui {
        let mut app = InteractiveApp::new(settings_manager);
        app.run().await?;
    } else {
        let mut tui_app = TuiApp::new(settings_manager)?;
        tui_app.run().await?;
    }

    Ok(())
}

fn load_settings(path: Option<PathBuf>) -> Result<SettingsManager> {
    let settings_manager = match path {
        Some(path) => SettingsManager::from_path(path.clone())
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SettingsManager::new().context("Failed to load settings")?,
    };
    info!(path = ?settings_manager.path(), "Settings loaded");
    Ok(settings_manager)
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // The TUI owns the terminal, so traces go to a file under the home dir
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    let trace_dir = home.join(".voxlate").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("voxlate.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
