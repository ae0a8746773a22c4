//! Comparador CLI entry point.
//!
//! Drives the interaction controller from the terminal: one comparison per
//! invocation, rendered to an HTML page.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use comparador::infra::app_config::{self, AppConfig};
use comparador::infra::clipboard::SystemClipboard;
use comparador::infra::diff_service::HttpDiffService;
use comparador::infra::platform::SystemColorScheme;
use comparador::infra::preferences::FilePreferences;
use comparador::ui::app::{Collaborators, DiffApp, Pane, initialize};
use comparador::ui::components::{HtmlDocument, NoticeKind};

#[derive(Parser, Debug)]
#[command(name = "comparador")]
#[command(version)]
#[command(about = "Side-by-side text and structured-data comparison", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two files and render the result as HTML
    Compare {
        /// Original text file
        original: PathBuf,
        /// Altered text file
        altered: PathBuf,
        /// Compare as key/value structured data
        #[arg(long)]
        properties: bool,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Diff service endpoint (overrides config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Show the persisted theme
    Theme {
        /// Switch between light and dark before printing
        #[arg(long)]
        toggle: bool,
    },

    /// Copy a file's content to the clipboard as one of the input panes
    Copy {
        #[arg(value_enum)]
        pane: PaneArg,
        file: PathBuf,
    },

    /// Print the active configuration and where it is read from
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PaneArg {
    Original,
    Altered,
}

impl From<PaneArg> for Pane {
    fn from(value: PaneArg) -> Self {
        match value {
            PaneArg::Original => Pane::Original,
            PaneArg::Altered => Pane::Altered,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = app_config::load_config();

    match args.command {
        Commands::Compare {
            original,
            altered,
            properties,
            output,
            url,
        } => compare(&config, &original, &altered, properties, output, url).await,
        Commands::Theme { toggle } => {
            let mut app = build_app(&config, None, SystemClipboard::default())?;
            if toggle {
                app.on_toggle_theme();
            }
            println!("{}", app.state().theme);
            Ok(())
        }
        Commands::Copy { pane, file } => {
            let text = read_input(&file)?;
            // The process exits right after, so the copy must outlive it.
            let mut app = build_app(&config, None, SystemClipboard::holding())?;
            let pane = Pane::from(pane);
            match pane {
                Pane::Original => app.set_original(text),
                Pane::Altered => app.set_altered(text),
            }
            app.on_copy(pane);

            let mut failed = false;
            for notice in app.surface_mut().take_notices() {
                match notice.kind {
                    NoticeKind::Success => println!("{}", notice.message),
                    NoticeKind::Failure => {
                        eprintln!("{}", notice.message);
                        failed = true;
                    }
                }
            }
            if failed {
                anyhow::bail!("Copy failed");
            }
            Ok(())
        }
        Commands::Config => {
            println!("# {}", app_config::config_path().display());
            print!("{}", app_config::render_config(&config));
            Ok(())
        }
    }
}

async fn compare(
    config: &AppConfig,
    original: &Path,
    altered: &Path,
    properties: bool,
    output: Option<PathBuf>,
    url: Option<String>,
) -> Result<()> {
    let mut app = build_app(config, url, SystemClipboard::default())?;
    app.set_original(read_input(original)?);
    app.set_altered(read_input(altered)?);
    app.set_structured_mode(properties);

    app.on_compare();
    app.wait_until_settled().await;

    let failure = app.state().last_error().map(str::to_string);
    let html = app.into_surface().to_html();

    match output {
        Some(path) => std::fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{html}"),
    }

    if let Some(error) = failure {
        anyhow::bail!("Comparison failed: {error}");
    }
    Ok(())
}

fn build_app(
    config: &AppConfig,
    url: Option<String>,
    clipboard: SystemClipboard,
) -> Result<DiffApp<HtmlDocument>> {
    let url = url.unwrap_or_else(|| config.service_url.clone());
    let timeout = config.request_timeout_secs.map(Duration::from_secs);
    let diff_service =
        HttpDiffService::new(url, timeout).context("Failed to build HTTP client")?;

    Ok(initialize(
        HtmlDocument::new(),
        Collaborators {
            diff_service: Arc::new(diff_service),
            theme_store: Box::new(FilePreferences::in_data_dir()),
            clipboard: Box::new(clipboard),
            color_scheme: Box::new(SystemColorScheme::new(config.color_scheme)),
        },
    ))
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
