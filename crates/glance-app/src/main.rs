//! glance client - entry point.
//!
//! Hosts the headless page in a terminal: stdin lines become page
//! events (`nav <route>`, `feedback <text>`, `theme`, `show`, `quit`).

use anyhow::Result;
use clap::Parser;
use glance_app::{App, AppConfig, UiEvent};
use glance_ui::{Page, PageSurface, RegionIds};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

/// glance client dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via GLANCE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    glance_telemetry::init_logging()?;
    info!("Starting glance v{}", env!("CARGO_PKG_VERSION"));

    // Config path: CLI arg > GLANCE_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("GLANCE_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config = AppConfig::load_or_default(&config_path)?;
    info!(
        base_url = %config.base_url,
        default_route = %config.default_route,
        "Configuration loaded"
    );

    let page = Page::with_regions(["loading", "notification", "content"]);
    let surface = PageSurface::new(page.clone(), RegionIds::default())?;
    let app = App::new(config, Arc::new(surface))?;

    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(read_commands(tx, page));

    app.run(rx).await?;
    Ok(())
}

/// Translate stdin lines into page events. EOF shuts the app down.
async fn read_commands(tx: mpsc::Sender<UiEvent>, page: Page) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        let event = match line.split_once(' ') {
            Some(("nav", route)) => UiEvent::NavClicked(route.trim().to_string()),
            Some(("feedback", text)) => UiEvent::FeedbackSubmitted(text.trim().to_string()),
            _ => match line {
                "theme" => UiEvent::ThemeToggled,
                "quit" | "exit" => UiEvent::Shutdown,
                "show" => {
                    print_page(&page);
                    continue;
                }
                "" => continue,
                other => {
                    println!("unknown command: {other}");
                    println!("commands: nav <route> | feedback <text> | theme | show | quit");
                    continue;
                }
            },
        };

        let shutdown = event == UiEvent::Shutdown;
        if tx.send(event).await.is_err() || shutdown {
            return;
        }
    }

    // stdin closed
    let _ = tx.send(UiEvent::Shutdown).await;
}

/// Dump the current page state to the terminal.
fn print_page(page: &Page) {
    println!("--- page (theme: {}) ---", page.theme());
    if let Some(route) = page.location_fragment() {
        println!("#{route}");
    }
    for id in ["loading", "notification", "content"] {
        if let Some(region) = page.region(id) {
            let visibility = if region.visible { "visible" } else { "hidden" };
            println!("[{id}] ({visibility}) {}", region.markup);
        }
    }
}
