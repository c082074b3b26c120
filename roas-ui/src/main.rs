use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roas_core::Currency;
use roas_ui::BreakevenApp;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Break-even ROAS calculator.
///
/// Opens a single-screen form for gross margin, expected ad spend, and
/// service fee, and displays the four derived break-even metrics.
#[derive(Debug, Parser)]
struct Cli {
    /// Currency glyph shown next to the revenue figures (USD, EUR, or GBP).
    #[arg(long, default_value = "EUR")]
    currency: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let currency = Currency::parse(&cli.currency)
        .ok_or_else(|| anyhow::anyhow!("unknown currency '{}'", cli.currency))?;

    info!(currency = currency.as_str(), "starting calculator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Break-even ROAS Calculator",
        options,
        Box::new(move |_cc| Ok(Box::new(BreakevenApp::new(currency)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))?;

    Ok(())
}
