// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{fetch_series, fetch_series_blocking};
pub use domain::{Candle, Selection, Series, Timeframe, Tool};
pub use engine::{ChartController, FetchState};
pub use ui::ChartApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trading pair symbol to chart
    #[arg(long, default_value = "BTCUSDT")]
    pub symbol: String,

    /// Initial kline interval (1m, 5m, 15m, 30m, 1h, 4h, 1d)
    #[arg(long, default_value = "1m")]
    pub timeframe: Timeframe,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    Box::new(ui::ChartApp::new(cc, args))
}
