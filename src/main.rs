#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;

use kline_scope::{Cli, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run Native App
    let title = format!(
        "{} - {}",
        kline_scope::ui::config::UI_TEXT.window_title,
        args.symbol
    );
    let options = NativeOptions::default();

    eframe::run_native(&title, options, Box::new(move |cc| Ok(run_app(cc, &args))))
}
