// FirmLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading and endpoint resolution
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use firmlens::app;
pub use firmlens::core;
pub use firmlens::platform;
pub use firmlens::ui;
pub use firmlens::util;

use clap::Parser;
use std::path::PathBuf;

/// FirmLens - Desktop company-directory viewer.
///
/// Fetches the company list from a directory endpoint at startup, then
/// filters and paginates it entirely client-side.
#[derive(Parser, Debug)]
#[command(name = "FirmLens", version, about)]
struct Cli {
    /// Directory endpoint URL (overrides config.toml).
    endpoint: Option<String>,

    /// Alternative configuration directory.
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug, None);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "FirmLens starting"
    );

    // Resolve config directory: CLI override > platform default
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);

    let (config, config_warnings) = platform::config::load_config(&config_dir);

    // Endpoint priority: CLI argument > config.toml > built-in default
    let endpoint = cli
        .endpoint
        .or(config.endpoint)
        .unwrap_or_else(|| util::constants::DEFAULT_ENDPOINT.to_string());

    tracing::info!(endpoint = %endpoint, "Ready to launch GUI");

    // Create application state; the startup fetch is queued inside.
    let mut state = app::state::AppState::new(endpoint, config.dark_mode);
    state.warnings.extend(config_warnings);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            if state.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            Ok(Box::new(gui::FirmLensApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch FirmLens GUI: {e}");
        std::process::exit(1);
    }
}
