mod ui;

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand, arg};
use egui::Vec2;
use log::{error, info, warn};
use tokio::runtime::Runtime;

use ui::VeluxeApp;
use veluxe::{
    AppConfig, AppShell, EventFeedController, EventId, HttpEventsBackend, VeluxeError,
    events::network_runtime,
};

const HEADLESS_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Concierge backend origin. Overrides the config file.
    #[arg(long, env = "VELUXE_BACKEND_URL")]
    backend_url: Option<String>,

    /// Member id sent with RSVPs. Overrides the config file.
    #[arg(long)]
    user_id: Option<String>,

    /// Read settings from this file instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the concierge window (the default).
    Window {
        #[arg(short, long, default_value = "home")]
        tab: String,
    },
    /// Print the upcoming events without opening a window.
    Events {
        /// RSVP to this event before printing.
        #[arg(long)]
        rsvp: Option<String>,
    },
}

fn load_config(args: &Args) -> AppConfig {
    let loaded = match &args.config {
        Some(path) => AppConfig::from_path(path).map(Some),
        None => AppConfig::from_local_file(),
    };
    let config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            warn!("Could not load config file, using defaults: {e}");
            AppConfig::default()
        }
    };
    config.with_overrides(args.backend_url.clone(), args.user_id.clone())
}

fn feed_controller(
    config: &AppConfig,
    runtime: &Runtime,
) -> EventFeedController<HttpEventsBackend> {
    info!("Using concierge backend at {}", config.backend_url);
    EventFeedController::new(
        HttpEventsBackend::new(config.backend_url.clone()),
        runtime.handle().clone(),
        config.user_id.clone(),
    )
}

fn window(config: AppConfig, tab: &str) -> Result<(), VeluxeError> {
    let runtime = network_runtime()?;
    let mut shell = AppShell::new(feed_controller(&config, &runtime));
    shell.select_tab_by_id(tab);

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("Veluxe")
        .with_inner_size(Vec2::new(config.window_width, config.window_height));

    eframe::run_native(
        "Veluxe",
        native_options,
        Box::new(|cc| Ok(Box::new(VeluxeApp::new(shell, runtime, cc)))),
    )
    .map_err(|e| VeluxeError::GuiError {
        description: e.to_string(),
    })
}

fn events(config: AppConfig, rsvp: Option<String>) -> Result<(), VeluxeError> {
    let runtime = network_runtime()?;
    let mut feed = feed_controller(&config, &runtime);

    feed.sync_blocking(rsvp.map(EventId::from), HEADLESS_TIMEOUT);

    if let Some(message) = feed.rsvp_error() {
        println!("RSVP not confirmed: {message}");
    }
    if let Some(message) = feed.fetch_error() {
        println!("Concierge service unavailable: {message}");
    }
    for event in feed.events() {
        println!(
            "[{}] {} ({}) {} @ {} - {}",
            event.id,
            event.title,
            event.event_type,
            event.date,
            event.location,
            event.attendance_label()
        );
    }
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let config = load_config(&cli);
    let result = match cli.command {
        Some(Commands::Events { rsvp }) => events(config, rsvp),
        Some(Commands::Window { tab }) => window(config, &tab),
        None => window(config, "home"),
    };
    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
