//! Swipe demo - opens a window and logs swipes made on its target surface

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use swipe_gesture::app::App;
use swipe_gesture::config::SwipeConfig;
use swipe_gesture::{build_info, health, logging};

#[derive(Parser, Debug)]
#[command(name = "swipe-demo")]
#[command(about = "Detect swipe gestures in a window", long_about = None)]
#[command(version)]
struct Args {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(short, long)]
    profile: Option<String>,

    /// Run health checks and exit
    #[arg(long)]
    health: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.profile {
        Some(profile) => SwipeConfig::load(profile),
        None => SwipeConfig::load_from_env(),
    };
    let (mut config, load_error) = match config {
        Ok(config) => (config, None),
        Err(e) => (SwipeConfig::fallback("release"), Some(e)),
    };

    if args.debug {
        config.logging.filter = "debug,swipe_gesture=trace".to_string();
    }
    logging::init(&config.logging).context("failed to initialise logging")?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using default configuration");
    }
    info!(version = %build_info::version_string(), "swipe-demo");

    if args.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    App::new(config)?.run()
}
