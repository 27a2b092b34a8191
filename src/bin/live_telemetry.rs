use std::process;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use f1_analytics::errors::CustomResult;
use f1_analytics::modules::helpers::logging::setup_logging;
use f1_analytics::modules::settings::Settings;
use f1_analytics::modules::telemetry::{TelemetryFeed, TelemetrySimulator};
use f1_analytics::modules::templates::build_registry;
use f1_analytics::routes::telemetry;

async fn run() -> CustomResult<()> {
    let settings = Settings::from_env()?;
    setup_logging(&settings)?;
    let registry = build_registry()?;

    let mut feed = TelemetryFeed::new(settings.telemetry_tick);
    let mut frames = feed.subscribe();
    feed.start(TelemetrySimulator::with_capacity(StdRng::from_entropy(), settings.telemetry_window));
    info!(target: "bin/live_telemetry", "running for {} ticks", settings.telemetry_run_ticks);

    let refresh = settings.telemetry_refresh_ticks.max(1);
    let mut rendered_at = 0;

    while frames.changed().await.is_ok() {
        let frame = frames.borrow_and_update().clone();

        if frame.ticks >= rendered_at + refresh {
            rendered_at = frame.ticks;
            println!("{}", telemetry::render(&registry, &frame)?);
        }

        if frame.ticks >= settings.telemetry_run_ticks {
            break;
        }
    }

    feed.stop();
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(target: "bin/live_telemetry", "{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
