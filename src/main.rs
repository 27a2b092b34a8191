use std::env;
use std::process;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use f1_analytics::errors::CustomResult;
use f1_analytics::modules::helpers::logging::setup_logging;
use f1_analytics::modules::settings::Settings;
use f1_analytics::modules::store::FixtureStore;
use f1_analytics::modules::telemetry::{TelemetryFeed, TelemetryFrame, TelemetrySimulator};
use f1_analytics::modules::templates::build_registry;
use f1_analytics::modules::view::{PanelOptions, View, ViewSelector};

/// run the feed until one window of samples has been collected
async fn collect_telemetry(settings: &Settings) -> TelemetryFrame {
    let mut feed = TelemetryFeed::new(settings.telemetry_tick);
    let mut frames = feed.subscribe();
    feed.start(TelemetrySimulator::with_capacity(StdRng::from_entropy(), settings.telemetry_window));

    let wanted = settings.telemetry_window as u64;
    while frames.changed().await.is_ok() {
        if frames.borrow_and_update().ticks >= wanted {
            break;
        }
    }

    feed.stop();
    feed.snapshot()
}

async fn run() -> CustomResult<()> {
    let settings = Settings::from_env()?;
    setup_logging(&settings)?;

    let view = match env::args().nth(1) {
        Some(arg) => arg.parse::<View>()?,
        None => settings.default_view,
    };
    info!(target: "main", "rendering the {} view", view);

    let store = FixtureStore::seeded()?;
    let registry = build_registry()?;

    let telemetry = if view == View::Telemetry {
        collect_telemetry(&settings).await
    } else {
        TelemetryFrame::default()
    };

    let options = PanelOptions {
        driver_sort: settings.driver_sort,
        race_filter: settings.race_filter,
        comparison: None,
        telemetry,
    };

    let selector = ViewSelector::new(view);
    println!("{}", selector.render(&registry, &store, &options)?);

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(target: "main", "{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
