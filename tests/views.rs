use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use f1_analytics::errors::Error;
use f1_analytics::modules::helpers::driver::DriverSortKey;
use f1_analytics::modules::helpers::race::RaceFilter;
use f1_analytics::modules::store::FixtureStore;
use f1_analytics::modules::telemetry::{TelemetryFeed, TelemetrySimulator};
use f1_analytics::modules::templates::build_registry;
use f1_analytics::modules::view::{PanelOptions, View, ViewSelector};

fn render(view: View, store: &FixtureStore, options: &PanelOptions) -> String {
    let registry = build_registry().unwrap();
    ViewSelector::new(view).render(&registry, store, options).unwrap()
}

#[test]
fn every_view_renders_from_the_seeded_store() {
    let store = FixtureStore::seeded().unwrap();
    let options = PanelOptions::default();

    for view in View::ALL {
        let text = render(view, &store, &options);
        assert!(text.starts_with("F1 Analytics Pro"));
        assert!(text.contains(&format!("[{}]", view.label())));
    }
}

#[test]
fn every_view_renders_from_an_empty_store() {
    let store = FixtureStore::new();
    let options = PanelOptions::default();

    for view in View::ALL {
        render(view, &store, &options);
    }
}

#[test]
fn dashboard_names_the_leaders() {
    let store = FixtureStore::seeded().unwrap();
    let text = render(View::Dashboard, &store, &PanelOptions::default());

    assert!(text.contains("Lando Norris (215 pts)"));
    assert!(text.contains("McLaren (387 pts)"));
    assert!(text.contains("10/24"));
}

#[test]
fn drivers_view_follows_the_sort_key() {
    let store = FixtureStore::seeded().unwrap();
    let options = PanelOptions {
        driver_sort: DriverSortKey::Consistency,
        ..PanelOptions::default()
    };
    let text = render(View::Drivers, &store, &options);

    assert!(text.contains("Sorted on Consistency"));
    assert!(text.contains("P1  1. #4 Lando Norris"));
}

#[test]
fn races_view_only_lists_filtered_races() {
    let store = FixtureStore::seeded().unwrap();
    let options = PanelOptions {
        race_filter: RaceFilter::Upcoming,
        ..PanelOptions::default()
    };
    let text = render(View::Races, &store, &options);

    assert!(!text.contains("Australian GP"));
    assert!(text.contains("Belgian GP"));
    assert!(!text.contains("Completed\n"));
}

#[test]
fn comparison_view_shows_the_head_to_head() {
    let store = FixtureStore::seeded().unwrap();
    let options = PanelOptions {
        comparison: Some((1, 4)),
        ..PanelOptions::default()
    };
    let text = render(View::Comparison, &store, &options);

    assert!(text.contains("Lando Norris (McLaren)  vs  Oscar Piastri (McLaren)"));
    assert!(text.contains("DNFs"));
}

#[test]
fn only_the_active_view_is_rendered() {
    let store = FixtureStore::seeded().unwrap();
    let text = render(View::Teams, &store, &PanelOptions::default());

    assert!(text.contains("== Teams =="));
    assert!(!text.contains("== Dashboard =="));
}

#[test]
fn unknown_view_is_rejected() {
    assert!(matches!("pitlane".parse::<View>(), Err(Error::UnknownViewError { .. })));
}

#[tokio::test(start_paused = true)]
async fn telemetry_view_renders_the_feed() {
    let store = FixtureStore::new();
    let mut feed = TelemetryFeed::new(Duration::from_millis(100));
    feed.start(TelemetrySimulator::new(StdRng::seed_from_u64(11)));

    let waiting = render(View::Telemetry, &store, &PanelOptions {
        telemetry: feed.snapshot(),
        ..PanelOptions::default()
    });
    assert!(waiting.contains("Waiting for data"));

    tokio::time::sleep(Duration::from_millis(550)).await;
    feed.stop();

    let frame = feed.snapshot();
    assert_eq!(frame.samples.len(), 5);

    let text = render(View::Telemetry, &store, &PanelOptions {
        telemetry: frame,
        ..PanelOptions::default()
    });
    assert!(text.contains("Gear"));
    assert!(!text.contains("Waiting for data"));
}

#[test]
fn teams_view_shows_the_constructor_battle() {
    let store = FixtureStore::seeded().unwrap();
    let text = render(View::Teams, &store, &PanelOptions::default());

    assert!(text.contains("Constructor championship battle"));
    assert!(text.contains("Ferrari 316"));
}

#[test]
fn dashboard_shows_the_leader_profile() {
    let store = FixtureStore::seeded().unwrap();
    let text = render(View::Dashboard, &store, &PanelOptions::default());

    assert!(text.contains("Leader profile"));
    assert!(text.contains("Fastest Laps"));
}

#[test]
fn drivers_view_shows_the_championship_position() {
    let store = FixtureStore::seeded().unwrap();
    store.set_selected_driver(store.driver_by_id(3).cloned());
    let text = render(View::Drivers, &store, &PanelOptions::default());

    assert!(text.contains("-- P3 Charles Leclerc #16"));
}
