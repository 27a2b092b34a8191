use f1_analytics::modules::store::FixtureStore;

#[test]
fn empty_query_returns_every_driver_in_order() {
    let store = FixtureStore::seeded().unwrap();
    let filtered = store.filter_drivers("");

    assert_eq!(filtered.len(), 15);
    assert_eq!(filtered, store.drivers());
}

#[test]
fn query_matches_team_ignoring_case() {
    let store = FixtureStore::seeded().unwrap();
    let names: Vec<String> = store
        .filter_drivers("mclaren")
        .into_iter()
        .map(|driver| driver.name)
        .collect();

    assert_eq!(names, vec!["Lando Norris", "Oscar Piastri"]);
    assert_eq!(store.filter_drivers("MCLAREN").len(), 2);
}

#[test]
fn query_matches_driver_name() {
    let store = FixtureStore::seeded().unwrap();
    let drivers = store.filter_drivers("verst");

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].team, "Red Bull Racing");
    assert!(store.filter_drivers("nobody").is_empty());
}

#[test]
fn team_filter_only_looks_at_the_name() {
    let store = FixtureStore::seeded().unwrap();

    assert_eq!(store.filter_teams("").len(), 8);
    assert_eq!(store.filter_teams("red bull")[0].name, "Red Bull Racing");
    assert!(store.filter_teams("norris").is_empty());
}

#[test]
fn calendar_is_split_in_completed_and_upcoming() {
    let store = FixtureStore::seeded().unwrap();

    assert_eq!(store.races().len(), 24);
    assert_eq!(store.completed_races().len(), 10);
    assert_eq!(store.upcoming_races().len(), 14);
    assert!(store.upcoming_races().iter().all(|race| race.result.is_none()));
}

#[tokio::test]
async fn selection_observers_see_changes() {
    let store = FixtureStore::seeded().unwrap();
    let mut observer = store.subscribe_selected_driver();
    assert!(observer.borrow().is_none());

    let leclerc = store.driver_by_id(3).cloned();
    store.set_selected_driver(leclerc.clone());

    observer.changed().await.unwrap();
    assert_eq!(*observer.borrow_and_update(), leclerc);

    store.set_selected_driver(None);
    observer.changed().await.unwrap();
    assert!(observer.borrow().is_none());
}

#[tokio::test]
async fn team_observer_sees_selection() {
    let store = FixtureStore::seeded().unwrap();
    let mut observer = store.subscribe_selected_team();

    store.set_selected_team(store.team_by_id(2).cloned());
    observer.changed().await.unwrap();
    assert_eq!(observer.borrow().as_ref().map(|team| team.id), Some(2));
}
