use log::{info, warn};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tokio::sync::watch;

use crate::errors::{CustomResult, FixtureSnafu};
use crate::modules::models::driver::Driver;
use crate::modules::models::race::Race;
use crate::modules::models::team::Team;
use crate::modules::traits::has_performance::HasPerformance;

const SEASON_FIXTURE: &str = include_str!("../fixtures/season_2025.json");

/// the collections as they are stored in a fixture file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Season {
    pub drivers: Vec<Driver>,
    pub teams: Vec<Team>,
    pub races: Vec<Race>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PointsDiscrepancy {
    pub name: String,
    pub stored: u32,
    pub derived: u32,
    pub difference: i64,
}

/// # fixture store
/// read access to the drivers, teams and races of a season plus the driver
/// and team that are currently selected. the collections never change once
/// seeded, selections are observed through watch channels.
pub struct FixtureStore {
    season: Season,
    selected_driver: watch::Sender<Option<Driver>>,
    selected_team: watch::Sender<Option<Team>>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        FixtureStore::new()
    }
}

impl FixtureStore {
    /// a store that has not been seeded yet, all collections are empty
    pub fn new() -> FixtureStore {
        FixtureStore::from_season(Season::default())
    }

    pub fn from_season(season: Season) -> FixtureStore {
        let (selected_driver, _) = watch::channel(None);
        let (selected_team, _) = watch::channel(None);

        FixtureStore {
            season,
            selected_driver,
            selected_team,
        }
    }

    /// # seeded store
    /// a store holding the season embedded in the binary
    ///
    /// ## Returns
    /// * `FixtureStore` - the seeded store
    pub fn seeded() -> CustomResult<FixtureStore> {
        FixtureStore::from_json(SEASON_FIXTURE)
    }

    /// # store from json
    /// parse a season from json and seed a store with it.
    /// entities whose stored points differ from their per race points are logged.
    ///
    /// ## Arguments
    /// * `json` - the season as json
    ///
    /// ## Returns
    /// * `FixtureStore` - the seeded store
    pub fn from_json(json: &str) -> CustomResult<FixtureStore> {
        let season: Season = serde_json::from_str(json).context(FixtureSnafu)?;
        let store = FixtureStore::from_season(season);

        for discrepancy in store.points_discrepancies() {
            warn!(target: "modules/store:from_json",
                "stored points of {} do not match its race results. (stored: {}, derived: {})",
                discrepancy.name, discrepancy.stored, discrepancy.derived);
        }

        info!(target: "modules/store:from_json", "seeded store with {} drivers, {} teams and {} races",
            store.season.drivers.len(), store.season.teams.len(), store.season.races.len());

        Ok(store)
    }

    /************ COLLECTIONS ************/
    pub fn drivers(&self) -> &[Driver] {
        &self.season.drivers
    }

    pub fn teams(&self) -> &[Team] {
        &self.season.teams
    }

    pub fn races(&self) -> &[Race] {
        &self.season.races
    }

    pub fn driver_by_id(&self, id: u32) -> Option<&Driver> {
        self.season.drivers.iter().find(|driver| driver.id == id)
    }

    pub fn team_by_id(&self, id: u32) -> Option<&Team> {
        self.season.teams.iter().find(|team| team.id == id)
    }

    pub fn completed_races(&self) -> Vec<&Race> {
        self.season.races.iter().filter(|race| race.is_completed()).collect()
    }

    pub fn upcoming_races(&self) -> Vec<&Race> {
        self.season.races.iter().filter(|race| !race.is_completed()).collect()
    }

    /************ FILTERS ************/
    /// # filter drivers
    /// the drivers whose name or team contains the query, ignoring case.
    /// an empty query returns all drivers.
    ///
    /// ## Arguments
    /// * `query` - the text to search for
    ///
    /// ## Returns
    /// * `Vec<Driver>` - the matching drivers in seeded order
    pub fn filter_drivers(&self, query: &str) -> Vec<Driver> {
        let query = query.to_lowercase();
        self.season
            .drivers
            .iter()
            .filter(|driver| driver.matches(&query))
            .cloned()
            .collect()
    }

    /// # filter teams
    /// the teams whose name contains the query, ignoring case
    pub fn filter_teams(&self, query: &str) -> Vec<Team> {
        let query = query.to_lowercase();
        self.season
            .teams
            .iter()
            .filter(|team| team.matches(&query))
            .cloned()
            .collect()
    }

    /************ SELECTION ************/
    pub fn selected_driver(&self) -> Option<Driver> {
        self.selected_driver.borrow().clone()
    }

    pub fn selected_team(&self) -> Option<Team> {
        self.selected_team.borrow().clone()
    }

    /// replace the selected driver, `None` clears the selection
    pub fn set_selected_driver(&self, driver: Option<Driver>) {
        self.selected_driver.send_replace(driver);
    }

    /// replace the selected team, `None` clears the selection
    pub fn set_selected_team(&self, team: Option<Team>) {
        self.selected_team.send_replace(team);
    }

    pub fn subscribe_selected_driver(&self) -> watch::Receiver<Option<Driver>> {
        self.selected_driver.subscribe()
    }

    pub fn subscribe_selected_team(&self) -> watch::Receiver<Option<Team>> {
        self.selected_team.subscribe()
    }

    /************ CONSISTENCY ************/
    /// every driver and team whose stored points differ from the sum of its race points
    pub fn points_discrepancies(&self) -> Vec<PointsDiscrepancy> {
        fn collect<T: HasPerformance>(entities: &[T]) -> impl Iterator<Item = PointsDiscrepancy> + '_ {
            entities
                .iter()
                .filter(|entity| entity.points_discrepancy() != 0)
                .map(|entity| PointsDiscrepancy {
                    name: entity.label().to_string(),
                    stored: entity.stored_points(),
                    derived: entity.performance_total(),
                    difference: entity.points_discrepancy(),
                })
        }

        collect(&self.season.drivers)
            .chain(collect(&self.season.teams))
            .collect()
    }
}
