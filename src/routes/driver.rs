use handlebars::Handlebars;
use log::debug;
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::helpers::driver::{DriverHelpers, DriverSortKey, RacePoints, RankedDriver, StatBar};
use crate::modules::models::driver::Driver;
use crate::modules::store::FixtureStore;
use crate::modules::templates;

#[derive(Serialize, Debug)]
pub struct DriversData {
    pub sort_key: String,
    pub drivers: Vec<RankedDriver>,
    pub focus: Option<FocusedDriver>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FocusedDriver {
    /// place in the championship standings
    pub position: usize,
    pub driver: Driver,
    pub races: Vec<RacePoints>,
    pub stats: Vec<StatBar>,
}

/// the driver the detail part of the panel is about: the selection of the
/// store, otherwise the first driver
pub fn focused_driver(store: &FixtureStore) -> Option<Driver> {
    store
        .selected_driver()
        .or_else(|| store.drivers().first().cloned())
}

/// # drivers data
///
/// ## Arguments
/// * `store` - the store holding the season
/// * `sort_key` - the statistic the list is sorted on
///
/// ## Returns
/// * `DriversData` - the context of the drivers template
pub fn drivers_data(store: &FixtureStore, sort_key: DriverSortKey) -> DriversData {
    let standings = DriverHelpers::ranked(store.drivers(), DriverSortKey::Points);

    let focus = focused_driver(store).map(|driver| FocusedDriver {
        position: standings
            .iter()
            .find(|ranked| ranked.driver.id == driver.id)
            .map(|ranked| ranked.position)
            .unwrap_or(0),
        races: DriverHelpers::race_points(&driver.performance),
        stats: DriverHelpers::stat_bars(&driver),
        driver,
    });

    DriversData {
        sort_key: sort_key.id().to_string(),
        drivers: DriverHelpers::ranked(store.drivers(), sort_key),
        focus,
    }
}

pub fn render(registry: &Handlebars, store: &FixtureStore, sort_key: DriverSortKey) -> CustomResult<String> {
    let data = drivers_data(store, sort_key);
    debug!(target: "routes/driver:render", "rendering {} drivers sorted on {}", data.drivers.len(), data.sort_key);

    templates::render(registry, "drivers", &data)
}
