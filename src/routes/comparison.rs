use handlebars::Handlebars;
use log::{debug, warn};
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::helpers::comparison::{comparison_rows, radar_profile, ComparisonRow};
use crate::modules::models::driver::Driver;
use crate::modules::store::FixtureStore;
use crate::modules::templates;

#[derive(Serialize, Debug)]
pub struct ComparisonData {
    pub matchup: Option<Matchup>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Matchup {
    pub first: Driver,
    pub second: Driver,
    pub radar: Vec<RadarRow>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RadarRow {
    pub category: String,
    pub first: f64,
    pub second: f64,
}

/// the two drivers to compare. unknown ids fall back to the first two drivers
fn pick_drivers(store: &FixtureStore, ids: Option<(u32, u32)>) -> Option<(Driver, Driver)> {
    if let Some((first_id, second_id)) = ids {
        match (store.driver_by_id(first_id), store.driver_by_id(second_id)) {
            (Some(first), Some(second)) => return Some((first.clone(), second.clone())),
            _ => warn!(target: "routes/comparison:pick_drivers",
                "unknown driver in comparison ({}, {}), comparing the first two drivers", first_id, second_id),
        }
    }

    match store.drivers() {
        [first, second, ..] => Some((first.clone(), second.clone())),
        _ => None,
    }
}

/// # comparison data
///
/// ## Arguments
/// * `store` - the store holding the season
/// * `ids` - the ids of the drivers to compare
///
/// ## Returns
/// * `ComparisonData` - the context of the comparison template, without a
///   matchup when the store holds fewer than two drivers
pub fn comparison_data(store: &FixtureStore, ids: Option<(u32, u32)>) -> ComparisonData {
    let matchup = pick_drivers(store, ids).map(|(first, second)| {
        let radar = radar_profile(&first)
            .into_iter()
            .zip(radar_profile(&second))
            .map(|(a, b)| RadarRow {
                category: a.category,
                first: a.value,
                second: b.value,
            })
            .collect();

        Matchup {
            rows: comparison_rows(&first, &second),
            radar,
            first,
            second,
        }
    });

    ComparisonData { matchup }
}

pub fn render(registry: &Handlebars, store: &FixtureStore, ids: Option<(u32, u32)>) -> CustomResult<String> {
    let data = comparison_data(store, ids);
    debug!(target: "routes/comparison:render", "rendering comparison (matchup: {})", data.matchup.is_some());

    templates::render(registry, "comparison", &data)
}
