use std::fmt;
use std::str::FromStr;

use handlebars::Handlebars;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error, UnknownViewSnafu};
use crate::modules::helpers::driver::DriverSortKey;
use crate::modules::helpers::race::RaceFilter;
use crate::modules::store::FixtureStore;
use crate::modules::telemetry::TelemetryFrame;
use crate::modules::templates;
use crate::routes::{comparison, dashboard, driver, race, team, telemetry};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Drivers,
    Teams,
    Races,
    Comparison,
    Telemetry,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Drivers,
        View::Teams,
        View::Races,
        View::Comparison,
        View::Telemetry,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Drivers => "drivers",
            View::Teams => "teams",
            View::Races => "races",
            View::Comparison => "comparison",
            View::Telemetry => "telemetry",
        }
    }

    /// the text of the navigation entry
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Drivers => "Drivers",
            View::Teams => "Teams",
            View::Races => "Races",
            View::Comparison => "Compare",
            View::Telemetry => "Telemetry",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.id() == id)
            .ok_or_else(|| UnknownViewSnafu { view: s }.build())
    }
}

/// local state of the panels that is not part of the store
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    pub driver_sort: DriverSortKey,
    pub race_filter: RaceFilter,
    /// ids of the drivers to compare, the first two drivers when not set
    pub comparison: Option<(u32, u32)>,
    pub telemetry: TelemetryFrame,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Serialize)]
struct HeaderData {
    title: String,
    nav: Vec<NavItem>,
}

/// # view selector
/// holds the one view that is shown. switching never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: View,
}

impl ViewSelector {
    pub fn new(view: View) -> ViewSelector {
        ViewSelector { active: view }
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn select(&mut self, view: View) {
        debug!(target: "modules/view:select", "switching view from {} to {}", self.active, view);
        self.active = view;
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        View::ALL
            .iter()
            .map(|view| NavItem {
                id: view.id().to_string(),
                label: view.label().to_string(),
                active: *view == self.active,
            })
            .collect()
    }

    /// # render the active view
    /// the navigation header followed by the panel of the active view. only
    /// the active panel is rendered.
    ///
    /// ## Arguments
    /// * `registry` - the template registry
    /// * `store` - the store holding the season
    /// * `options` - the local panel state
    ///
    /// ## Returns
    /// * `String` - the rendered text
    pub fn render(&self, registry: &Handlebars, store: &FixtureStore, options: &PanelOptions) -> CustomResult<String> {
        let header = templates::render(registry, "header", &HeaderData {
            title: "F1 Analytics Pro".to_string(),
            nav: self.nav_items(),
        })?;

        let panel = match self.active {
            View::Dashboard => dashboard::render(registry, store)?,
            View::Drivers => driver::render(registry, store, options.driver_sort)?,
            View::Teams => team::render(registry, store)?,
            View::Races => race::render(registry, store, options.race_filter)?,
            View::Comparison => comparison::render(registry, store, options.comparison)?,
            View::Telemetry => telemetry::render(registry, &options.telemetry)?,
        };

        Ok(format!("{}\n{}", header, panel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_parse_from_their_id() {
        for view in View::ALL {
            assert_eq!(view.id().parse::<View>().unwrap(), view);
        }
        assert_eq!(" Telemetry ".parse::<View>().unwrap(), View::Telemetry);
    }

    #[test]
    fn unknown_view_is_an_error() {
        assert!(matches!("standings".parse::<View>(), Err(Error::UnknownViewError { .. })));
    }

    #[test]
    fn exactly_one_nav_item_is_active() {
        let mut selector = ViewSelector::default();
        assert_eq!(selector.active(), View::Dashboard);

        selector.select(View::Comparison);
        let active: Vec<NavItem> = selector.nav_items().into_iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Compare");
    }
}
