use serde::{Deserialize, Serialize};

use crate::modules::traits::has_performance::HasPerformance;

const DEFAULT_TEAM_COLOUR: &str = "#ef4444";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Team {
    pub id: u32,
    pub name: String,

    pub points: u32,
    pub wins: u32,
    pub poles: u32,
    pub podiums: u32,

    pub reliability: u32,
    /// average pit stop duration in seconds
    pub avg_pit_stop: f64,

    pub performance: Vec<u32>,
}

impl Team {
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    /// # team colour
    /// the livery colour used when charting the team. teams without a known
    /// livery share the default red.
    pub fn colour(&self) -> &'static str {
        match self.name.as_str() {
            "Red Bull Racing" => "#0600ef",
            "Mercedes" => "#00d2be",
            "Ferrari" => "#dc0000",
            "McLaren" => "#ff8700",
            "Aston Martin" => "#006f62",
            _ => DEFAULT_TEAM_COLOUR,
        }
    }
}

impl HasPerformance for Team {
    fn label(&self) -> &str {
        &self.name
    }

    fn stored_points(&self) -> u32 {
        self.points
    }

    fn performance(&self) -> &[u32] {
        &self.performance
    }
}
