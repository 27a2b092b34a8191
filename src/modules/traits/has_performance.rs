use crate::modules::helpers::math::Math;

/// an entity that scores points race by race
pub trait HasPerformance {
    fn label(&self) -> &str;

    /// the season total as stored in the fixture data
    fn stored_points(&self) -> u32;

    /// the points scored per race in calendar order
    fn performance(&self) -> &[u32];

    fn cumulative_points(&self) -> Vec<u32> {
        Math::cumulative_series(self.performance())
    }

    fn performance_total(&self) -> u32 {
        self.performance().iter().sum()
    }

    /// stored total minus the sum of the per race points
    fn points_discrepancy(&self) -> i64 {
        self.stored_points() as i64 - self.performance_total() as i64
    }
}
