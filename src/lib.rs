pub mod errors;
pub mod modules;
pub mod routes {
    pub mod comparison;
    pub mod dashboard;
    pub mod driver;
    pub mod race;
    pub mod team;
    pub mod telemetry;
}
