pub mod settings;
pub mod store;
pub mod telemetry;
pub mod templates;
pub mod view;

pub mod models {
    pub mod driver;
    pub mod race;
    pub mod team;
}

pub mod traits {
    pub mod has_performance;
}

pub mod helpers {
    pub mod comparison;
    pub mod driver;
    pub mod race;
    pub mod team;

    pub mod general;
    pub mod logging;
    pub mod math;

    pub mod handelbars {
        pub mod bar;
        pub mod format;
        pub mod format_date;
        pub mod format_points;
        pub mod format_race_status;
    }
}
