pub mod dashboard;
pub mod power_plants;

pub use dashboard::SolarDashboard;
pub use power_plants::PowerPlantOverview;
