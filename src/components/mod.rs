pub mod area_chart;
pub mod bar_chart;
pub mod header;
pub mod live_clock;
pub mod pie_chart;
pub mod placeholder;
pub mod plant_table;
pub mod stat_card;

pub use area_chart::AreaChart;
pub use bar_chart::BarChart;
pub use header::Header;
pub use live_clock::LiveClock;
pub use pie_chart::PieChart;
pub use placeholder::{ChartSkeleton, LoadFailed};
pub use plant_table::PlantListView;
pub use stat_card::{StatCard, SummaryCard, Tone};
