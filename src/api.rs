use dioxus::prelude::*;

use crate::shared::types::{ChartPoint, DailyTrendPoint, PlantRecord};

#[server(ListPowerPlants)]
pub async fn list_power_plants() -> Result<Vec<PlantRecord>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let plants = crate::shared::plants::power_plants();
        dioxus::logger::tracing::debug!("list_power_plants: {} records", plants.len());
        Ok(plants)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}

#[server(GetHourlyOutput)]
pub async fn get_hourly_output() -> Result<Vec<ChartPoint>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(crate::shared::solar::hourly_output())
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}

#[server(GetDailyTrend)]
pub async fn get_daily_trend() -> Result<Vec<DailyTrendPoint>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{config, trend};
        use chrono::Local;

        let cfg = config::current();
        let today = Local::now().date_naive();
        let points = trend::generate_daily_trend(today, cfg.trend_days, cfg.trend_seed);
        dioxus::logger::tracing::debug!(
            "get_daily_trend: {} days ending {} (seed {})",
            points.len(),
            today,
            cfg.trend_seed
        );
        Ok(points)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}
