use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;
mod views;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        // .env first so RUST_LOG from it reaches the filter
        dotenvy::dotenv().ok();
        backend::init_tracing();

        // Load configuration once at boot
        let config = match backend::Config::from_env() {
            Ok(c) => c,
            Err(e) => {
                dioxus::logger::tracing::warn!("[config] {e:#}; using defaults");
                backend::Config::default()
            }
        };
        dioxus::logger::tracing::info!(
            "[config] trend seed {}, {} days",
            config.trend_seed,
            config.trend_days
        );
        let _ = backend::CONFIG.set(config);

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            let result = match cmd.as_str() {
                "dump-plants" => cli::dump_plants(),
                "gen-trend" => cli::gen_trend(args.next()),
                _ => Ok(false),
            };
            match result {
                Ok(true) => return,
                Ok(false) => {}
                Err(e) => {
                    eprintln!("{cmd}: {e:#}");
                    std::process::exit(1);
                }
            }
        }
    }
    dioxus::launch(app::App);
}

#[cfg(feature = "server")]
mod cli {
    use anyhow::{Context, Result};

    use crate::backend::{config, trend};
    use crate::shared::plants::power_plants;

    /// Print the plant register as JSON.
    pub fn dump_plants() -> Result<bool> {
        let json = serde_json::to_string_pretty(&power_plants())?;
        println!("{json}");
        Ok(true)
    }

    /// Print the seeded daily trend as JSON. Optional arg: number of days.
    pub fn gen_trend(days_arg: Option<String>) -> Result<bool> {
        let cfg = config::current();
        let days = match days_arg {
            Some(raw) => {
                let days: u32 = raw
                    .parse()
                    .with_context(|| format!("days must be an unsigned integer, got {raw:?}"))?;
                config::parse_days(days)?
            }
            None => cfg.trend_days,
        };
        let today = chrono::Local::now().date_naive();
        let points = trend::generate_daily_trend(today, days, cfg.trend_seed);
        println!("{}", serde_json::to_string_pretty(&points)?);
        Ok(true)
    }
}
