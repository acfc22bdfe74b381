#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;

pub static CONFIG: OnceCell<Config> = OnceCell::new();

pub const DEFAULT_TREND_SEED: u64 = 42;
pub const DEFAULT_TREND_DAYS: u32 = 30;
pub const MAX_TREND_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub trend_seed: u64,
    pub trend_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trend_seed: DEFAULT_TREND_SEED,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

impl Config {
    /// Reads the process environment. `.env` must already be loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup("TREND_SEED") {
            config.trend_seed = raw
                .trim()
                .parse()
                .with_context(|| format!("TREND_SEED must be an unsigned integer, got {raw:?}"))?;
        }
        if let Some(raw) = lookup("TREND_DAYS") {
            let days: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("TREND_DAYS must be an unsigned integer, got {raw:?}"))?;
            config.trend_days = parse_days(days)?;
        }
        Ok(config)
    }
}

pub fn parse_days(days: u32) -> Result<u32> {
    if days == 0 || days > MAX_TREND_DAYS {
        return Err(anyhow!(
            "trend length must be between 1 and {MAX_TREND_DAYS} days, got {days}"
        ));
    }
    Ok(days)
}

/// The configuration installed at boot, or defaults when nothing was installed.
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}
