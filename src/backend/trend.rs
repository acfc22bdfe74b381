#![cfg(feature = "server")]
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::shared::types::DailyTrendPoint;

pub const AVERAGE_DAILY_KWH: i64 = 50_000;
pub const WEEKEND_BASE_KWH: i64 = 48_000;
pub const WEEKDAY_BASE_KWH: i64 = 50_000;
pub const SPREAD_KWH: i64 = 2_000;

pub fn base_for(day: NaiveDate) -> i64 {
    match day.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_BASE_KWH,
        _ => WEEKDAY_BASE_KWH,
    }
}

pub fn date_label(day: NaiveDate) -> String {
    format!("{}/{}일", day.month(), day.day())
}

/// Mock daily output for the `days` days ending at `today`, oldest first.
/// Each point is `base ± 2000 kWh`; the same seed always yields the same series.
pub fn generate_daily_trend(today: NaiveDate, days: u32, seed: u64) -> Vec<DailyTrendPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let days = days.max(1) as i64;
    (0..days)
        .map(|i| {
            let day = today - Duration::days(days - 1 - i);
            let base = base_for(day);
            let jitter = rng.gen_range(0..2 * SPREAD_KWH) - SPREAD_KWH;
            DailyTrendPoint {
                date_label: date_label(day),
                actual_kwh: base + jitter,
                average_kwh: AVERAGE_DAILY_KWH,
                is_today: i == days - 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_seed_same_series() {
        let today = day(2025, 10, 17);
        assert_eq!(
            generate_daily_trend(today, 30, 42),
            generate_daily_trend(today, 30, 42)
        );
        assert_ne!(
            generate_daily_trend(today, 30, 42),
            generate_daily_trend(today, 30, 43)
        );
    }

    #[test]
    fn ends_today_oldest_first() {
        let points = generate_daily_trend(day(2025, 10, 17), 30, 1);
        assert_eq!(points.len(), 30);
        assert_eq!(points[0].date_label, "9/18일");
        assert_eq!(points[29].date_label, "10/17일");
        assert_eq!(points.iter().filter(|p| p.is_today).count(), 1);
        assert!(points[29].is_today);
    }

    #[test]
    fn today_follows_the_date_passed_in() {
        use chrono::{FixedOffset, TimeZone, Utc};

        // 20:00 UTC on 10/17 is already 10/18 in Seoul
        let instant = Utc.with_ymd_and_hms(2025, 10, 17, 20, 0, 0).unwrap();
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();

        let utc_points = generate_daily_trend(instant.date_naive(), 30, 42);
        let seoul_points =
            generate_daily_trend(instant.with_timezone(&seoul).date_naive(), 30, 42);

        assert_eq!(utc_points[29].date_label, "10/17일");
        assert_eq!(seoul_points[29].date_label, "10/18일");
        assert!(seoul_points[29].is_today);
        assert_eq!(seoul_points[0].date_label, "9/19일");
    }

    #[test]
    fn values_stay_within_spread() {
        let today = day(2025, 10, 17);
        let points = generate_daily_trend(today, 60, 9);
        for (i, p) in points.iter().enumerate() {
            let d = today - Duration::days(59 - i as i64);
            let base = base_for(d);
            assert!(p.actual_kwh >= base - SPREAD_KWH && p.actual_kwh < base + SPREAD_KWH);
            assert_eq!(p.average_kwh, AVERAGE_DAILY_KWH);
        }
    }

    #[test]
    fn weekends_use_lower_base() {
        // 2025-10-18 is a Saturday
        assert_eq!(base_for(day(2025, 10, 18)), WEEKEND_BASE_KWH);
        assert_eq!(base_for(day(2025, 10, 19)), WEEKEND_BASE_KWH);
        assert_eq!(base_for(day(2025, 10, 20)), WEEKDAY_BASE_KWH);
    }

    #[test]
    fn zero_days_yields_today_only() {
        let points = generate_daily_trend(day(2025, 1, 1), 0, 3);
        assert_eq!(points.len(), 1);
        assert!(points[0].is_today);
        assert_eq!(points[0].date_label, "1/1일");
    }
}
