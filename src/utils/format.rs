pub fn pad2(n: u32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

pub fn clock_label(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "{}년 {}월 {}일 {}:{}:{}",
        year,
        month,
        day,
        pad2(hour),
        pad2(minute),
        pad2(second)
    )
}

/// Clock text for a label that may not be known yet.
pub fn clock_text(label: Option<&str>) -> String {
    label.unwrap_or("--").to_string()
}

#[cfg(feature = "web")]
pub fn now_label() -> Option<String> {
    use js_sys::Date;
    let d = Date::new_0();
    if d.get_time().is_nan() {
        return None;
    }
    Some(clock_label(
        d.get_full_year() as i32,
        d.get_month() + 1,
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
        d.get_seconds(),
    ))
}

#[cfg(all(
    not(feature = "web"),
    any(feature = "server", feature = "desktop", feature = "mobile")
))]
pub fn now_label() -> Option<String> {
    use chrono::{Datelike, Local, Timelike};
    let now = Local::now();
    Some(clock_label(
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}

#[cfg(not(any(
    feature = "web",
    feature = "server",
    feature = "desktop",
    feature = "mobile"
)))]
pub fn now_label() -> Option<String> {
    None
}

/// `2847` -> `"2,847"`
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_megawatts(mw: f64) -> String {
    format!("{} MW", mw)
}

pub fn format_percent(pct: f64) -> String {
    format!("{}%", pct)
}

/// Signed change label for stat cards, e.g. `+5.2%`.
pub fn format_change(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

pub fn format_kwh(kwh: f64) -> String {
    format!("{} kWh", format_thousands(kwh.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2847), "2,847");
        assert_eq!(format_thousands(68_420), "68,420");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
        assert_eq!(format_thousands(-50_000), "-50,000");
    }

    #[test]
    fn table_units_match_source_numbers() {
        assert_eq!(format_megawatts(45.2), "45.2 MW");
        assert_eq!(format_megawatts(200.0), "200 MW");
        assert_eq!(format_percent(92.3), "92.3%");
        assert_eq!(format_kwh(49_871.0), "49,871 kWh");
    }

    #[test]
    fn change_labels_are_signed() {
        assert_eq!(format_change(5.2), "+5.2%");
        assert_eq!(format_change(-1.5), "-1.5%");
        assert_eq!(format_change(0.0), "0%");
    }

    #[test]
    fn clock_text_is_a_placeholder_until_the_client_sets_it() {
        assert_eq!(clock_text(None), "--");
        assert_eq!(
            clock_text(Some("2025년 10월 7일 09:05:03")),
            "2025년 10월 7일 09:05:03"
        );
    }

    #[test]
    fn clock_label_pads_time_only() {
        assert_eq!(clock_label(2025, 10, 7, 9, 5, 3), "2025년 10월 7일 09:05:03");
        assert_eq!(clock_label(2025, 1, 17, 14, 32, 59), "2025년 1월 17일 14:32:59");
    }
}
