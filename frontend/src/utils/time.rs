use chrono::{Local, NaiveDate, NaiveDateTime};
use std::time::Duration;

use crate::api::parse_local_timestamp;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Local wall-clock time without zone, the form shift records are stamped with.
pub fn now_local_timestamp() -> String {
    format_wire_timestamp(Local::now().naive_local())
}

pub fn format_wire_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_timestamp(raw: &str) -> String {
    parse_local_timestamp(raw)
        .map(|value| value.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| if raw.trim().is_empty() { "-".into() } else { raw.to_string() })
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".into())
}

/// Value for an `<input type="date">`.
pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Runs `f` once after `delay` on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    leptos::set_timeout(f, delay);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn after(_delay: Duration, _f: impl FnOnce() + 'static) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_timestamp_has_seconds_and_no_zone() {
        let value = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(7, 5, 9))
            .unwrap();
        assert_eq!(format_wire_timestamp(value), "2024-01-02T07:05:09");
        let now = now_local_timestamp();
        assert_eq!(now.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&now, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn display_helpers() {
        assert_eq!(format_timestamp("2024-01-02T08:00:00"), "02/01/2024 08:00:00");
        assert_eq!(format_timestamp(""), "-");
        assert_eq!(format_timestamp("ayer"), "ayer");
        assert_eq!(format_date(None), "-");
        assert_eq!(
            date_input_value(parse_date_input("2024-05-10")),
            "2024-05-10"
        );
        assert_eq!(parse_date_input("10/05/2024"), None);
    }
}
