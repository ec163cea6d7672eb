//! Date and time utilities.
//!
//! Stored timestamps are ISO-8601 strings. Parsing is lenient: RFC 3339, a
//! naive datetime, and a bare date are all accepted, and anything else is
//! treated as missing so a single bad record cannot poison a whole
//! collection. Day-bucketing everywhere uses calendar-day equality in the
//! local timezone, not a rolling 24-hour window.

use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};

/// Parse an ISO-8601 timestamp, tolerating common variants.
///
/// Accepts RFC 3339 (`2023-10-01T15:30:00Z`), a naive datetime
/// (`2023-10-01T15:30:00`, read as UTC), or a bare date (`2023-10-01`,
/// read as local midnight). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return local_midnight(date);
    }

    None
}

/// The instant a local calendar day begins, in UTC.
#[must_use]
pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&NaiveDateTime::new(date, midnight))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The local calendar day a timestamp falls on.
#[must_use]
pub fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Number of whole days between two instants.
#[must_use]
pub fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_days()
}

/// Short chart label for a day, e.g. `Oct 5`.
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Formatted inclusive date range, e.g. `Sep 15 - Oct 02`.
#[must_use]
pub fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %d"), end.format("%b %d"))
}

/// Weekday display names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Index of a weekday counting from Sunday.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Parse a due-date expression relative to `today`.
///
/// Supports `today`, `tomorrow`, `yesterday`, weekday names (next
/// occurrence, `next <weekday>` forces a week out), `in N days`,
/// `in N weeks`, and ISO dates.
#[must_use]
pub fn parse_due_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    if let Some(date) = parse_relative_offset(&input, today) {
        return Some(date);
    }

    if let Some(date) = parse_weekday(&input, today) {
        return Some(date);
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

/// Parse `in N days` / `in N weeks` patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() >= 3 && parts[0] == "in" {
        let amount: i64 = parts[1].parse().ok()?;
        let unit = parts[2].trim_end_matches('s');

        let days = match unit {
            "day" => amount,
            "week" => amount * 7,
            _ => return None,
        };

        return Some(today + Duration::days(days));
    }

    None
}

/// Parse weekday names, with an optional `next` prefix.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_until = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    if days_until == 0 || (is_next && days_until <= 7) {
        days_until += 7;
    }

    Some(today + Duration::days(days_until))
}

/// Serde adapter for lenient optional ISO-8601 timestamp fields.
///
/// Serializes as RFC 3339; deserializes through [`parse_timestamp`], mapping
/// malformed values to `None` instead of failing the record.
pub mod lenient {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(super::parse_timestamp))
    }
}
