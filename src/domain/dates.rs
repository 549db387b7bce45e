use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Whole days since 1988-10-01, the first date of the match archive.
pub type DayIndex = i64;

pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1988, 10, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

pub fn day_index(date: NaiveDate) -> DayIndex {
    date.signed_duration_since(EPOCH).num_days()
}

pub fn date_from_index(index: DayIndex) -> Option<NaiveDate> {
    let offset = TimeDelta::try_days(index)?;
    EPOCH.checked_add_signed(offset)
}

pub fn today_index() -> DayIndex {
    day_index(Utc::now().date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a day index as `YYYY-MM-DD`, falling back to the raw number.
pub fn format_index(index: DayIndex) -> String {
    date_from_index(index)
        .map(format_date)
        .unwrap_or_else(|| index.to_string())
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .with_context(|| format!("Invalid date: {}", value))
}

/// Converts an update timestamp to Beijing time (UTC+8).
///
/// Timestamps carrying an offset are converted from it; naive timestamps
/// are read as UTC. Returns `None` when the value cannot be parsed.
pub fn to_beijing_time(timestamp: &str) -> Option<String> {
    let beijing = FixedOffset::east_opt(BEIJING_OFFSET_SECS)?;
    let utc = parse_timestamp(timestamp.trim())?;
    Some(
        utc.with_timezone(&beijing)
            .format("%m/%d/%Y %H:%M:%S")
            .to_string(),
    )
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(day_index(EPOCH), 0);
        assert_eq!(date_from_index(0), Some(EPOCH));
    }

    #[test]
    fn test_known_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(day_index(date), 13241);
        assert_eq!(format_index(11500), "2020-03-27");
    }

    #[test]
    fn test_round_trip_over_decades() {
        for index in (-400..20_000).step_by(7) {
            let date = date_from_index(index).unwrap();
            assert_eq!(day_index(date), index);
        }

        let mut date = NaiveDate::from_ymd_opt(1987, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2040, 1, 1).unwrap();
        while date < end {
            assert_eq!(date_from_index(day_index(date)), Some(date));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2020-01-05 ").unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 5).unwrap()
        );
        assert!(parse_date("05/01/2020").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_beijing_time_from_naive_utc() {
        assert_eq!(
            to_beijing_time("2025-03-01 20:15:00").as_deref(),
            Some("03/02/2025 04:15:00")
        );
    }

    #[test]
    fn test_beijing_time_from_offset() {
        assert_eq!(
            to_beijing_time("2025-03-01T10:00:00+02:00").as_deref(),
            Some("03/01/2025 16:00:00")
        );
        assert_eq!(to_beijing_time("yesterday"), None);
    }
}
