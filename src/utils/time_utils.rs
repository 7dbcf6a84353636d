use chrono::DateTime;

/// Display format for bucket open times on the x axis.
pub const AXIS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats an epoch-seconds timestamp as a UTC date-time string. Out of
/// range values (the plot can be panned anywhere) come back empty.
pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(AXIS_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_minutes() {
        assert_eq!(epoch_sec_to_utc(1_700_000_000), "2023-11-14 22:13");
        assert_eq!(epoch_sec_to_utc(0), "1970-01-01 00:00");
    }

    #[test]
    fn out_of_range_timestamp_formats_empty() {
        assert_eq!(epoch_sec_to_utc(i64::MAX), "");
    }
}
