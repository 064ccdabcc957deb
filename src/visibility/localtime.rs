use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc};

const CET_SECS: i32 = 3600;
const CEST_SECS: i32 = 7200;

/// Converts a pass instant to German civil time.
///
/// The observer model is fixed to Germany, so the EU daylight-saving rule is
/// applied directly instead of pulling in a tz database: summer time runs
/// from 01:00 UTC on the last Sunday of March until 01:00 UTC on the last
/// Sunday of October.
pub fn to_local(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    let secs = if is_summer_time(utc) { CEST_SECS } else { CET_SECS };
    let offset = FixedOffset::east_opt(secs).expect("offset within range");
    utc.with_timezone(&offset)
}

fn is_summer_time(utc: DateTime<Utc>) -> bool {
    let start = last_sunday_at_0100_utc(utc.year(), 3);
    let end = last_sunday_at_0100_utc(utc.year(), 10);
    utc >= start && utc < end
}

fn last_sunday_at_0100_utc(year: i32, month: u32) -> DateTime<Utc> {
    // Both switch months have 31 days.
    let last_day = NaiveDate::from_ymd_opt(year, month, 31).expect("31-day month");
    let days_back = u64::from(last_day.weekday().num_days_from_sunday());
    let sunday = last_day - Days::new(days_back);
    sunday
        .and_hms_opt(1, 0, 0)
        .expect("valid time of day")
        .and_utc()
}
