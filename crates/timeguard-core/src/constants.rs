use chrono::NaiveDate;

/// Anchor date components used to normalize time-of-day values onto a fixed
/// calendar day, so that two times compare purely by time-of-day.
pub const ANCHOR_YEAR: i32 = 2000;
pub const ANCHOR_MONTH: u32 = 1;
pub const ANCHOR_DAY: u32 = 1;

/// ## Summary
/// Returns the anchor date (2000-01-01) as a `NaiveDate`.
#[must_use]
pub fn anchor_date() -> NaiveDate {
    // 2000-01-01 is always a valid calendar date
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, ANCHOR_MONTH, ANCHOR_DAY).unwrap_or_default()
}
