//! Date and time utilities.

use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date,
    Duration, Month, OffsetDateTime, UtcOffset, Weekday,
};

/// Format of a [`DateTime`] rendered with minute precision, as accepted by
/// `datetime-local` inputs.
const MINUTES_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// UTC date and time.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Creates a new [`DateTime`] from the provided Unix timestamp in seconds.
    ///
    /// [`None`] is returned if the timestamp is out of range.
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(timestamp).ok().map(Self)
    }

    /// Renders this [`DateTime`] as `YYYY-MM-DDTHH:MM` in the
    /// `America/New_York` local time.
    ///
    /// [`None`] is returned if the local time falls out of the supported
    /// range of years.
    #[must_use]
    pub fn to_eastern_minutes(&self) -> Option<String> {
        self.0
            .checked_to_offset(eastern_offset(self.0))?
            .format(MINUTES_FORMAT)
            .ok()
    }
}

/// Returns the `America/New_York` [`UtcOffset`] in effect at the provided UTC
/// instant.
///
/// Daylight saving time lasts from the second Sunday of March, 02:00 EST, till
/// the first Sunday of November, 02:00 EDT.
fn eastern_offset(utc: OffsetDateTime) -> UtcOffset {
    const EST: UtcOffset = time::macros::offset!(-5);
    const EDT: UtcOffset = time::macros::offset!(-4);

    let year = utc.year();
    let dst_start = nth_sunday(year, Month::March, 2)
        .with_hms(7, 0, 0)
        .map(|dt| dt.assume_utc());
    let dst_end = nth_sunday(year, Month::November, 1)
        .with_hms(6, 0, 0)
        .map(|dt| dt.assume_utc());

    match (dst_start, dst_end) {
        (Ok(start), Ok(end)) if (start..end).contains(&utc) => EDT,
        _ => EST,
    }
}

/// Returns the `nth` Sunday of the provided `month`.
fn nth_sunday(year: i32, month: Month, nth: u8) -> Date {
    let first = Date::from_calendar_date(year, month, 1)
        .unwrap_or(Date::MIN);
    let until_sunday = (7 - i64::from(
        first.weekday().number_days_from_sunday(),
    )) % 7;
    debug_assert_eq!(
        (first + Duration::days(until_sunday)).weekday(),
        Weekday::Sunday,
    );
    first + Duration::days(until_sunday + 7 * (i64::from(nth) - 1))
}
