//! Calendar date utilities.

use std::{fmt, str::FromStr};

use derive_more::{AsRef, Display, Error, From, Into};
use time::{macros::format_description, OffsetDateTime};

pub use time::Month;

/// Minimal year a [`YearMonth`] may have.
///
/// One year above the minimal [`Date`] year, so the month preceding any
/// [`YearMonth`] is always representable.
const MIN_YEAR: i32 = time::Date::MIN.year() + 1;

/// Maximal year a [`YearMonth`] may have.
const MAX_YEAR: i32 = time::Date::MAX.year();

/// Calendar day without a time-of-day or a timezone.
///
/// Always interpreted as a local wall-clock day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] from its calendar components.
    ///
    /// [`None`] is returned if the `day` doesn't exist in the given month.
    #[must_use]
    pub fn new(year: i32, month: Month, day: u8) -> Option<Self> {
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Creates a new [`Date`] clamping the `day` into the days of the given
    /// month.
    ///
    /// [`None`] is returned only if the `year` is out of the supported range.
    #[must_use]
    pub fn clamped(year: i32, month: Month, day: u8) -> Option<Self> {
        let last = time::util::days_in_year_month(year, month);
        Self::new(year, month, day.clamp(1, last))
    }

    /// Returns the current local [`Date`].
    ///
    /// Falls back to the UTC date if the local offset cannot be determined.
    #[must_use]
    pub fn today() -> Self {
        let now = OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the [`Month`] of this [`Date`].
    #[must_use]
    pub fn month(self) -> Month {
        self.0.month()
    }

    /// Returns the day of month of this [`Date`], starting from `1`.
    #[must_use]
    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Returns the [`YearMonth`] this [`Date`] belongs to.
    ///
    /// [`None`] is returned for the dates of the very first supported year.
    #[must_use]
    pub fn year_month(self) -> Option<YearMonth> {
        YearMonth::new(self.year(), self.month())
    }

    /// Returns the [`Date`] following this one, if it's representable.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    /// Returns the number of calendar days from this [`Date`] until the
    /// `other` one.
    ///
    /// Negative if the `other` [`Date`] precedes this one.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }

    /// Returns the [`IsoDate`] representation of this [`Date`].
    #[must_use]
    pub fn to_iso(self) -> IsoDate {
        IsoDate(self.to_string())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            u8::from(self.month()),
            self.day(),
        )
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(ParseError)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

/// Error of parsing a [`Date`] from a `YYYY-MM-DD` string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

/// Zero-padded `YYYY-MM-DD` representation of a calendar day.
///
/// Ordered lexicographically, which matches the chronological order thanks to
/// the fixed-width format. The format itself is never validated, so any
/// string coming from outside is taken as is.
#[derive(
    AsRef,
    Clone,
    Debug,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct IsoDate(String);

impl IsoDate {
    /// Returns this [`IsoDate`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses this [`IsoDate`] into a [`Date`].
    ///
    /// # Errors
    ///
    /// Errors if this [`IsoDate`] isn't a valid `YYYY-MM-DD` date.
    pub fn parse(&self) -> Result<Date, ParseError> {
        self.0.parse()
    }
}

impl From<Date> for IsoDate {
    fn from(date: Date) -> Self {
        date.to_iso()
    }
}

impl PartialEq<str> for IsoDate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IsoDate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Month of a specific year.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct YearMonth {
    /// Year of this [`YearMonth`].
    year: i32,

    /// [`Month`] of this [`YearMonth`].
    month: Month,
}

impl YearMonth {
    /// Creates a new [`YearMonth`].
    ///
    /// [`None`] is returned if the `year` is out of the supported range.
    #[must_use]
    pub fn new(year: i32, month: Month) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&year)
            .then_some(Self { year, month })
    }

    /// Creates a new [`YearMonth`] from a zero-based month `index`
    /// (`0` is January, `11` is December).
    ///
    /// [`None`] is returned if the `index` is greater than `11` or the `year`
    /// is out of the supported range.
    #[must_use]
    pub fn from_index(year: i32, index: u8) -> Option<Self> {
        let month = Month::try_from(index.checked_add(1)?).ok()?;
        Self::new(year, month)
    }

    /// Returns the [`YearMonth`] of the current local [`Date`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn current() -> Self {
        Date::today()
            .year_month()
            .expect("current year is in the supported range")
    }

    /// Returns the year of this [`YearMonth`].
    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the [`Month`] of this [`YearMonth`].
    #[must_use]
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the zero-based index of this [`YearMonth`]'s [`Month`].
    #[must_use]
    pub fn index(self) -> u8 {
        u8::from(self.month) - 1
    }

    /// Returns the number of days in this [`YearMonth`], honouring leap
    /// years.
    #[must_use]
    pub fn days(self) -> u8 {
        time::util::days_in_year_month(self.year, self.month)
    }

    /// Returns the [`Date`] of the given `day` in this [`YearMonth`], clamped
    /// into `1..=`[`YearMonth::days()`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn day(self, day: u8) -> Date {
        Date::clamped(self.year, self.month, day)
            .expect("year is in the supported range")
    }

    /// Returns the first [`Date`] of this [`YearMonth`].
    #[must_use]
    pub fn first_day(self) -> Date {
        self.day(1)
    }

    /// Returns the last [`Date`] of this [`YearMonth`].
    #[must_use]
    pub fn last_day(self) -> Date {
        self.day(self.days())
    }

    /// Returns the day of the month preceding this [`YearMonth`], clamped
    /// into the days of that month.
    ///
    /// Unlike [`YearMonth::previous()`], always succeeds.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn day_of_previous(self, day: u8) -> Date {
        let (year, month) = if self.month == Month::January {
            (self.year - 1, Month::December)
        } else {
            (self.year, self.month.previous())
        };
        Date::clamped(year, month, day)
            .expect("`MIN_YEAR` leaves room for the previous month")
    }

    /// Shifts this [`YearMonth`] by the signed number of months, wrapping the
    /// year on under/overflow.
    ///
    /// [`None`] is returned if the result is out of the supported range.
    #[must_use]
    pub fn offset(self, months: i32) -> Option<Self> {
        let total = i64::from(self.year) * 12
            + i64::from(self.index())
            + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let index = u8::try_from(total.rem_euclid(12)).ok()?;
        Self::from_index(year, index)
    }

    /// Returns the previous [`YearMonth`], if it's in the supported range.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.offset(-1)
    }

    /// Returns the next [`YearMonth`], if it's in the supported range.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.offset(1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.rsplit_once('-').ok_or("expected `YYYY-MM`")?;
        if month.len() != 2 {
            return Err("expected two-digit month");
        }
        let year = year.parse().map_err(|_| "invalid year")?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or("invalid month")?;
        Self::new(year, month).ok_or("year is out of range")
    }
}

#[cfg(test)]
mod spec {
    use super::{Date, IsoDate, Month, YearMonth};

    fn ym(year: i32, month: Month) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn formats_zero_padded() {
        let date = Date::new(2025, Month::June, 1).unwrap();

        assert_eq!(date.to_string(), "2025-06-01");
        assert_eq!(date.to_iso(), "2025-06-01");
        assert_eq!(Date::new(987, Month::December, 9).unwrap().to_string(), "0987-12-09");
    }

    #[test]
    fn parses_iso_string() {
        let date: Date = "2024-02-29".parse().unwrap();

        assert_eq!(date, Date::new(2024, Month::February, 29).unwrap());
        assert!("2023-02-29".parse::<Date>().is_err());
        assert!("2023-2-1".parse::<Date>().is_err());
        assert!("not a date".parse::<Date>().is_err());
        assert_eq!(IsoDate::from("2024-02-29").parse().unwrap(), date);
    }

    #[test]
    fn clamps_day_into_month() {
        assert_eq!(
            Date::clamped(2025, Month::February, 31),
            Date::new(2025, Month::February, 28),
        );
        assert_eq!(
            Date::clamped(2024, Month::February, 30),
            Date::new(2024, Month::February, 29),
        );
        assert_eq!(
            Date::clamped(2025, Month::April, 31),
            Date::new(2025, Month::April, 30),
        );
        assert_eq!(
            Date::clamped(2025, Month::April, 0),
            Date::new(2025, Month::April, 1),
        );
    }

    #[test]
    fn steps_over_month_and_year() {
        let eoy = Date::new(2024, Month::December, 31).unwrap();
        let leap = Date::new(2024, Month::February, 28).unwrap();

        assert_eq!(eoy.next(), Date::new(2025, Month::January, 1));
        assert_eq!(leap.next(), Date::new(2024, Month::February, 29));
        assert_eq!(leap.days_until(eoy), 307);
        assert_eq!(eoy.days_until(leap), -307);
    }

    #[test]
    fn iso_dates_compare_lexicographically() {
        let start = IsoDate::from("2025-05-15");
        let end = IsoDate::from("2025-06-14");

        assert!(start < IsoDate::from("2025-05-31"));
        assert!(IsoDate::from("2025-06-01") < end);
        assert!(IsoDate::from("2025-06-15") > end);
        assert!(IsoDate::from("2024-12-31") < start);
    }

    #[test]
    fn counts_days_in_month() {
        assert_eq!(ym(2025, Month::June).days(), 30);
        assert_eq!(ym(2025, Month::February).days(), 28);
        assert_eq!(ym(2024, Month::February).days(), 29);
        assert_eq!(ym(1900, Month::February).days(), 28);
        assert_eq!(ym(2000, Month::February).days(), 29);
        assert_eq!(
            ym(2025, Month::June).last_day(),
            Date::new(2025, Month::June, 30).unwrap(),
        );
    }

    #[test]
    fn converts_zero_based_index() {
        assert_eq!(YearMonth::from_index(2025, 0), Some(ym(2025, Month::January)));
        assert_eq!(YearMonth::from_index(2025, 5), Some(ym(2025, Month::June)));
        assert_eq!(YearMonth::from_index(2025, 11), Some(ym(2025, Month::December)));
        assert_eq!(YearMonth::from_index(2025, 12), None);
        assert_eq!(YearMonth::from_index(2025, u8::MAX), None);
        assert_eq!(ym(2025, Month::June).index(), 5);
    }

    #[test]
    fn offsets_with_year_wrap() {
        let jan = ym(2025, Month::January);

        assert_eq!(jan.previous(), Some(ym(2024, Month::December)));
        assert_eq!(jan.offset(11), Some(ym(2025, Month::December)));
        assert_eq!(jan.offset(12), Some(ym(2026, Month::January)));
        assert_eq!(jan.offset(-13), Some(ym(2023, Month::December)));
        assert_eq!(jan.offset(0), Some(jan));
        assert_eq!(ym(2025, Month::December).next(), Some(ym(2026, Month::January)));
        assert_eq!(jan.offset(i32::MAX), None);
    }

    #[test]
    fn gives_day_of_previous_month() {
        assert_eq!(
            ym(2025, Month::January).day_of_previous(15),
            Date::new(2024, Month::December, 15).unwrap(),
        );
        assert_eq!(
            ym(2025, Month::March).day_of_previous(31),
            Date::new(2025, Month::February, 28).unwrap(),
        );
    }

    #[test]
    fn parses_year_month() {
        assert_eq!("2025-06".parse::<YearMonth>(), Ok(ym(2025, Month::June)));
        assert_eq!(ym(2025, Month::June).to_string(), "2025-06");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-6".parse::<YearMonth>().is_err());
        assert!("2025".parse::<YearMonth>().is_err());
    }
}
