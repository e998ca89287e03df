//! [`PayPeriod`] definitions.

use std::{fmt, iter::FusedIterator};

use common::{Date, IsoDate, Month, YearMonth};
use derive_more::{Display, Error, Into};

/// Day of month salaries are paid on, anchoring [`PayPeriod`]s.
///
/// [`Payday::CALENDAR_MONTH`] makes a [`PayPeriod`] cover a whole calendar
/// month. Any other day `N` makes it run from the day `N` of the previous
/// month through the day `N - 1` of the target month.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
pub struct Payday(u8);

impl Payday {
    /// [`Payday`] making [`PayPeriod`]s match calendar months.
    pub const CALENDAR_MONTH: Self = Self(1);

    /// Creates a new [`Payday`] if the given `day` is in `1..=31` range.
    ///
    /// # Errors
    ///
    /// With an [`InvalidPayday`] if the `day` is out of `1..=31` range.
    pub fn new(day: i64) -> Result<Self, InvalidPayday> {
        u8::try_from(day)
            .ok()
            .filter(|d| (1..=31).contains(d))
            .map(Self)
            .ok_or(InvalidPayday(day))
    }

    /// Returns the day of month of this [`Payday`].
    #[must_use]
    pub const fn day(self) -> u8 {
        self.0
    }

    /// Indicates whether this [`Payday`] is the
    /// [`Payday::CALENDAR_MONTH`].
    #[must_use]
    pub const fn is_calendar_month(self) -> bool {
        self.0 == Self::CALENDAR_MONTH.0
    }
}

impl Default for Payday {
    fn default() -> Self {
        Self::CALENDAR_MONTH
    }
}

impl TryFrom<i64> for Payday {
    type Error = InvalidPayday;

    fn try_from(day: i64) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

/// Error of a [`Payday`] being out of `1..=31` range.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("payday must be a day of month in `1..=31` range, got `{_0}`")]
pub struct InvalidPayday(#[error(not(source))] pub i64);

/// Inclusive range of days a single salary payout covers.
///
/// When a [`Payday`] doesn't exist in a month (`31` in April, `30` in
/// February), the bound falling into that month is clamped to its last day.
/// So, adjacent [`PayPeriod`]s may share their boundary day in such months.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PayPeriod {
    /// [`YearMonth`] this [`PayPeriod`] is paid for.
    target: YearMonth,

    /// [`Payday`] this [`PayPeriod`] is anchored to.
    payday: Payday,

    /// First day of this [`PayPeriod`].
    start: Date,

    /// Last day of this [`PayPeriod`].
    end: Date,
}

impl PayPeriod {
    /// Computes the [`PayPeriod`] paid for the `target` month.
    #[must_use]
    pub fn compute(target: YearMonth, payday: Payday) -> Self {
        let (start, end) = if payday.is_calendar_month() {
            (target.first_day(), target.last_day())
        } else {
            let day = payday.day();
            (target.day_of_previous(day), target.day(day - 1))
        };
        Self {
            target,
            payday,
            start,
            end,
        }
    }

    /// Computes the [`PayPeriod`] paid for the current month.
    #[must_use]
    pub fn current(payday: Payday) -> Self {
        Self::compute(YearMonth::current(), payday)
    }

    /// Computes the [`PayPeriod`] shifted by the signed number of `months`
    /// from this one, keeping its [`Payday`].
    ///
    /// [`None`] is returned if the target month is out of the supported range.
    #[must_use]
    pub fn offset(&self, months: i32) -> Option<Self> {
        self.target
            .offset(months)
            .map(|target| Self::compute(target, self.payday))
    }

    /// Computes the [`PayPeriod`] preceding this one.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.offset(-1)
    }

    /// Computes the [`PayPeriod`] following this one.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.offset(1)
    }

    /// Returns the [`YearMonth`] this [`PayPeriod`] is paid for.
    #[must_use]
    pub fn target(&self) -> YearMonth {
        self.target
    }

    /// Returns the [`Payday`] this [`PayPeriod`] is anchored to.
    #[must_use]
    pub fn payday(&self) -> Payday {
        self.payday
    }

    /// Returns the first day of this [`PayPeriod`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of this [`PayPeriod`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days in this [`PayPeriod`].
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.start.days_until(self.end) + 1).unwrap_or(0)
    }

    /// Indicates whether this [`PayPeriod`] has no days.
    ///
    /// Never happens for a computed [`PayPeriod`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indicates whether the given [`IsoDate`] falls into this
    /// [`PayPeriod`].
    ///
    /// Compares [`IsoDate`]s lexicographically.
    #[must_use]
    pub fn contains(&self, date: &IsoDate) -> bool {
        self.start.to_iso() <= *date && *date <= self.end.to_iso()
    }

    /// Returns an iterator over all the [`Day`]s of this [`PayPeriod`].
    #[must_use]
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
            month: None,
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { start, end, .. } = self;
        write!(
            f,
            "{}.{:02} — {}.{:02}",
            start.day(),
            u8::from(start.month()),
            end.day(),
            u8::from(end.month()),
        )
    }
}

/// Single day of a [`PayPeriod`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Day {
    /// [`IsoDate`] of this [`Day`].
    pub date: IsoDate,

    /// Day of month of this [`Day`], starting from `1`.
    pub day_of_month: u8,

    /// Whether this [`Day`] starts a new calendar month within its
    /// [`PayPeriod`].
    ///
    /// Never set for the first [`Day`] of a [`PayPeriod`].
    pub is_month_boundary: bool,
}

/// Iterator over the [`Day`]s of a [`PayPeriod`].
#[derive(Clone, Debug)]
pub struct Days {
    /// Next [`Date`] to yield.
    next: Option<Date>,

    /// Last [`Date`] to yield.
    end: Date,

    /// [`Month`] of the previously yielded [`Day`].
    month: Option<Month>,
}

impl Iterator for Days {
    type Item = Day;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|d| *d <= self.end)?;
        self.next = date.next();

        let is_month_boundary = self.month.is_some_and(|m| m != date.month());
        self.month = Some(date.month());

        Some(Day {
            date: date.to_iso(),
            day_of_month: date.day(),
            is_month_boundary,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .next
            .and_then(|d| usize::try_from(d.days_until(self.end) + 1).ok())
            .unwrap_or(0);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
