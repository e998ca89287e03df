//! Salary [`Summary`] definitions.

use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use common::IsoDate;
use rust_decimal::Decimal;

use crate::domain::{
    member::{self, Rates},
    PayPeriod, WorkDay,
};

/// Salary earned over a [`PayPeriod`] along with the counters of the paid
/// [`WorkDay`]s.
///
/// [`Summary`]s of disjoint sets of [`WorkDay`]s add up to the [`Summary`] of
/// their union.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Total pay for all the [`WorkDay`]s.
    pub total: Decimal,

    /// Number of the [`WorkDay`]s.
    pub days_worked: u32,

    /// Number of the [`WorkDay`]s with the car bonus.
    pub car_days: u32,

    /// Number of the [`WorkDay`]s with the doubled base pay.
    pub double_days: u32,
}

impl Summary {
    /// Accounts the given [`WorkDay`] paid with the provided [`Rates`].
    pub fn add_day(&mut self, day: &WorkDay, rates: Rates) {
        self.total += day.pay(rates);
        self.days_worked += 1;
        if day.with_car {
            self.car_days += 1;
        }
        if day.is_double {
            self.double_days += 1;
        }
    }

    /// Summarizes the `records` of the specified member falling into the
    /// given [`PayPeriod`].
    #[must_use]
    pub fn of_period<'r, I>(
        records: I,
        member_id: &member::Id,
        period: &PayPeriod,
        rates: Rates,
    ) -> Self
    where
        I: IntoIterator<Item = &'r WorkDay>,
    {
        summarize(
            records,
            member_id,
            &period.start().to_iso(),
            &period.end().to_iso(),
            rates,
        )
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.days_worked += rhs.days_worked;
        self.car_days += rhs.car_days;
        self.double_days += rhs.double_days;
    }
}

impl Add for Summary {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Summarizes the `records` of the specified member dated within the
/// `start..=end` range.
///
/// Dates are compared lexicographically and never validated. Duplicate
/// records of the same day are all paid.
#[must_use]
pub fn summarize<'r, I>(
    records: I,
    member_id: &member::Id,
    start: &IsoDate,
    end: &IsoDate,
    rates: Rates,
) -> Summary
where
    I: IntoIterator<Item = &'r WorkDay>,
{
    records
        .into_iter()
        .filter(|d| {
            d.member_id == *member_id && *start <= d.date && d.date <= *end
        })
        .fold(Summary::default(), |mut summary, day| {
            summary.add_day(day, rates);
            summary
        })
}
