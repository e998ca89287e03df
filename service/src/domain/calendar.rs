//! Calendar [`Cell`]s of a [`PayPeriod`].

use std::collections::HashMap;

use common::{Date, IsoDate};

use crate::domain::{
    member,
    period::Day,
    work_day::{Kind, Modifiers},
    PayPeriod, WorkDay,
};

/// Single cell of a [`PayPeriod`] calendar grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    /// [`Day`] this [`Cell`] displays.
    pub day: Day,

    /// [`Modifiers`] of the [`WorkDay`] on this [`Cell`]'s [`Day`], if it was
    /// worked.
    pub worked: Option<Modifiers>,

    /// Whether this [`Cell`]'s [`Day`] is today.
    pub is_today: bool,
}

impl Cell {
    /// Returns the [`Kind`] of the [`WorkDay`] on this [`Cell`], if any.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.worked.map(Modifiers::kind)
    }

    /// Indicates whether this [`Cell`]'s [`Day`] was worked.
    #[must_use]
    pub fn is_worked(&self) -> bool {
        self.worked.is_some()
    }

    /// Indicates whether the company car bonus applies to this [`Cell`].
    #[must_use]
    pub fn has_car(&self) -> bool {
        self.worked.is_some_and(|m| m.with_car)
    }

    /// Indicates whether the base pay is doubled on this [`Cell`].
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.worked.is_some_and(|m| m.is_double)
    }
}

/// Lays the `records` of the specified member onto the [`Day`]s of the
/// given [`PayPeriod`].
///
/// If several records exist for the same day, the first one is displayed.
#[must_use]
pub fn cells<'r, I>(
    period: &PayPeriod,
    records: I,
    member_id: &member::Id,
    today: Date,
) -> Vec<Cell>
where
    I: IntoIterator<Item = &'r WorkDay>,
{
    let mut worked = HashMap::<&IsoDate, Modifiers>::new();
    for record in records {
        if record.member_id == *member_id && period.contains(&record.date) {
            _ = worked.entry(&record.date).or_insert(record.modifiers());
        }
    }

    let today = today.to_iso();
    period
        .days()
        .map(|day| Cell {
            worked: worked.get(&day.date).copied(),
            is_today: day.date == today,
            day,
        })
        .collect()
}

#[cfg(test)]
mod spec {
    use common::{Date, Month, YearMonth};

    use crate::domain::{
        period::Payday,
        work_day::{Kind, Modifiers},
        PayPeriod, WorkDay,
    };

    use super::cells;

    fn day(member: &str, date: &str, with_car: bool, is_double: bool) -> WorkDay {
        WorkDay {
            id: None,
            member_id: member.into(),
            date: date.into(),
            with_car,
            is_double,
        }
    }

    fn period() -> PayPeriod {
        PayPeriod::compute(
            YearMonth::new(2025, Month::June).unwrap(),
            Payday::new(15).unwrap(),
        )
    }

    #[test]
    fn covers_every_period_day() {
        let today = Date::new(2025, Month::June, 3).unwrap();
        let cells =
            cells(&period(), std::iter::empty::<&WorkDay>(), &"m1".into(), today);

        assert_eq!(cells.len(), 31);
        assert!(cells.iter().all(|c| !c.is_worked()));
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(cells.iter().find(|c| c.is_today).unwrap().day.date, "2025-06-03");
        assert_eq!(cells.iter().position(|c| c.day.is_month_boundary), Some(17));
    }

    #[test]
    fn marks_worked_days() {
        let records = [
            day("m1", "2025-05-20", false, false),
            day("m1", "2025-05-21", true, false),
            day("m1", "2025-06-01", false, true),
            day("m1", "2025-06-02", true, true),
            day("m2", "2025-06-03", true, true),
            day("m1", "2025-06-20", false, false),
        ];
        let today = Date::new(2025, Month::July, 1).unwrap();

        let cells = cells(&period(), &records, &"m1".into(), today);
        let kind = |date: &str| cells.iter().find(|c| c.day.date == date).unwrap().kind();

        assert_eq!(kind("2025-05-20"), Some(Kind::Regular));
        assert_eq!(kind("2025-05-21"), Some(Kind::Car));
        assert_eq!(kind("2025-06-01"), Some(Kind::Double));
        assert_eq!(kind("2025-06-02"), Some(Kind::Double));
        assert_eq!(kind("2025-06-03"), None);
        let both = cells.iter().find(|c| c.day.date == "2025-06-02").unwrap();
        assert!(both.has_car() && both.is_double());
        assert_eq!(cells.iter().filter(|c| c.is_worked()).count(), 4);
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn first_record_of_a_day_wins() {
        let records = [
            day("m1", "2025-06-10", true, false),
            day("m1", "2025-06-10", false, true),
        ];
        let today = Date::new(2025, Month::June, 10).unwrap();

        let cells = cells(&period(), &records, &"m1".into(), today);
        let cell = cells.iter().find(|c| c.day.date == "2025-06-10").unwrap();

        assert_eq!(
            cell.worked,
            Some(Modifiers {
                with_car: true,
                is_double: false,
            }),
        );
        assert!(cell.is_today);
    }
}
