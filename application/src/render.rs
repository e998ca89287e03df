//! [`Report`] rendering.

use std::fmt;

use common::Money;
use itertools::Itertools as _;
use service::{
    domain::{calendar::Cell, member, work_day::Kind},
    query::report::salary,
};

/// Legend of the calendar grid marks.
const LEGEND: &str = "* worked   c with car   x double   [..] today   \
                      | month boundary";

/// Number of [`Cell`]s in a single row of the calendar grid.
const WEEK: usize = 7;

/// Human-readable report of a [`salary::Output`].
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    /// ID of the team member the salary is reported for.
    pub member_id: &'a member::Id,

    /// Reported [`salary::Output`].
    pub salary: &'a salary::Output,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            member_id,
            salary:
                salary::Output {
                    period,
                    rates,
                    summary,
                    total,
                    cells,
                },
        } = self;
        let money = |amount| Money::new(amount, total.currency);

        let target = period.target();
        writeln!(f, "{} {}: {period}", target.month(), target.year())?;
        writeln!(f, "Member: {member_id}")?;
        writeln!(f, "Total: {}", total.pretty())?;
        writeln!(
            f,
            "Days worked: {} (with car: {}, double: {})",
            summary.days_worked, summary.car_days, summary.double_days,
        )?;
        writeln!(
            f,
            "Rates: {} per day, {} car bonus",
            money(rates.daily).pretty(),
            money(rates.car_bonus).pretty(),
        )?;

        writeln!(f)?;
        for week in cells.chunks(WEEK) {
            writeln!(f, "{}", week.iter().map(Mark).format(""))?;
        }
        write!(f, "\n{LEGEND}")
    }
}

/// Calendar grid mark of a [`Cell`].
struct Mark<'c>(&'c Cell);

impl fmt::Display for Mark<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Cell { day, is_today, .. } = self.0;

        let divider = if day.is_month_boundary { '|' } else { ' ' };
        let (open, close) = if *is_today { ('[', ']') } else { (' ', ' ') };
        let kind = match self.0.kind() {
            None => ' ',
            Some(Kind::Regular) => '*',
            Some(Kind::Car) => 'c',
            Some(Kind::Double) => 'x',
        };

        write!(f, "{divider}{open}{:>2}{kind}{close}", day.day_of_month)
    }
}

#[cfg(test)]
mod spec {
    use common::{Currency, Date, Money, Month, YearMonth};
    use rust_decimal::Decimal;
    use service::{
        domain::{
            calendar,
            member::{self, Rates},
            period::Payday,
            salary::Summary,
            PayPeriod, WorkDay,
        },
        query::report::salary,
    };

    use super::Report;

    fn render(records: &[WorkDay], today: Date) -> String {
        let member_id = member::Id::from("m1");
        let period = PayPeriod::compute(
            YearMonth::new(2025, Month::June).unwrap(),
            Payday::new(15).unwrap(),
        );
        let rates = Rates::new(Decimal::from(2000), Decimal::from(500));
        let summary = Summary::of_period(records, &member_id, &period, rates);
        let output = salary::Output {
            cells: calendar::cells(&period, records, &member_id, today),
            total: Money::new(summary.total, Currency::Rub),
            period,
            rates,
            summary,
        };

        Report {
            member_id: &member_id,
            salary: &output,
        }
        .to_string()
    }

    #[test]
    fn renders_header() {
        let records = [WorkDay {
            id: None,
            member_id: "m1".into(),
            date: "2025-06-10".into(),
            with_car: true,
            is_double: true,
        }];

        let report = render(&records, Date::new(2025, Month::June, 10).unwrap());
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "June 2025: 15.05 — 14.06");
        assert_eq!(lines[1], "Member: m1");
        assert_eq!(lines[2], "Total: 4 500 ₽");
        assert_eq!(lines[3], "Days worked: 1 (with car: 1, double: 1)");
        assert_eq!(lines[4], "Rates: 2 000 ₽ per day, 500 ₽ car bonus");
    }

    #[test]
    fn renders_calendar_grid() {
        let records = [
            WorkDay {
                id: None,
                member_id: "m1".into(),
                date: "2025-05-20".into(),
                with_car: false,
                is_double: false,
            },
            WorkDay {
                id: None,
                member_id: "m1".into(),
                date: "2025-06-10".into(),
                with_car: true,
                is_double: true,
            },
        ];

        let report = render(&records, Date::new(2025, Month::June, 10).unwrap());
        let grid = report.lines().skip(6).take(5).collect::<Vec<_>>();

        assert_eq!(grid[0], "  15    16    17    18    19    20*   21  ");
        assert!(grid[2].contains("|  1 "), "{}", grid[2]);
        assert!(grid[3].contains("[10x]"), "{}", grid[3]);
        assert_eq!(grid[4].len(), 3 * 6);
        assert!(report.ends_with("| month boundary"));
    }
}
