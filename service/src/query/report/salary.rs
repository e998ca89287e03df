//! [`Salary`] definition.

use common::{
    operations::{By, Select},
    Date, Money, YearMonth,
};
use tracerr::Traced;

use crate::{
    domain::{
        calendar::{self, Cell},
        member::{self, Rates},
        salary::Summary,
        PayPeriod, Settings, TeamMember, WorkDay,
    },
    infra::{database, Database},
    query, Query, Service,
};

/// [`Query`] to calculate the salary earned by a [`TeamMember`] over the
/// [`PayPeriod`] of a target month.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Salary {
    /// ID of the [`TeamMember`] to calculate the salary for.
    pub member_id: member::Id,

    /// [`YearMonth`] the salary is paid for.
    pub target: YearMonth,

    /// Current day, highlighted in the [`Output::cells`].
    pub today: Date,

    /// [`Rates`] used in place of the unset [`TeamMember`] ones.
    pub fallback_rates: Option<Rates>,
}

/// Output of the [`Salary`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// [`PayPeriod`] the salary is calculated over.
    pub period: PayPeriod,

    /// [`Rates`] the salary is calculated with.
    pub rates: Rates,

    /// [`Summary`] of the paid [`WorkDay`]s.
    pub summary: Summary,

    /// Total salary in the configured currency.
    pub total: Money,

    /// Calendar [`Cell`]s of the [`PayPeriod`].
    pub cells: Vec<Cell>,
}

impl<Db> Query<Salary> for Service<Db>
where
    Db: Database<
            Select<By<Settings, ()>>,
            Ok = Settings,
            Err = Traced<database::Error>,
        > + for<'id> Database<
            Select<By<Option<TeamMember>, &'id member::Id>>,
            Ok = Option<TeamMember>,
            Err = Traced<database::Error>,
        > + for<'id> Database<
            Select<By<Vec<WorkDay>, &'id member::Id>>,
            Ok = Vec<WorkDay>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    #[tracing::instrument(
        skip_all,
        fields(member = %member_id, target = %target),
    )]
    async fn execute(
        &self,
        Salary {
            member_id,
            target,
            today,
            fallback_rates,
        }: Salary,
    ) -> Result<Self::Ok, Self::Err> {
        let payday = self.payday().await.map_err(tracerr::wrap!())?;
        let period = PayPeriod::compute(target, payday);

        let member = self
            .execute(query::member::ById::by(&member_id))
            .await
            .map_err(tracerr::wrap!())?;
        if member.is_none() {
            tracing::debug!("team member `{member_id}` not found");
        }
        let rates = member.as_ref().map_or(Rates::ZERO, TeamMember::rates);
        let rates = fallback_rates.map_or(rates, |f| rates.or(f));

        let records = self
            .execute(query::work_day::ByMember::by(&member_id))
            .await
            .map_err(tracerr::wrap!())?;

        let summary = Summary::of_period(&records, &member_id, &period, rates);
        let cells = calendar::cells(&period, &records, &member_id, today);

        Ok(Output {
            period,
            rates,
            summary,
            total: Money::new(summary.total, self.config().currency),
            cells,
        })
    }
}
