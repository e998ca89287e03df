//! [`Period`] definition.

use common::{
    operations::{By, Select},
    YearMonth,
};
use tracerr::Traced;

use crate::{
    domain::{period::Payday, PayPeriod, Settings},
    infra::{database, Database},
    query::settings,
    Query, Service,
};

/// [`Query`] to compute the [`PayPeriod`] of a target month anchored to the
/// configured [`Payday`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// [`YearMonth`] to compute the [`PayPeriod`] for.
    pub target: YearMonth,
}

impl<Db> Query<Period> for Service<Db>
where
    Db: Database<
        Select<By<Settings, ()>>,
        Ok = Settings,
        Err = Traced<database::Error>,
    >,
{
    type Ok = PayPeriod;
    type Err = Traced<database::Error>;

    #[tracing::instrument(skip_all, fields(target = %target))]
    async fn execute(
        &self,
        Period { target }: Period,
    ) -> Result<Self::Ok, Self::Err> {
        let payday = self.payday().await.map_err(tracerr::wrap!())?;

        Ok(PayPeriod::compute(target, payday))
    }
}

impl<Db> Service<Db> {
    /// Resolves the configured [`Payday`], falling back to the
    /// [`Payday::default()`] if the configured one is invalid.
    pub(crate) async fn payday(&self) -> Result<Payday, Traced<database::Error>>
    where
        Db: Database<
            Select<By<Settings, ()>>,
            Ok = Settings,
            Err = Traced<database::Error>,
        >,
    {
        let settings = self
            .execute(settings::Current::by(()))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(settings.payday().unwrap_or_else(|e| {
            let fallback = Payday::default();
            tracing::warn!("{e}, falling back to `{fallback}`");
            fallback
        }))
    }
}
